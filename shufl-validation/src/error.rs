use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Too many permutations for a sequence of length {0}")]
    TooManyPermutations(usize),

    #[error(transparent)]
    Shuffler(#[from] anyhow::Error),
}
