mod error;

pub mod combinatorics;
pub mod distribution;
pub mod validator;

pub use distribution::Distribution;
pub use error::Error;
pub use validator::{ClassCount, UniformityReport, UniformityValidator};

pub type Result<T> = std::result::Result<T, Error>;
