//! Shufl Core
//!
//! This package provides the shuffling capability behind the shufl service:
//! - The `Shuffler` trait and its implementations
//! - A per-instance, lazily seeded random source
//! - The dasherized codec for sequences of string tokens

pub mod sequence;
pub mod shuffler;
mod source;

pub use shuffler::dummy::DummyShuffler;
pub use shuffler::durstenfeld::DurstenfeldShuffler;
pub use shuffler::naive::NaiveShuffler;
pub use shuffler::Shuffler;
pub use source::RandomSource;
