pub mod request;
pub mod shuffle;
pub mod validate;
