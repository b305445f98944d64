pub mod reqres;

pub use reqres::{handle_request, Request, Response};
