//! HTTP client module for talking to the API server

mod http;
mod traits;

pub use http::{ApiClient, ClientError, DEFAULT_ADDRESS};
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
