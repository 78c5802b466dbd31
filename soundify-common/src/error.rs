//! Common error types for the Soundify client

use thiserror::Error;

/// Common result type for Soundify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes observed by the recommendation client
///
/// Network failure, non-success HTTP status, and malformed response body
/// all end a request attempt the same way: the error is logged and no
/// state mutation occurs. There is no retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Network/transport failure (connection refused, DNS, aborted body)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status with the response body text
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Malformed response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
