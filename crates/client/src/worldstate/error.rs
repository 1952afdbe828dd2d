//! Worldstate client error types.

use std::sync::Arc;

use worldstate_core::ConfigError;

/// Errors from the worldstate API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error below HTTP semantics (DNS, refused, reset).
    #[error("transport error: {0}")]
    Transport(Arc<reqwest::Error>),

    /// The server answered with a status other than 200 or 304.
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The server answered 304 for a URL we have never cached.
    #[error("not modified response for {0} with nothing cached")]
    UnexpectedNotModified(String),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Error::Timeout } else { Error::Transport(Arc::new(err)) }
    }
}
