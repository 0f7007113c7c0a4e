//! Error types for the libdocs library

use thiserror::Error;

/// Result type alias for libdocs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors that can occur while talking to the documentation API
#[derive(Debug, Error)]
pub enum DocsError {
    /// Transport failure: timeout, connection refused, TLS, unexpected status on search
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The documentation endpoint answered with a non-2xx status other than 404
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        body: String,
    },
    /// The search endpoint returned a body that is not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Failed writing to an output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
