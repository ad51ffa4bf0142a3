//! Error types for GitHub search operations.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur while performing a single search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The body did not match the search envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A successful status arrived without a body.
    #[error("HTTP {status}: response carried no body")]
    MissingBody { status: u16 },

    /// Non-success status that is not a "no such resource" signal.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
