//! Fetch error types.

use dxg_core::CoreError;
use thiserror::Error;

/// Errors that can occur while fetching and decoding a content document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// Reading a local document failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The body was not a JSON array of well-formed records.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL or a data path could not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Decoded records violated a content constraint.
    #[error(transparent)]
    Validation(#[from] CoreError),
}
