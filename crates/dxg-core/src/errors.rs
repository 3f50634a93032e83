//! Cross-cutting error types for dxguide.
//!
//! Transport and decode failures live in `dxg-fetch`, configuration failures
//! in `dxg-config`. The CLI converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any dxguide crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Decoded data failed a content constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A content kind name did not match any known kind.
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),
}
