//! Error types for the hook binaries

use thiserror::Error;

/// Main error type for the hooks
///
/// The only failure that can occur in practice is a payload decode
/// failure, and policy is to recover it locally into the safe default
/// (no hints / allow). Nothing here ever reaches the host as an error.
#[derive(Debug, Error)]
pub enum HookError {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while decoding the payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the hooks
pub type Result<T> = std::result::Result<T, HookError>;
