//! Error types for attribute rendering

use thiserror::Error;

/// Errors raised while producing output from parsed attributes
#[derive(Error, Debug)]
pub enum AttrError {
    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for attribute operations
pub type Result<T> = std::result::Result<T, AttrError>;
