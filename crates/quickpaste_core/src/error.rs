//! Application error types for store and validation logic.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Content is required.")]
    InvalidContent,

    #[error("Invalid expiration option: {0:?}")]
    InvalidOption(String),

    #[error("Invalid image data: {0}")]
    InvalidPayload(String),

    #[error("Image too large (limit {limit} bytes)")]
    TooLarge { limit: usize },

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}
