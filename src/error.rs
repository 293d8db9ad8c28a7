//! # Error Types
//!
//! This module defines error types used throughout the calcicon library.

use thiserror::Error;

/// Main error type for icon generation and serving.
#[derive(Debug, Error)]
pub enum IconError {
    /// Non-positive or unrepresentable edge length
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error wrapper (writing artifacts, binding sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External rasterizer unavailable or given malformed input
    #[error("Dependency error: {0}")]
    Dependency(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// JSON encoding error (manifest fragment)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<image::ImageError> for IconError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => IconError::Io(e),
            other => IconError::Image(other.to_string()),
        }
    }
}
