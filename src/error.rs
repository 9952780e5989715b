//! Error types for the search transformer.
//!
//! All fallible operations in this crate return [`TransformError`] through the
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use search_transformer::error::{Result, TransformError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TransformError::invalid_config("start marker must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for transformation operations.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The backend payload is not valid JSON or does not match the envelope shape.
    #[error("Failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The backend envelope decoded but held no sub-responses.
    #[error("Response to be transformed contained 0 items")]
    EmptyResponse,

    /// The public response failed to serialize.
    #[error("Failed to encode transformed response: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backend client reported a failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (reading payloads and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with TransformError.
pub type Result<T> = std::result::Result<T, TransformError>;

impl TransformError {
    /// Create a new decode error.
    pub fn decode(err: serde_json::Error) -> Self {
        TransformError::Decode(err)
    }

    /// Create a new encode error.
    pub fn encode(err: serde_json::Error) -> Self {
        TransformError::Encode(err)
    }

    /// Create a new backend error.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        TransformError::Backend(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TransformError::InvalidConfig(msg.into())
    }
}
