//! Error types for the Verdict library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`VerdictError`] enum.
//!
//! # Examples
//!
//! ```
//! use verdict::error::{Result, VerdictError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VerdictError::invalid_input("review text is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Verdict operations.
#[derive(Error, Debug)]
pub enum VerdictError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (tokenization, filtering, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Caller-supplied input was rejected before reaching the model
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Prediction was requested before a model was trained or loaded
    #[error("Model is not trained")]
    NotTrained,

    /// Model training failed
    #[error("Training error: {0}")]
    Training(String),

    /// Model artifact could not be read or written
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VerdictError.
pub type Result<T> = std::result::Result<T, VerdictError>;

impl VerdictError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VerdictError::Analysis(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        VerdictError::InvalidInput(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        VerdictError::Training(msg.into())
    }

    /// Create a new artifact error.
    pub fn artifact<S: Into<String>>(msg: S) -> Self {
        VerdictError::Artifact(msg.into())
    }
}
