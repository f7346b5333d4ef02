//! Error types for the taxomap library.
//!
//! The matching core itself is infallible: similarity and ranking guard their
//! arithmetic edge cases instead of failing. Errors only arise at the edges,
//! when a lexicon, configuration or target file is loaded or when the CLI
//! writes its output. All of them are represented by [`TaxomapError`].
//!
//! # Examples
//!
//! ```
//! use taxomap::error::{Result, TaxomapError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TaxomapError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for taxomap operations.
#[derive(Error, Debug)]
pub enum TaxomapError {
    /// I/O errors (reading lexicon, config or target files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (malformed sense entries, dangling relations)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors (out-of-range thresholds, bad option values)
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TaxomapError.
pub type Result<T> = std::result::Result<T, TaxomapError>;

impl TaxomapError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TaxomapError::Lexicon(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TaxomapError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TaxomapError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TaxomapError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        TaxomapError::Other(format!("Not found: {}", msg.into()))
    }
}
