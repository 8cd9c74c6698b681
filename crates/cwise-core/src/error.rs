//! Error types for the cwise crates
//!
//! The functors themselves never fail; errors only arise where a caller
//! hands mismatched buffers or shapes to an evaluation loop.

use thiserror::Error;

/// Core error type for coefficient-wise evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// Operand, output or shape sizes disagree
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Operation needs at least one coefficient
    #[error("Empty input: {0} requires at least one coefficient")]
    EmptyInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(operation.to_string())
    }

    /// Check that `actual` equals `expected`, naming `context` on failure
    pub fn check_len(expected: usize, actual: usize, context: &str) -> Result<()> {
        if expected != actual {
            return Err(Self::size_mismatch(expected, actual, context));
        }
        Ok(())
    }
}
