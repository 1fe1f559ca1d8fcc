//! Error types for matrix multiplication

use std::fmt;

/// Errors that can occur when multiplying matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmmError {
    /// The operands' inner dimensions disagree
    ///
    /// Carries the shapes of both operands as `(rows, cols)` pairs. The
    /// operation performs no work and allocates no output when it returns
    /// this error, so both operands are left untouched.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for SpmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpmmError::DimensionMismatch { left, right } => write!(
                f,
                "Matrix sizes are incompatible for multiplication: {}×{} by {}×{}",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl std::error::Error for SpmmError {}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, SpmmError>;
