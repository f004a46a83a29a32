//! Error types for vector and matrix operations

use thiserror::Error;

/// Error types for vector and matrix operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The matrix has a zero (or denormal) determinant and cannot be inverted
    #[error("Matrix is not invertible: determinant is {determinant}")]
    NotInvertible {
        /// The determinant that failed the check
        determinant: f32,
    },

    /// A zero-length vector cannot be normalized
    #[error("Cannot normalize a zero-length vector")]
    ZeroLengthVector,
}

/// Result type using MathError
pub type Result<T> = std::result::Result<T, MathError>;
