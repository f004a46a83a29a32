//! Error handling for mesh generation

use thiserror::Error;

/// Errors that can occur when building a mesh
#[derive(Debug, Error)]
pub enum MeshError {
    /// Generator parameters out of range
    #[error("Invalid mesh parameters: {0}")]
    InvalidParameters(String),

    /// The mesh needs more vertices than the generator allows
    #[error("Mesh needs {needed} vertices, the limit is {limit}")]
    TooManyVertices { needed: u64, limit: u64 },

    /// An index points past the last vertex
    #[error("Index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Buffers whose lengths disagree with the mesh parameters
    #[error("Inconsistent mesh buffers: {0}")]
    InconsistentBuffers(String),

    /// A vertex could not be normalized
    #[error("Math error: {0}")]
    Math(#[from] tf_math::MathError),
}

/// Result type for mesh operations
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MeshError::InvalidParameters("radius must be positive".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid mesh parameters: radius must be positive"
        );

        let error = MeshError::from(tf_math::MathError::ZeroLengthVector);
        assert_eq!(
            format!("{}", error),
            "Math error: Cannot normalize a zero-length vector"
        );

        let error = MeshError::TooManyVertices {
            needed: 4_900_000_002,
            limit: 4_194_304,
        };
        assert_eq!(
            format!("{}", error),
            "Mesh needs 4900000002 vertices, the limit is 4194304"
        );
    }
}
