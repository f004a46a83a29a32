//! Error handling for the particle simulation

use std::io;
use thiserror::Error;

/// Errors that can occur when configuring or running the simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The particle mesh could not be built
    #[error("Mesh error: {0}")]
    Mesh(#[from] tf_mesh::MeshError),

    /// A camera matrix could not be computed
    #[error("Math error: {0}")]
    Math(#[from] tf_math::MathError),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parse or write error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parse or write error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file extension is not recognized
    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
