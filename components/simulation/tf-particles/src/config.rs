//! Simulation configuration
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```yaml
//! particle_count: 5000
//! seed: 42
//! sphere:
//!   radius: 2.5
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use tf_mesh::SphereParams;

use crate::camera::OrbitCamera;
use crate::error::{Result, SimulationError};
use crate::physics::PhysicsParams;
use crate::system::MAX_PARTICLES;

/// Complete description of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of particles to spawn
    pub particle_count: usize,
    /// Sphere drawn for every particle
    pub sphere: SphereParams,
    /// Viewing camera
    pub camera: OrbitCamera,
    /// Update kernel constants
    pub physics: PhysicsParams,
    /// Seed for reproducible spawning; random when absent
    pub seed: Option<u64>,
    /// Longest frame delta in seconds; longer frames are clamped
    pub max_delta_time: f32,
    /// Scale from simulation space to world space when drawing
    pub render_scale: f32,
    /// Viewport width over height
    pub aspect: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 30_000,
            sphere: SphereParams::default(),
            camera: OrbitCamera::default(),
            physics: PhysicsParams::default(),
            seed: None,
            max_delta_time: 0.1,
            render_scale: 500.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a configuration file
    ///
    /// The format follows the extension: `.yaml`/`.yml` or `.json`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            "" => {
                return Err(SimulationError::UnsupportedConfigFormat(
                    path.display().to_string(),
                ));
            }
            other => return Err(SimulationError::UnsupportedConfigFormat(other.to_string())),
        };

        let config = parse(&fs::read_to_string(path)?)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(invalid("particle_count must be at least 1"));
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(SimulationError::InvalidConfig(format!(
                "particle_count must be at most {}, got {}",
                MAX_PARTICLES, self.particle_count
            )));
        }

        self.sphere.validate()?;

        let physics = &self.physics;
        if !physics.gravity.to_array().iter().all(|c| c.is_finite()) {
            return Err(invalid("physics.gravity must be finite"));
        }
        require_positive("physics.mass", physics.mass)?;
        require_positive("physics.bound", physics.bound)?;

        let camera = &self.camera;
        if !camera.distance.is_finite() || camera.distance == 0.0 {
            return Err(invalid("camera.distance must be finite and non-zero"));
        }
        if !camera.angle_degrees.is_finite() || !camera.height.is_finite() {
            return Err(invalid("camera.angle_degrees and camera.height must be finite"));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid("camera.fov_degrees must be between 0 and 180"));
        }
        require_positive("camera.near", camera.near)?;
        if camera.far <= camera.near || !camera.far.is_finite() {
            return Err(invalid("camera.far must be greater than camera.near"));
        }

        require_positive("max_delta_time", self.max_delta_time)?;
        require_positive("render_scale", self.render_scale)?;
        require_positive("aspect", self.aspect)?;

        Ok(())
    }
}

fn invalid(message: &str) -> SimulationError {
    SimulationError::InvalidConfig(message.to_string())
}

fn require_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 30_000);
        assert_eq!(config.sphere, SphereParams::new(5.0, 16, 16));
        assert_eq!(config.render_scale, 500.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SimulationConfig::from_yaml_str(
            "particle_count: 12\nsphere:\n  radius: 2.0\ncamera:\n  angle_degrees: 30\n",
        )
        .unwrap();

        assert_eq!(config.particle_count, 12);
        assert_eq!(config.sphere.radius, 2.0);
        assert_eq!(config.sphere.theta_segment, 16);
        assert_eq!(config.camera.angle_degrees, 30.0);
        assert_eq!(config.camera.distance, 1000.0);
        assert_eq!(config.physics, PhysicsParams::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            SimulationConfig::from_json_str("{}").unwrap(),
            SimulationConfig::default()
        );
    }

    #[test]
    fn test_huge_particle_count_is_rejected() {
        let error = SimulationConfig::from_yaml_str("particle_count: 6148914691236517206")
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid configuration: particle_count must be at most 10000000, got 6148914691236517206"
        );
    }

    #[test]
    fn test_validation_messages() {
        let config = SimulationConfig {
            render_scale: -1.0,
            ..SimulationConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid configuration: render_scale must be positive, got -1"
        );
    }
}
