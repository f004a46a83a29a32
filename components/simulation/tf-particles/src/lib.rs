//! Headless particle simulation for instanced sphere rendering.
//!
//! The crate holds the CPU half of a transform-feedback particle renderer:
//!
//! - [`physics`]: the per-particle update kernel (gravity and box bounce)
//! - [`buffers`]: read/write particle state swapped after every step
//! - [`system`]: seeded spawning of positions, velocities and colors
//! - [`camera`]: the orbit camera and its view/projection matrices
//! - [`scene`]: the frame driver producing per-frame draw data
//! - [`config`]: serde configuration loaded from YAML or JSON
//!
//! Enable the `parallel` feature to run the update kernel on rayon.
//!
//! # Examples
//!
//! ```
//! use tf_particles::{Scene, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     particle_count: 100,
//!     seed: Some(42),
//!     ..SimulationConfig::default()
//! };
//!
//! let mut scene = Scene::new(config)?;
//! let frame = scene.advance(1.0 / 60.0)?;
//! assert_eq!(frame.instances.len(), 100);
//! # Ok::<(), tf_particles::SimulationError>(())
//! ```

#![forbid(unsafe_code)]

pub mod buffers;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod physics;
pub mod scene;
pub mod system;

pub use buffers::{ParticleBuffers, ParticleState};
pub use camera::OrbitCamera;
pub use color::hsv_to_rgb;
pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
pub use physics::PhysicsParams;
pub use scene::{Frame, FrameClock, Instance, Scene};
pub use system::{MAX_PARTICLES, ParticleSystem};
