//! Frame driver
//!
//! A [`Scene`] owns everything a renderer needs: the sphere mesh shared by all
//! particles, the particle buffers and the camera. Each call to
//! [`Scene::advance`] runs one update step and returns a [`Frame`] with the
//! matrix and per-instance data to draw.

use std::time::Instant;

use custom_debug::Debug;
use log::{debug, warn};
use tf_math::{Matrix4, Vector3};
use tf_mesh::SphereMesh;
use tf_utils::debug::trimmed_vec_fmt;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::system::ParticleSystem;

/// Draw data for one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    /// World-space center of the particle's sphere
    pub center: Vector3,
    /// RGB color
    pub color: [f32; 3],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Index of this frame since the last reset, starting at 0
    pub index: u64,
    /// Simulated time step of this frame in seconds
    pub dt: f32,
    /// Combined view and projection matrix
    pub mvp: Matrix4,
    /// One entry per particle
    #[debug(with = trimmed_vec_fmt)]
    pub instances: Vec<Instance>,
}

/// Turns wall-clock instants into clamped frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: f32,
}

impl FrameClock {
    /// Create a clock that never reports more than `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Seconds since the previous tick, clamped to the maximum delta
    ///
    /// The first tick returns 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        elapsed.min(self.max_delta)
    }

    /// Forget the previous tick
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Mesh, particles and camera of a running simulation
#[derive(Debug, Clone)]
pub struct Scene {
    config: SimulationConfig,
    mesh: SphereMesh,
    particles: ParticleSystem,
    frame_index: u64,
    simulated_time: f64,
}

impl Scene {
    /// Validate the configuration, then build the mesh and spawn the particles
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mesh = SphereMesh::new(config.sphere)?;
        let particles = ParticleSystem::spawn(config.particle_count, config.physics, config.seed)?;
        debug!(
            "Scene ready: {} particles, {} vertices per sphere",
            particles.len(),
            mesh.vertex_count()
        );

        Ok(Self {
            config,
            mesh,
            particles,
            frame_index: 0,
            simulated_time: 0.0,
        })
    }

    /// Rebuild the mesh and respawn every particle
    pub fn reset(&mut self) -> Result<()> {
        self.mesh = SphereMesh::new(self.config.sphere)?;
        self.particles.respawn()?;
        self.frame_index = 0;
        self.simulated_time = 0.0;
        debug!("Scene reset");
        Ok(())
    }

    /// Run one step of `elapsed` seconds and return the frame to draw
    ///
    /// `elapsed` is clamped to `[0, max_delta_time]` so that a stalled frame
    /// cannot push particles through the walls.
    pub fn advance(&mut self, elapsed: f32) -> Result<Frame> {
        let max = self.config.max_delta_time;
        let dt = if elapsed > max {
            warn!("Frame delta {:.3}s clamped to {:.3}s", elapsed, max);
            max
        } else if elapsed.is_nan() {
            0.0
        } else {
            elapsed.max(0.0)
        };

        self.particles.step(dt);
        let mvp = self.config.camera.view_projection(self.config.aspect)?;

        let frame = Frame {
            index: self.frame_index,
            dt,
            mvp,
            instances: self.instances(),
        };
        self.frame_index += 1;
        self.simulated_time += f64::from(dt);
        Ok(frame)
    }

    /// Current draw data for every particle
    pub fn instances(&self) -> Vec<Instance> {
        let buffers = self.particles.buffers();
        let scale = self.config.render_scale;
        buffers
            .read()
            .positions
            .chunks_exact(3)
            .zip(buffers.colors().chunks_exact(3))
            .map(|(p, c)| Instance {
                center: Vector3::new(p[0], p[1], p[2]) * scale,
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }

    /// The configuration the scene was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sphere mesh drawn for every particle
    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    /// Particle system
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Number of frames advanced since the last reset
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Total simulated time since the last reset in seconds
    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }
}
