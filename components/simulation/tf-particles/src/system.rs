//! Particle spawning and stepping

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::buffers::ParticleBuffers;
use crate::color::hsv_to_rgb;
use crate::error::{Result, SimulationError};
use crate::physics::PhysicsParams;

/// Most particles a system may hold
///
/// Ten million particles take about 480 MB of state and colors.
pub const MAX_PARTICLES: usize = 10_000_000;

/// Upper bound of the random hue, just past 360 so that 360 itself is drawn
const HUE_RANGE: f32 = 360.99;

/// Particles plus the kernel constants and random source that produced them
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    buffers: ParticleBuffers,
    physics: PhysicsParams,
    seed: Option<u64>,
}

impl ParticleSystem {
    /// Spawn `count` particles
    ///
    /// Positions are uniform in the box `[-bound, bound]^3`. Velocities are
    /// horizontal, with x and z uniform in `[-0.5, 0.5]`. Each particle gets
    /// a fully saturated color of random hue. With a `seed` the result is
    /// reproducible; without one the generator is seeded from the OS.
    ///
    /// Fails with [`SimulationError::InvalidConfig`] above [`MAX_PARTICLES`].
    pub fn spawn(count: usize, physics: PhysicsParams, seed: Option<u64>) -> Result<Self> {
        if count > MAX_PARTICLES {
            return Err(SimulationError::InvalidConfig(format!(
                "particle_count must be at most {}, got {}",
                MAX_PARTICLES, count
            )));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut positions = Vec::with_capacity(count * 3);
        let mut velocities = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);

        for _ in 0..count {
            for _ in 0..3 {
                positions.push(physics.bound * signed_unit(&mut rng));
            }

            velocities.push(signed_unit(&mut rng) * 0.5);
            velocities.push(0.0);
            velocities.push(signed_unit(&mut rng) * 0.5);

            let hue = (rng.random::<f32>() * HUE_RANGE).floor();
            colors.extend_from_slice(&hsv_to_rgb(hue, 1.0, 1.0));
        }

        let buffers = ParticleBuffers::new(positions, velocities, colors)?;
        debug!("Spawned {} particles (seed: {:?})", count, seed);

        Ok(Self {
            buffers,
            physics,
            seed,
        })
    }

    /// Replace every particle with a fresh spawn of the same size
    ///
    /// A seeded system respawns exactly its initial state.
    pub fn respawn(&mut self) -> Result<()> {
        *self = Self::spawn(self.buffers.len(), self.physics, self.seed)?;
        Ok(())
    }

    /// Advance every particle by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.buffers.step(&self.physics, dt);
    }

    /// Particle buffers
    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    /// Kernel constants
    pub fn physics(&self) -> &PhysicsParams {
        &self.physics
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Check if there are no particles
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Uniform sample in `[-1, 1)`
fn signed_unit(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>() * 2.0 - 1.0
}
