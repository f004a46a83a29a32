//! Double-buffered particle state
//!
//! The GPU pipeline this mirrors reads particle state from one pair of vertex
//! buffers and captures the updated state into a second pair with transform
//! feedback. [`ParticleBuffers`] keeps the same split: [`ParticleBuffers::update`]
//! only reads the read side and only writes the write side, and
//! [`ParticleBuffers::swap`] exchanges them once the step is done.

use custom_debug::Debug;
use log::trace;
use tf_math::Vector3;
use tf_utils::debug::packed_vec3_fmt;

use crate::error::{Result, SimulationError};
use crate::physics::PhysicsParams;
use crate::system::MAX_PARTICLES;

/// Positions and velocities of every particle, packed as `x, y, z` triples
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleState {
    /// Packed positions
    #[debug(with = packed_vec3_fmt)]
    pub positions: Vec<f32>,
    /// Packed velocities
    #[debug(with = packed_vec3_fmt)]
    pub velocities: Vec<f32>,
}

impl ParticleState {
    /// Create a state of `count` particles at rest at the origin
    ///
    /// Fails when `count` is above [`MAX_PARTICLES`].
    pub fn zeroed(count: usize) -> Result<Self> {
        if count > MAX_PARTICLES {
            return Err(SimulationError::InvalidConfig(format!(
                "particle_count must be at most {}, got {}",
                MAX_PARTICLES, count
            )));
        }
        Ok(Self {
            positions: vec![0.0; count * 3],
            velocities: vec![0.0; count * 3],
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check if the state holds no particles
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of particle `i`
    pub fn position(&self, i: usize) -> Option<Vector3> {
        read_vec3(&self.positions, i)
    }

    /// Velocity of particle `i`
    pub fn velocity(&self, i: usize) -> Option<Vector3> {
        read_vec3(&self.velocities, i)
    }
}

/// Read and write particle state plus per-particle colors
#[derive(Debug, Clone)]
pub struct ParticleBuffers {
    read: ParticleState,
    write: ParticleState,
    /// Packed `r, g, b` colors, constant for the life of the buffers
    #[debug(with = packed_vec3_fmt)]
    colors: Vec<f32>,
}

impl ParticleBuffers {
    /// Create buffers from packed initial positions, velocities and colors
    ///
    /// All three slices must hold the same number of `x, y, z` triples.
    pub fn new(positions: Vec<f32>, velocities: Vec<f32>, colors: Vec<f32>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }
        if velocities.len() != positions.len() || colors.len() != positions.len() {
            return Err(SimulationError::InvalidConfig(format!(
                "buffer lengths differ: {} positions, {} velocities, {} colors",
                positions.len(),
                velocities.len(),
                colors.len()
            )));
        }

        let count = positions.len() / 3;
        Ok(Self {
            read: ParticleState {
                positions,
                velocities,
            },
            write: ParticleState::zeroed(count)?,
            colors,
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.read.len()
    }

    /// Check if there are no particles
    pub fn is_empty(&self) -> bool {
        self.read.is_empty()
    }

    /// State the next update reads from, and the current state for drawing
    pub fn read(&self) -> &ParticleState {
        &self.read
    }

    /// State the last update wrote, not yet swapped in
    pub fn written(&self) -> &ParticleState {
        &self.write
    }

    /// Packed `r, g, b` colors
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Color of particle `i`
    pub fn color(&self, i: usize) -> Option<[f32; 3]> {
        let chunk = self.colors.get(i * 3..i * 3 + 3)?;
        Some([chunk[0], chunk[1], chunk[2]])
    }

    /// Run the update kernel from the read side into the write side
    pub fn update(&mut self, physics: &PhysicsParams, dt: f32) {
        let Self { read, write, .. } = self;
        run_kernel(physics, dt, read, write);
        trace!("Updated {} particles with dt={}", read.len(), dt);
    }

    /// Exchange the read and write sides
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.read, &mut self.write);
    }

    /// Update then swap, making the new state readable
    pub fn step(&mut self, physics: &PhysicsParams, dt: f32) {
        self.update(physics, dt);
        self.swap();
    }
}

#[inline]
fn update_particle(
    physics: &PhysicsParams,
    dt: f32,
    (p_in, v_in): (&[f32], &[f32]),
    (p_out, v_out): (&mut [f32], &mut [f32]),
) {
    let (p, v) = physics.integrate(
        Vector3::new(p_in[0], p_in[1], p_in[2]),
        Vector3::new(v_in[0], v_in[1], v_in[2]),
        dt,
    );
    p_out.copy_from_slice(&p.to_array());
    v_out.copy_from_slice(&v.to_array());
}

#[cfg(not(feature = "parallel"))]
fn run_kernel(physics: &PhysicsParams, dt: f32, read: &ParticleState, write: &mut ParticleState) {
    let inputs = read
        .positions
        .chunks_exact(3)
        .zip(read.velocities.chunks_exact(3));
    let outputs = write
        .positions
        .chunks_exact_mut(3)
        .zip(write.velocities.chunks_exact_mut(3));

    for (input, output) in inputs.zip(outputs) {
        update_particle(physics, dt, input, output);
    }
}

#[cfg(feature = "parallel")]
fn run_kernel(physics: &PhysicsParams, dt: f32, read: &ParticleState, write: &mut ParticleState) {
    use rayon::prelude::*;

    let inputs = read
        .positions
        .par_chunks_exact(3)
        .zip(read.velocities.par_chunks_exact(3));
    let outputs = write
        .positions
        .par_chunks_exact_mut(3)
        .zip(write.velocities.par_chunks_exact_mut(3));

    inputs
        .zip(outputs)
        .for_each(|(input, output)| update_particle(physics, dt, input, output));
}

fn read_vec3(data: &[f32], i: usize) -> Option<Vector3> {
    let chunk = data.get(i * 3..i * 3 + 3)?;
    Some(Vector3::new(chunk[0], chunk[1], chunk[2]))
}
