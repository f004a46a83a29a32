//! Per-particle update kernel
//!
//! Each step applies constant gravity to the velocity, moves the particle,
//! and reflects it off the walls of an axis-aligned box centered on the
//! origin. The bounce is resolved per axis: a particle at or past a wall has
//! that velocity component negated and is moved back by one step along it.

use serde::{Deserialize, Serialize};
use tf_math::Vector3;

/// Constants of the update kernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Gravity force applied to every particle
    pub gravity: Vector3,
    /// Particle mass; acceleration is `gravity / mass`
    pub mass: f32,
    /// Half extent of the bounding box on every axis
    pub bound: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -9.8, 0.0),
            mass: 10.0,
            bound: 1.0,
        }
    }
}

impl PhysicsParams {
    /// Acceleration applied to every particle
    #[inline]
    pub fn acceleration(&self) -> Vector3 {
        self.gravity / self.mass
    }

    /// Advance one particle by `dt` seconds
    ///
    /// # Arguments
    /// * `position` - Position at the start of the step
    /// * `velocity` - Velocity at the start of the step
    /// * `dt` - Delta time in seconds
    ///
    /// Returns the new `(position, velocity)`.
    pub fn integrate(&self, position: Vector3, velocity: Vector3, dt: f32) -> (Vector3, Vector3) {
        let mut velocity = velocity;
        velocity.add_in_place(self.acceleration() * dt);
        let mut position = position;
        position.add_in_place(velocity * dt);

        let mut p = position.to_array();
        let mut v = velocity.to_array();
        for axis in 0..3 {
            if p[axis] <= -self.bound || p[axis] >= self.bound {
                v[axis] = -v[axis];
                p[axis] += dt * v[axis];
            }
        }

        (Vector3::from(p), Vector3::from(v))
    }

    /// Check if `position` lies strictly inside the box
    pub fn contains(&self, position: Vector3) -> bool {
        position
            .to_array()
            .iter()
            .all(|&c| c > -self.bound && c < self.bound)
    }
}
