//! Three-component vector
//!
//! `Vector3` offers every arithmetic operation twice:
//!
//! - **Non-mutating**: the `std::ops` operators (`a + b`, `a - b`, `v * s`,
//!   `v / s`, `-v`) and the by-value methods [`Vector3::normalized`],
//!   [`Vector3::dot`] and [`Vector3::cross`]. Both operands are left untouched
//!   and a new value is returned, so these compose freely.
//! - **Mutating**: the `*_in_place` methods and [`Vector3::normalize`] change
//!   the receiver and return `&mut Self` so calls can be chained without
//!   creating temporaries. The compound assignment operators (`+=`, `-=`, `*=`,
//!   `/=`) forward to them.
//!
//! ```
//! use tf_math::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! // Non-mutating: a and b are unchanged
//! let sum = a + b;
//! assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));
//!
//! // Mutating: chains on the receiver
//! let mut c = a;
//! c.add_in_place(b).mul_in_place(2.0);
//! assert_eq!(c, Vector3::new(10.0, 14.0, 18.0));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};

/// A 3D vector of `f32` components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X axis
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis, the conventional camera up vector
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector from its components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Length of the vector
    pub fn magnitude(self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    /// Squared length of the vector
    pub fn squared_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product of two vectors
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product `self × rhs`
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Return this vector divided by its magnitude
    ///
    /// A zero vector divides by zero and every component of the result is
    /// NaN. This is deliberate for hot paths where the caller already
    /// guarantees a nonzero length; use [`Vector3::try_normalized`] when the
    /// input is not known to be safe.
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Checked normalization
    ///
    /// Returns [`MathError::ZeroLengthVector`] instead of NaN components when
    /// the magnitude is zero or not finite.
    pub fn try_normalized(self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude > 0.0 && magnitude.is_finite() {
            Ok(self / magnitude)
        } else {
            Err(MathError::ZeroLengthVector)
        }
    }

    /// Add `rhs` to this vector in place
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self
    }

    /// Subtract `rhs` from this vector in place
    pub fn sub_in_place(&mut self, rhs: Self) -> &mut Self {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self
    }

    /// Scale this vector in place
    pub fn mul_in_place(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self
    }

    /// Divide this vector by a scalar in place
    pub fn div_in_place(&mut self, s: f32) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self.z /= s;
        self
    }

    /// Normalize this vector in place
    ///
    /// Same zero-length contract as [`Vector3::normalized`]: the components
    /// become NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.div_in_place(magnitude)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_in_place(rhs);
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, s: f32) {
        self.mul_in_place(s);
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, s: f32) {
        self.div_in_place(s);
    }
}
