//! 4x4 matrix
//!
//! # Layout
//!
//! A `Matrix4` is a flat array of 16 `f32` read as four rows of four:
//!
//! ```text
//! [ e0  e1  e2  e3 ]   row 0
//! [ e4  e5  e6  e7 ]   row 1
//! [ e8  e9  e10 e11]   row 2
//! [ e12 e13 e14 e15]   row 3  (translation for look_at)
//! ```
//!
//! Points are row vectors multiplied on the left (`p' = p * M`), so a chain
//! of transforms reads left to right: `view * projection` first applies the
//! view, then the projection. The flat array is exactly what a column-major
//! GPU uniform upload (`uniformMatrix4fv(.., false, ..)`) expects, and every
//! constructor and product in this module is written against this index
//! convention.

use std::fmt;
use std::ops::Mul;

use crate::error::{MathError, Result};
use crate::vector3::Vector3;

/// A 4x4 `f32` matrix stored as 16 row-major elements
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// The identity matrix
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// The all-zero matrix
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Create a matrix from 16 flat elements
    pub const fn new(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Create a matrix from four rows
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut elements = [0.0; 16];
        for (r, row) in rows.iter().enumerate() {
            elements[r * 4..r * 4 + 4].copy_from_slice(row);
        }
        Self { elements }
    }

    /// The flat elements, ready for a GPU uniform upload
    pub fn elements(&self) -> &[f32; 16] {
        &self.elements
    }

    /// Element at `row`, `col`, or `None` when either is 4 or more
    pub fn at(&self, row: usize, col: usize) -> Option<f32> {
        if row < 4 && col < 4 {
            Some(self.elements[row * 4 + col])
        } else {
            None
        }
    }

    /// One row of the matrix, or `None` past row 3
    pub fn row(&self, row: usize) -> Option<[f32; 4]> {
        if row >= 4 {
            return None;
        }
        let e = &self.elements;
        Some([e[row * 4], e[row * 4 + 1], e[row * 4 + 2], e[row * 4 + 3]])
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[c * 4 + r] = self.elements[r * 4 + c];
            }
        }
        Self::new(out)
    }

    /// Signed cofactor of every element, computed in `f64`
    fn cofactors(&self) -> [f64; 16] {
        let e = self.elements.map(f64::from);
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                out[r * 4 + c] = sign * minor(&e, r, c);
            }
        }
        out
    }

    /// Determinant by cofactor expansion along row 0
    ///
    /// Uses the same cofactors as [`Matrix4::inverse`]. The sum is taken in
    /// `f64` and saturates to infinity when it exceeds `f32::MAX`; such a
    /// matrix still inverts.
    pub fn determinant(&self) -> f32 {
        determinant_from(&self.elements, &self.cofactors()) as f32
    }

    /// Inverse via adjugate over determinant
    ///
    /// Fails with [`MathError::NotInvertible`] when the `f64` determinant is
    /// at most `f32::MIN_POSITIVE` in magnitude or is not finite.
    pub fn inverse(&self) -> Result<Self> {
        let cofactors = self.cofactors();
        let det = determinant_from(&self.elements, &cofactors);
        if !det.is_finite() || det.abs() <= f64::from(f32::MIN_POSITIVE) {
            return Err(MathError::NotInvertible {
                determinant: det as f32,
            });
        }

        let inv_det = 1.0 / det;
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                // adjugate = transpose of the cofactor matrix
                out[c * 4 + r] = (cofactors[r * 4 + c] * inv_det) as f32;
            }
        }
        Ok(Self::new(out))
    }

    /// Matrix product `self * rhs`
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, rhs: &Self) -> Self {
        let a = &self.elements;
        let b = &rhs.elements;
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = a[r * 4] * b[c]
                    + a[r * 4 + 1] * b[4 + c]
                    + a[r * 4 + 2] * b[8 + c]
                    + a[r * 4 + 3] * b[12 + c];
            }
        }
        Self::new(out)
    }

    /// OpenGL-style right-handed perspective projection
    ///
    /// Maps view-space depth `-near..-far` to clip-space `-1..1` after the
    /// perspective divide. `vertical_fov_degrees` is the full vertical
    /// field of view.
    pub fn perspective(aspect: f32, vertical_fov_degrees: f32, near: f32, far: f32) -> Self {
        let theta = vertical_fov_degrees.to_radians();
        let t = near * (theta * 0.5).tan();
        let r = aspect * t;
        let fpn = far + near;
        let fmn = far - near;

        Self::new([
            near / r, 0.0, 0.0, 0.0, //
            0.0, near / t, 0.0, 0.0, //
            0.0, 0.0, -fpn / fmn, -1.0, //
            0.0, 0.0, -2.0 * far * near / fmn, 0.0,
        ])
    }

    /// Camera-to-world transform looking from `origin` toward `target`
    ///
    /// This is not a view matrix: invert the result to map world space into
    /// camera space. The basis is built from cross products only, so `up`
    /// must not be parallel to the viewing direction and `origin` must differ
    /// from `target`.
    pub fn look_at(origin: Vector3, target: Vector3, up: Vector3) -> Self {
        let front = (target - origin).normalized();
        let z = -front;
        let x = up.cross(z);
        let y = z.cross(x);

        Self::new([
            x.x, x.y, x.z, 0.0, //
            y.x, y.y, y.z, 0.0, //
            z.x, z.y, z.z, 0.0, //
            origin.x, origin.y, origin.z, 1.0,
        ])
    }

    /// Multiply a homogeneous row vector by this matrix
    pub fn transform_homogeneous(&self, v: [f32; 4]) -> [f32; 4] {
        let e = &self.elements;
        let mut out = [0.0; 4];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = v[0] * e[c] + v[1] * e[4 + c] + v[2] * e[8 + c] + v[3] * e[12 + c];
        }
        out
    }

    /// Transform a point (w = 1) and apply the perspective divide
    ///
    /// A point that ends up with w = 0 produces infinite components.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let [x, y, z, w] = self.transform_homogeneous([p.x, p.y, p.z, 1.0]);
        Vector3::new(x / w, y / w, z / w)
    }

    /// Transform a direction (w = 0); translation does not apply
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        let [x, y, z, _] = self.transform_homogeneous([d.x, d.y, d.z, 0.0]);
        Vector3::new(x, y, z)
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// 3x3 determinant of `e` with `row` and `col` removed
fn minor(e: &[f64; 16], row: usize, col: usize) -> f64 {
    let mut m = [0.0; 9];
    let mut k = 0;
    for r in (0..4).filter(|&r| r != row) {
        for c in (0..4).filter(|&c| c != col) {
            m[k] = e[r * 4 + c];
            k += 1;
        }
    }
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
        + m[2] * (m[3] * m[7] - m[4] * m[6])
}

fn determinant_from(elements: &[f32; 16], cofactors: &[f64; 16]) -> f64 {
    (0..4)
        .map(|c| f64::from(elements[c]) * cofactors[c])
        .sum()
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Matrix4::mul(&self, &rhs)
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(elements: [f32; 16]) -> Self {
        Self::new(elements)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elements.chunks_exact(4) {
            let [a, b, c, d] = [row[0], row[1], row[2], row[3]];
            writeln!(f, "[{a:>12.5} {b:>12.5} {c:>12.5} {d:>12.5}]")?;
        }
        Ok(())
    }
}
