//! Vector and matrix math for GPU particle rendering.
//!
//! This crate provides the two value types the renderer is built on:
//!
//! - [`Vector3`]: a 3-component `f32` vector with both non-mutating
//!   (operator) and mutating (`*_in_place`, chaining) arithmetic.
//! - [`Matrix4`]: a 4x4 `f32` matrix in a flat row-major layout with
//!   determinant, inverse, product, perspective projection and look-at
//!   construction.
//!
//! # Examples
//!
//! ```
//! use tf_math::{Matrix4, Vector3};
//!
//! let eye = Vector3::new(0.0, 0.0, 5.0);
//! let camera = Matrix4::look_at(eye, Vector3::ZERO, Vector3::UP);
//! let view = camera.inverse()?;
//! let projection = Matrix4::perspective(16.0 / 9.0, 60.0, 0.01, 100.0);
//! let view_projection = view * projection;
//!
//! // The eye sits at the view-space origin
//! assert!(view.transform_point(eye).magnitude() < 1e-5);
//! # let _ = view_projection;
//! # Ok::<(), tf_math::MathError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod matrix4;
pub mod vector3;

pub use error::{MathError, Result};
pub use matrix4::Matrix4;
pub use vector3::Vector3;
