//! UV sphere meshes for instanced particle rendering.
//!
//! Every particle is drawn as the same small sphere. This crate builds that
//! sphere once as three GPU-ready buffers: packed positions, packed normals
//! and a triangle-list [`IndexBuffer`] that uses 16-bit indices whenever the
//! vertex count allows it.
//!
//! # Examples
//!
//! ```
//! use tf_mesh::{IndexFormat, SphereMesh, SphereParams};
//!
//! let mesh = SphereMesh::new(SphereParams::new(1.0, 4, 4))?;
//! assert_eq!(mesh.vertex_count(), 14);
//! assert_eq!(mesh.index_count(), 72);
//! assert_eq!(mesh.indices().format(), IndexFormat::U16);
//! # Ok::<(), tf_mesh::MeshError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod sphere;

pub use error::{MeshError, Result};
pub use index::{IndexBuffer, IndexFormat, MAX_U16_VERTICES};
pub use sphere::{MAX_SPHERE_VERTICES, SphereMesh, SphereParams};

/// Build a sphere from radius and segment counts
pub fn create_sphere(radius: f32, theta_segment: u32, phi_segment: u32) -> Result<SphereMesh> {
    SphereMesh::new(SphereParams::new(radius, theta_segment, phi_segment))
}
