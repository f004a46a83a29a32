//! UV sphere generation
//!
//! The sphere is built pole to pole: vertex 0 is the south pole, then
//! `theta_segment - 1` latitude rings of `phi_segment` vertices each from
//! south to north, and finally the north pole. Triangles are wound
//! counter-clockwise when seen from outside the sphere.

use std::f32::consts::PI;

use custom_debug::Debug;
use log::debug;
use tf_math::Vector3;
use tf_utils::debug::packed_vec3_fmt;

use crate::error::{MeshError, Result};
use crate::index::IndexBuffer;

/// Most vertices a generated sphere may have
///
/// 4194304 vertices take 96 MiB of positions and normals plus about 100 MiB
/// of 32-bit indices.
pub const MAX_SPHERE_VERTICES: u64 = 1 << 22;

/// Generator parameters for a UV sphere
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SphereParams {
    /// Sphere radius
    pub radius: f32,
    /// Number of latitude bands from pole to pole
    pub theta_segment: u32,
    /// Number of longitude slices around the vertical axis
    pub phi_segment: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 5.0,
            theta_segment: 16,
            phi_segment: 16,
        }
    }
}

impl SphereParams {
    /// Create a new parameter set
    pub fn new(radius: f32, theta_segment: u32, phi_segment: u32) -> Self {
        Self {
            radius,
            theta_segment,
            phi_segment,
        }
    }

    /// Check the parameters can produce a closed sphere
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::InvalidParameters(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }

        if self.theta_segment < 2 {
            return Err(MeshError::InvalidParameters(format!(
                "theta_segment must be at least 2, got {}",
                self.theta_segment
            )));
        }

        if self.phi_segment < 3 {
            return Err(MeshError::InvalidParameters(format!(
                "phi_segment must be at least 3, got {}",
                self.phi_segment
            )));
        }

        let needed = self.vertex_count_u64();
        if needed > MAX_SPHERE_VERTICES {
            return Err(MeshError::TooManyVertices {
                needed,
                limit: MAX_SPHERE_VERTICES,
            });
        }

        Ok(())
    }

    /// Number of vertices: both poles plus `theta_segment - 1` rings
    ///
    /// Only meaningful for parameters that pass [`validate`](Self::validate).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count_u64() as usize
    }

    /// Number of indices: two pole fans plus `theta_segment - 2` bands of quads
    ///
    /// Only meaningful for parameters that pass [`validate`](Self::validate).
    pub fn index_count(&self) -> usize {
        let phi = self.phi_segment as usize;
        let bands = (self.theta_segment as usize).saturating_sub(2);
        6 * phi + 6 * phi * bands
    }

    fn vertex_count_u64(&self) -> u64 {
        let rings = u64::from(self.theta_segment.saturating_sub(1));
        2 + rings * u64::from(self.phi_segment)
    }
}

/// A UV sphere ready for upload to vertex and index buffers
///
/// Deserializing checks the buffers against the stored parameters, so a
/// loaded mesh holds the same invariants as a generated one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MeshData")
)]
pub struct SphereMesh {
    params: SphereParams,
    indices: IndexBuffer,
    /// Tightly packed `x, y, z` triples
    #[debug(with = packed_vec3_fmt)]
    positions: Vec<f32>,
    /// Tightly packed unit `x, y, z` triples
    #[debug(with = packed_vec3_fmt)]
    normals: Vec<f32>,
}

impl SphereMesh {
    /// Build a sphere from validated parameters
    pub fn new(params: SphereParams) -> Result<Self> {
        params.validate()?;

        let mut builder = MeshBuilder::with_capacity(params.vertex_count(), params.index_count());
        let radius = params.radius;
        let theta_segment = params.theta_segment;
        let phi_segment = params.phi_segment;

        builder.push_vertex(Vector3::new(0.0, -radius, 0.0), Vector3::new(0.0, -1.0, 0.0));

        let theta_step = PI / theta_segment as f32;
        let phi_step = 2.0 * PI / phi_segment as f32;
        for hi in 1..theta_segment {
            let theta = PI - hi as f32 * theta_step;
            let (sin_t, cos_t) = theta.sin_cos();
            for pi in 0..phi_segment {
                let phi = pi as f32 * phi_step;
                let position = Vector3::new(
                    radius * sin_t * (-phi).cos(),
                    radius * cos_t,
                    radius * sin_t * (-phi).sin(),
                );
                builder.push_vertex(position, position.try_normalized()?);
            }
        }

        builder.push_vertex(Vector3::new(0.0, radius, 0.0), Vector3::UP);

        let last = phi_segment - 1;
        let next = |pi: u32| if pi != last { pi + 1 } else { 0 };

        // South pole fan
        for pi in 0..phi_segment {
            builder.push_triangle(0, next(pi) + 1, pi + 1);
        }

        // Bands between consecutive rings
        for hi in 0..theta_segment - 2 {
            let hj = hi + 1;
            for pi in 0..phi_segment {
                let pj = next(pi);
                builder.push_quad(
                    pi + hi * phi_segment + 1,
                    pj + hi * phi_segment + 1,
                    pi + hj * phi_segment + 1,
                    pj + hj * phi_segment + 1,
                );
            }
        }

        // North pole fan
        let north = builder.vertex_count() as u32 - 1;
        let top_ring = (theta_segment - 2) * phi_segment + 1;
        for pi in 0..phi_segment {
            builder.push_triangle(north, pi + top_ring, next(pi) + top_ring);
        }

        let mesh = builder.finish(params)?;
        debug!(
            "Built sphere mesh: radius={}, theta={}, phi={}, {} vertices, {} indices ({})",
            radius,
            theta_segment,
            phi_segment,
            mesh.vertex_count(),
            mesh.index_count(),
            mesh.indices.format()
        );
        Ok(mesh)
    }

    /// The parameters this mesh was built from
    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    /// Triangle-list indices
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Vertex positions as packed `x, y, z` triples
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Vertex normals as packed `x, y, z` triples
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`
    pub fn position(&self, i: usize) -> Option<Vector3> {
        read_vec3(&self.positions, i)
    }

    /// Normal of vertex `i`
    pub fn normal(&self, i: usize) -> Option<Vector3> {
        read_vec3(&self.normals, i)
    }

    /// Iterate triangles as vertex index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.triangle_count()).filter_map(move |t| {
            Some([
                self.indices.get(t * 3)?,
                self.indices.get(t * 3 + 1)?,
                self.indices.get(t * 3 + 2)?,
            ])
        })
    }

    /// Total bytes of the position, normal and index buffers
    pub fn byte_size(&self) -> usize {
        let floats = self.positions.len() + self.normals.len();
        floats * std::mem::size_of::<f32>() + self.indices.byte_size()
    }
}

fn read_vec3(data: &[f32], i: usize) -> Option<Vector3> {
    let chunk = data.get(i * 3..i * 3 + 3)?;
    Some(Vector3::new(chunk[0], chunk[1], chunk[2]))
}

struct MeshBuilder {
    indices: Vec<u32>,
    positions: Vec<f32>,
    normals: Vec<f32>,
}

impl MeshBuilder {
    fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            indices: Vec::with_capacity(indices),
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
        }
    }

    fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    fn push_vertex(&mut self, position: Vector3, normal: Vector3) {
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn push_quad(&mut self, v00: u32, v10: u32, v01: u32, v11: u32) {
        self.push_triangle(v00, v10, v01);
        self.push_triangle(v11, v01, v10);
    }

    fn finish(self, params: SphereParams) -> Result<SphereMesh> {
        let vertex_count = self.vertex_count();
        Ok(SphereMesh {
            params,
            indices: IndexBuffer::from_indices(self.indices, vertex_count)?,
            positions: self.positions,
            normals: self.normals,
        })
    }
}

/// Serialized form of [`SphereMesh`], checked before it becomes one
#[cfg(feature = "serde-support")]
#[derive(serde::Deserialize)]
struct MeshData {
    params: SphereParams,
    indices: IndexBuffer,
    positions: Vec<f32>,
    normals: Vec<f32>,
}

#[cfg(feature = "serde-support")]
impl TryFrom<MeshData> for SphereMesh {
    type Error = MeshError;

    fn try_from(data: MeshData) -> Result<Self> {
        data.params.validate()?;

        let vertex_count = data.params.vertex_count();
        if data.positions.len() != vertex_count * 3 || data.normals.len() != vertex_count * 3 {
            return Err(MeshError::InconsistentBuffers(format!(
                "expected {} floats per buffer, got {} positions and {} normals",
                vertex_count * 3,
                data.positions.len(),
                data.normals.len()
            )));
        }
        if data.indices.len() != data.params.index_count() {
            return Err(MeshError::InconsistentBuffers(format!(
                "expected {} indices, got {}",
                data.params.index_count(),
                data.indices.len()
            )));
        }
        if data.indices.format() != crate::index::IndexFormat::for_vertex_count(vertex_count) {
            return Err(MeshError::InconsistentBuffers(format!(
                "{} indices for {} vertices",
                data.indices.format(),
                vertex_count
            )));
        }
        if let Some(index) = data.indices.first_out_of_range(vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(Self {
            params: data.params,
            indices: data.indices,
            positions: data.positions,
            normals: data.normals,
        })
    }
}
