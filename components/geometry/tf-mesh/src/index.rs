//! Index buffers sized to the vertex count
//!
//! A GPU draws 16-bit indices (`UNSIGNED_SHORT`) faster and with half the
//! memory, but they can only address 65536 vertices. [`IndexBuffer`] picks the
//! narrowest width that fits the mesh.

use std::fmt;

use custom_debug::Debug;
use tf_utils::debug;

use crate::error::{MeshError, Result};

/// Largest vertex count a 16-bit index buffer can address
pub const MAX_U16_VERTICES: usize = u16::MAX as usize + 1;

/// Width of a single index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// 16-bit unsigned indices
    U16,
    /// 32-bit unsigned indices
    U32,
}

impl IndexFormat {
    /// Narrowest format that can address `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= MAX_U16_VERTICES {
            IndexFormat::U16
        } else {
            IndexFormat::U32
        }
    }

    /// Size of one index in bytes
    pub fn bytes_per_index(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFormat::U16 => write!(f, "u16"),
            IndexFormat::U32 => write!(f, "u32"),
        }
    }
}

/// Triangle-list indices in the narrowest width that fits the mesh
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum IndexBuffer {
    /// 16-bit indices
    U16(#[debug(with = debug::trimmed_vec_fmt)] Vec<u16>),
    /// 32-bit indices
    U32(#[debug(with = debug::trimmed_vec_fmt)] Vec<u32>),
}

impl IndexBuffer {
    /// Store `indices` as 16-bit when `vertex_count` allows it
    ///
    /// Fails with [`MeshError::IndexOutOfRange`] if any index is not below
    /// `vertex_count`.
    pub fn from_indices(indices: Vec<u32>, vertex_count: usize) -> Result<Self> {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(match IndexFormat::for_vertex_count(vertex_count) {
            IndexFormat::U16 => IndexBuffer::U16(
                indices
                    .into_iter()
                    .filter_map(|i| u16::try_from(i).ok())
                    .collect(),
            ),
            IndexFormat::U32 => IndexBuffer::U32(indices),
        })
    }

    /// First index that is not below `vertex_count`
    pub fn first_out_of_range(&self, vertex_count: usize) -> Option<u32> {
        self.iter().find(|&i| i as usize >= vertex_count)
    }

    /// Width of the stored indices
    pub fn format(&self) -> IndexFormat {
        match self {
            IndexBuffer::U16(_) => IndexFormat::U16,
            IndexBuffer::U32(_) => IndexFormat::U32,
        }
    }

    /// Number of indices
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    /// Check if the buffer holds no indices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at `i`, widened to `u32`
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            IndexBuffer::U16(v) => v.get(i).map(|&x| u32::from(x)),
            IndexBuffer::U32(v) => v.get(i).copied(),
        }
    }

    /// Iterate all indices widened to `u32`
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            IndexBuffer::U16(v) => Box::new(v.iter().map(|&x| u32::from(x))),
            IndexBuffer::U32(v) => Box::new(v.iter().copied()),
        }
    }

    /// Size of the buffer in bytes as uploaded to the GPU
    pub fn byte_size(&self) -> usize {
        self.len() * self.format().bytes_per_index()
    }
}
