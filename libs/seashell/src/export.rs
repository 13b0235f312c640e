//! Mesh buffer export for GPU rendering.
//!
//! Flattens a [`Mesh`] into the `f32` position and `u32` index arrays a
//! viewer uploads directly.

use crate::mesh::Mesh;

/// Mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use seashell::{generate_preset, MeshBuffers, Sampling, ShellPreset};
///
/// let mesh = generate_preset(ShellPreset::Torus, Sampling::new(1.0, 4, 4)).unwrap();
/// let buffers = MeshBuffers::from(&mesh);
///
/// assert_eq!(buffers.vertices.len(), 16 * 3);
/// assert_eq!(buffers.indices.len(), 24 * 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,

    /// Vertex normals as flat array, when the mesh carries them.
    pub normals: Option<Vec<f32>>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<&Mesh> for MeshBuffers {
    fn from(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_mesh_buffers_creation() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
        assert!(buffers.normals.is_none());
    }

    #[test]
    fn test_buffers_carry_normals_when_present() {
        let mut mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        mesh.compute_normals();
        let buffers = MeshBuffers::from(&mesh);
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.normals.unwrap()[2], 1.0);
    }
}
