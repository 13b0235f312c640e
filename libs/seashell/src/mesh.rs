//! # Mesh Data Structure
//!
//! Triangle mesh produced by the triangulator: one vertex per lattice point
//! and two triangles per lattice quad. Vertices are never deduplicated and
//! normals are only present if the consumer asks for them.

use crate::error::{ShellError, ShellResult};
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary.
///
/// # Example
///
/// ```rust
/// use seashell::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0))?;
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0))?;
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0))?;
/// mesh.add_triangle(a, b, c);
/// assert!(mesh.validate());
/// # Ok::<(), seashell::ShellError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from existing buffers.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// Fails with [`ShellError::TooManyVertices`] once indices no longer
    /// fit in `u32`.
    pub fn add_vertex(&mut self, position: DVec3) -> ShellResult<u32> {
        let index = vertex_index(self.vertices.len())?;
        self.vertices.push(position);
        Ok(index)
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle winding.
    ///
    /// Vertices whose accumulated normal is zero (collapsed apex rows) keep
    /// a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Centres the mesh on the origin and scales it uniformly so its
    /// largest extent equals `size`.
    ///
    /// Flat or empty meshes are left untouched.
    pub fn fit_into(&mut self, size: f64) {
        let (min, max) = self.bounding_box();
        let extent = (max - min).max_element();
        if extent <= 0.0 || !extent.is_finite() {
            return;
        }
        let center = (min + max) * 0.5;
        let factor = size / extent;
        for v in &mut self.vertices {
            *v = (*v - center) * factor;
        }
    }

    /// Checks every triangle index is in range.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&index| (index as usize) < vertex_count))
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

/// Index the next vertex would get in a mesh holding `len` vertices.
fn vertex_index(len: usize) -> ShellResult<u32> {
    u32::try_from(len).map_err(|_| ShellError::TooManyVertices {
        count: len.saturating_add(1),
        max: u32::MAX as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0)).unwrap();
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_none());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0)).unwrap();
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO).unwrap();
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_compute_normals_follows_winding() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert_eq!(*n, DVec3::Z);
        }
        assert_eq!(mesh.normals_f32().unwrap().len(), 9);
    }

    #[test]
    fn test_fit_into_centres_and_scales() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(10.0, 10.0, 10.0)).unwrap();
        mesh.add_vertex(DVec3::new(14.0, 12.0, 11.0)).unwrap();
        mesh.fit_into(15.0);
        let (min, max) = mesh.bounding_box();
        assert_eq!(max.x - min.x, 15.0);
        assert_eq!(min + max, DVec3::ZERO);
    }

    #[test]
    fn test_fit_into_ignores_single_point() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ONE).unwrap();
        mesh.fit_into(15.0);
        assert_eq!(mesh.vertices()[0], DVec3::ONE);
    }

    #[test]
    fn test_add_vertex_indices_sequential() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(DVec3::X).unwrap(), 0);
        assert_eq!(mesh.add_vertex(DVec3::Y).unwrap(), 1);
    }

    #[test]
    fn test_vertex_index_past_u32_range() {
        assert_eq!(vertex_index(u32::MAX as usize).unwrap(), u32::MAX);
        let err = vertex_index(u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, ShellError::TooManyVertices { .. }));
    }

    #[test]
    fn test_gpu_export() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertices_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }
}
