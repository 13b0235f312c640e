//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use seashell::MeshBuffers;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_preset_mesh("Turritella", 10, 64, 64);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    buffers: MeshBuffers,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.buffers.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.buffers.triangle_count() as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.buffers.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.buffers.indices[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.buffers
            .normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Returns true if the mesh has normals.
    #[wasm_bindgen]
    pub fn has_normals(&self) -> bool {
        self.buffers.normals.is_some()
    }

    /// Returns true if the mesh has no triangles to draw.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.buffers.indices.is_empty()
    }
}

impl MeshHandle {
    /// Wraps exported buffers.
    pub fn from_buffers(buffers: MeshBuffers) -> Self {
        Self { buffers }
    }

    /// Borrows the underlying buffers.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }
}
