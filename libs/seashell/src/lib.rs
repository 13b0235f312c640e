//! # Seashell
//!
//! Parametric seashell surface generation. A 14-parameter biological growth
//! model (after Picado's shell paper) is sampled over a lattice of whorl and
//! cross-section angles, then triangulated into an open spiral tube.
//!
//! ## Architecture
//!
//! ```text
//! ShellParameters → sampler (PointLattice) → triangulate (Mesh) → MeshBuffers
//! ```
//!
//! Both stages are pure and run row-parallel with `rayon`. Errors are
//! returned, never logged or recovered from inside the core.
//!
//! ## Usage
//!
//! ```rust
//! use seashell::{generate_preset, Sampling, ShellPreset};
//!
//! let mesh = generate_preset(ShellPreset::PreciousWentletrap, Sampling::new(4.0, 32, 24))?;
//! assert_eq!(mesh.vertex_count(), 128 * 24);
//! # Ok::<(), seashell::ShellError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod pipeline;
pub mod sampler;
pub mod source;
pub mod triangulate;

pub use error::{ShellError, ShellResult};
pub use export::MeshBuffers;
pub use mesh::Mesh;
pub use params::{AngleUnit, DegreeShape, Sampling, ShellParameters, ShellPreset, ShellShape};
pub use pipeline::{generate_batch, generate_mesh, generate_preset};
pub use sampler::{generate_lattice, GeneratingCurve, PointLattice};
pub use source::{PresetCycle, RandomShapes, ShapeSource};
pub use triangulate::{quad_triangles, triangulate};
