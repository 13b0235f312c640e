//! WASM-facing entry points for the seashell generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which expose
//! Rust error types directly.
//!
//! ```
//! let buffers = seashell_wasm::generate_preset_internal("Torus", 1.0, 4, 4).unwrap();
//! assert_eq!(buffers.vertex_count(), 16);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use config::constants::{DEFAULT_CURVE_SEGMENTS, DEFAULT_FIT_SIZE, DEFAULT_SEGMENTS_PER_TURN};
use seashell::{
    generate_mesh, DegreeShape, Mesh, MeshBuffers, RandomShapes, Sampling, ShapeSource,
    ShellError, ShellParameters, ShellPreset, ShellShape,
};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "seashell-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Default rows per whorl revolution.
#[wasm_bindgen]
pub fn default_segments_per_turn() -> u32 {
    DEFAULT_SEGMENTS_PER_TURN
}

/// Default samples around the generating curve.
#[wasm_bindgen]
pub fn default_curve_segments() -> u32 {
    DEFAULT_CURVE_SEGMENTS
}

/// Names of the built-in presets, in menu order.
///
/// # Examples
/// ```
/// let names = seashell_wasm::preset_names();
/// assert_eq!(names[0], "Torus");
/// ```
#[wasm_bindgen]
pub fn preset_names() -> Vec<String> {
    ShellPreset::ALL
        .iter()
        .map(|preset| preset.name().to_string())
        .collect()
}

/// Returns a preset's shape vector (radians) as JSON.
///
/// # Errors
/// Returns a JavaScript error for an unknown preset name.
#[wasm_bindgen]
pub fn preset_shape_json(name: &str) -> Result<String, JsValue> {
    preset_shape_json_internal(name).map_err(|err| JsValue::from_str(&err))
}

/// Draws a random 14-value shape vector (radians) from a seed.
///
/// Feed the result back through [`generate_custom_mesh`] with
/// `in_degrees = false`.
#[wasm_bindgen]
pub fn random_shape(seed: u64) -> Vec<f64> {
    RandomShapes::seeded(seed).next_shape().to_array().to_vec()
}

/// Generates a named preset and returns GPU buffers fitted into the
/// default viewing cube.
///
/// # Errors
/// Returns a JavaScript error describing the invalid preset or parameter.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_preset_mesh("Argonauta", 4, 64, 64);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_preset_mesh(
    name: &str,
    turns: f64,
    segments_per_turn: u32,
    curve_segments: u32,
) -> Result<MeshHandle, JsValue> {
    generate_preset_internal(name, turns, segments_per_turn, curve_segments)
        .map(MeshHandle::from_buffers)
        .map_err(to_js_error)
}

/// Generates a shell from a raw 14-value shape vector.
///
/// `values` are in canonical order `D, A, alpha, beta, phi, mu, omega,
/// a, b, L, P, W1, W2, N`. With `in_degrees` set, the angular fields are
/// converted to radians exactly once before sampling.
///
/// # Errors
/// Returns a JavaScript error for a wrong-length vector or invalid values.
#[wasm_bindgen]
pub fn generate_custom_mesh(
    values: Vec<f64>,
    in_degrees: bool,
    turns: f64,
    segments_per_turn: u32,
    curve_segments: u32,
) -> Result<MeshHandle, JsValue> {
    generate_custom_internal(&values, in_degrees, turns, segments_per_turn, curve_segments)
        .map(MeshHandle::from_buffers)
        .map_err(to_js_error)
}

/// Host-only helper behind [`preset_shape_json`].
pub fn preset_shape_json_internal(name: &str) -> Result<String, String> {
    let preset: ShellPreset = name.parse().map_err(|err: ShellError| err.to_string())?;
    serde_json::to_string(&preset.shape()).map_err(|err| err.to_string())
}

/// Host-only helper behind [`generate_preset_mesh`].
pub fn generate_preset_internal(
    name: &str,
    turns: f64,
    segments_per_turn: u32,
    curve_segments: u32,
) -> Result<MeshBuffers, ShellError> {
    let preset: ShellPreset = name.parse()?;
    let sampling = Sampling::new(turns, segments_per_turn, curve_segments);
    render(ShellParameters::new(preset.shape(), sampling))
}

/// Host-only helper behind [`generate_custom_mesh`].
pub fn generate_custom_internal(
    values: &[f64],
    in_degrees: bool,
    turns: f64,
    segments_per_turn: u32,
    curve_segments: u32,
) -> Result<MeshBuffers, ShellError> {
    let raw = ShellShape::from_slice(values)?;
    let shape = if in_degrees {
        DegreeShape(raw).into_radians()
    } else {
        raw
    };
    let sampling = Sampling::new(turns, segments_per_turn, curve_segments);
    render(ShellParameters::new(shape, sampling))
}

/// Generates, adds normals for shading and fits the shell for display.
fn render(params: ShellParameters) -> Result<MeshBuffers, ShellError> {
    let mut mesh: Mesh = generate_mesh(&params)?;
    mesh.compute_normals();
    mesh.fit_into(DEFAULT_FIT_SIZE);
    log::debug!(
        "exporting shell mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(MeshBuffers::from(&mesh))
}

fn to_js_error(err: ShellError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
