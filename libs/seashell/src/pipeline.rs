//! # Generation Pipeline
//!
//! `parameters → sampler → lattice → triangulator → mesh`, plus a batch
//! driver for caller-owned search loops.

use crate::error::ShellResult;
use crate::mesh::Mesh;
use crate::params::{Sampling, ShellParameters, ShellPreset};
use crate::sampler::generate_lattice;
use crate::source::ShapeSource;
use crate::triangulate::triangulate;

/// Samples and triangulates one shell.
///
/// # Example
///
/// ```rust
/// use seashell::{generate_mesh, Sampling, ShellParameters, ShellPreset};
///
/// let params = ShellParameters::new(ShellPreset::Argonauta.shape(), Sampling::new(2.0, 32, 16));
/// let mesh = generate_mesh(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 64 * 16);
/// assert_eq!(mesh.triangle_count(), 2 * 63 * 16);
/// ```
pub fn generate_mesh(params: &ShellParameters) -> ShellResult<Mesh> {
    let lattice = generate_lattice(params)?;
    log::debug!(
        "sampled {}x{} shell lattice ({} turns)",
        lattice.rows(),
        lattice.columns(),
        params.sampling.turns
    );

    let mesh = triangulate(lattice)?;
    log::debug!(
        "triangulated shell: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Generates a named preset at the given resolution.
pub fn generate_preset(preset: ShellPreset, sampling: Sampling) -> ShellResult<Mesh> {
    log::debug!("generating preset '{}'", preset);
    generate_mesh(&ShellParameters::new(preset.shape(), sampling))
}

/// Pulls `count` shapes from `source` and generates each one.
///
/// Results line up with the order shapes were drawn. A failed shape does
/// not stop the batch.
pub fn generate_batch<S>(source: &mut S, count: usize, sampling: Sampling) -> Vec<ShellResult<Mesh>>
where
    S: ShapeSource + ?Sized,
{
    (0..count)
        .map(|index| {
            let params = ShellParameters::new(source.next_shape(), sampling);
            let result = generate_mesh(&params);
            if let Err(err) = &result {
                log::warn!("shell {} of {} failed: {}", index + 1, count, err);
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::params::ShellShape;
    use crate::source::{PresetCycle, RandomShapes};

    #[test]
    fn test_every_preset_generates() {
        let sampling = Sampling::new(3.0, 16, 12);
        for preset in ShellPreset::ALL {
            let mesh = generate_preset(preset, sampling).unwrap();
            assert_eq!(mesh.vertex_count(), 48 * 12, "{}", preset);
            assert_eq!(mesh.triangle_count(), 2 * 47 * 12, "{}", preset);
            assert!(mesh.validate());
            assert!(mesh.vertices().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_degenerate_sampling_yields_no_triangles() {
        let mesh = generate_preset(ShellPreset::Torus, Sampling::new(1.0, 1, 4)).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_invalid_parameters_fail_before_sampling() {
        let err = generate_preset(ShellPreset::Torus, Sampling::new(1.0, 8, 0)).unwrap_err();
        assert!(matches!(err, ShellError::InvalidParameter { .. }));
    }

    #[test]
    fn test_batch_from_presets() {
        let results = generate_batch(&mut PresetCycle::new(), 8, Sampling::new(1.0, 8, 8));
        assert_eq!(results.len(), 8);
        assert!(results.iter().all(Result::is_ok));
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let mut flip = false;
        let mut source = move || {
            flip = !flip;
            let mut shape: ShellShape = ShellPreset::Ancilla.shape();
            if !flip {
                shape.semi_a = 0.0;
            }
            shape
        };
        let results = generate_batch(&mut source, 4, Sampling::new(1.0, 4, 4));
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        assert!(results[3].is_err());
    }

    #[test]
    fn test_random_batch_never_emits_non_finite_geometry() {
        let results = generate_batch(&mut RandomShapes::seeded(2024), 24, Sampling::new(2.0, 8, 8));
        for mesh in results.into_iter().flatten() {
            assert!(mesh.vertices().iter().all(|v| v.is_finite()));
        }
    }
}
