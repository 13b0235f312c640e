//! # Surface Sampler
//!
//! Evaluates the logarithmic-spiral shell surface over a grid of
//! (whorl angle, curve angle) pairs.
//!
//! ## Algorithm
//!
//! For row `i` and column `j` of an `H × C` lattice:
//!
//! ```text
//! theta = i * turns * 2π / H
//! s     = j * 2π / C
//! c     = r(s) + node(s, theta)
//! growth = exp(theta / tan(alpha))
//! x = D * (A sinβ cosθ + cos(s+φ) cos(θ+ω) c - sinμ sin(s+φ) sin(θ+ω) c) * growth
//! y =     (A sinβ sinθ + cos(s+φ) sin(θ+ω) c - sinμ sin(s+φ) cos(θ+ω) c) * growth
//! z =     (-A cosβ + cosμ sin(s+φ) c) * growth
//! ```
//!
//! Only `x` carries the scale `D`.
//!
//! Rows are independent and are sampled in parallel; the output is
//! identical to a sequential sweep.

mod curve;
mod lattice;


pub use curve::{frac_trunc, GeneratingCurve};
pub use lattice::PointLattice;

use crate::error::{ShellError, ShellResult};
use crate::params::{ShellParameters, ShellShape};
use glam::DVec3;
use rayon::prelude::*;
use std::f64::consts::TAU;

/// Spiral expansion factor `exp(theta / tan(alpha))`.
#[inline]
pub fn growth(alpha: f64, theta: f64) -> f64 {
    (theta / alpha.tan()).exp()
}

/// Surface position for whorl angle `theta`, curve angle `s` and curve
/// value `curve`.
pub fn surface_point(shape: &ShellShape, theta: f64, s: f64, curve: f64) -> DVec3 {
    let growth = growth(shape.alpha, theta);
    let a = shape.axis_offset;
    let (sin_beta, cos_beta) = shape.beta.sin_cos();
    let (sin_mu, cos_mu) = shape.mu.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_turn, cos_turn) = (theta + shape.omega).sin_cos();
    let (sin_curve, cos_curve) = (s + shape.phi).sin_cos();

    let x = shape.scale
        * (a * sin_beta * cos_theta + cos_curve * cos_turn * curve
            - sin_mu * sin_curve * sin_turn * curve)
        * growth;
    let y = (a * sin_beta * sin_theta + cos_curve * sin_turn * curve
        - sin_mu * sin_curve * cos_turn * curve)
        * growth;
    let z = (-a * cos_beta + cos_mu * sin_curve * curve) * growth;

    DVec3::new(x, y, z)
}

/// Whorl angle of lattice row `i` out of `rows`.
#[inline]
pub fn row_angle(i: usize, rows: usize, rotation: f64) -> f64 {
    i as f64 * rotation / rows as f64
}

/// Curve angle of lattice column `j` out of `columns`.
#[inline]
pub fn column_angle(j: usize, columns: usize) -> f64 {
    j as f64 * TAU / columns as f64
}

/// Samples the shell surface into a `H × C` lattice.
///
/// # Errors
///
/// - [`ShellError::InvalidParameter`] for non-positive `turns`, zero
///   resolution, or a zero semi-axis; nothing is sampled.
/// - [`ShellError::TooManyVertices`] when `H * C` exceeds the vertex limit.
/// - [`ShellError::NumericDegenerate`] for the first non-finite point in
///   row-major order.
///
/// # Example
///
/// ```rust
/// use seashell::{generate_lattice, Sampling, ShellParameters, ShellPreset};
///
/// let params = ShellParameters::new(ShellPreset::Turritella.shape(), Sampling::new(2.0, 16, 8));
/// let lattice = generate_lattice(&params).unwrap();
/// assert_eq!(lattice.rows(), 32);
/// assert_eq!(lattice.columns(), 8);
/// ```
pub fn generate_lattice(params: &ShellParameters) -> ShellResult<PointLattice> {
    params.validate()?;

    let shape = &params.shape;
    let rows = params.row_count();
    let columns = params.column_count();
    let rotation = params.sampling.rotation();
    let curve = GeneratingCurve::new(shape);

    let mut points = vec![DVec3::ZERO; rows * columns];

    let failures: Vec<Option<ShellError>> = points
        .par_chunks_mut(columns)
        .enumerate()
        .map(|(i, row)| {
            let theta = row_angle(i, rows, rotation);
            for (j, point) in row.iter_mut().enumerate() {
                let s = column_angle(j, columns);
                *point = surface_point(shape, theta, s, curve.value(s, theta));
                if !point.is_finite() {
                    return Some(describe_degenerate(shape, i, j, theta, s, &curve));
                }
            }
            None
        })
        .collect();

    if let Some(err) = failures.into_iter().flatten().next() {
        return Err(err);
    }

    PointLattice::new(rows, columns, points)
}

fn describe_degenerate(
    shape: &ShellShape,
    row: usize,
    column: usize,
    theta: f64,
    s: f64,
    curve: &GeneratingCurve<'_>,
) -> ShellError {
    let growth = growth(shape.alpha, theta);
    let value = curve.value(s, theta);
    let message = if !growth.is_finite() {
        format!(
            "growth factor {} at theta {} (tan(alpha) = {})",
            growth,
            theta,
            shape.alpha.tan()
        )
    } else if !value.is_finite() {
        format!("generating curve value {} at s {}, theta {}", value, s, theta)
    } else {
        format!("coordinate overflow at s {}, theta {}", s, theta)
    };
    ShellError::degenerate(row, column, message)
}
