//! # Generating Curve
//!
//! The cross-section swept along the spiral: an ellipse in polar form plus
//! a periodic Gaussian "node" bump that produces ribs and spines.

use crate::params::ShellShape;
use std::f64::consts::TAU;

/// Fractional part with truncation toward zero.
///
/// For negative `x` this returns a value in `(-1, 0]`, unlike
/// `x - x.floor()`. Whorl angles are never negative in practice.
#[inline]
pub fn frac_trunc(x: f64) -> f64 {
    x - x.trunc()
}

/// Generating curve of one shell shape.
///
/// # Example
///
/// ```rust
/// use seashell::{GeneratingCurve, ShellPreset};
///
/// let shape = ShellPreset::Torus.shape();
/// let curve = GeneratingCurve::new(&shape);
/// // a == b == 10, so the ellipse is a circle of radius 10
/// assert!((curve.radius(0.7) - 10.0).abs() < 1e-12);
/// assert_eq!(curve.node(0.7, 3.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeneratingCurve<'a> {
    shape: &'a ShellShape,
}

impl<'a> GeneratingCurve<'a> {
    /// Wraps a shape.
    pub fn new(shape: &'a ShellShape) -> Self {
        Self { shape }
    }

    /// Polar radius of the ellipse with semi-axes `a`, `b` at angle `s`.
    #[inline]
    pub fn radius(&self, s: f64) -> f64 {
        let u = s.cos() / self.shape.semi_a;
        let v = s.sin() / self.shape.semi_b;
        (u * u + v * v).powf(-0.5)
    }

    /// Node phase `l` within the current node period.
    #[inline]
    pub fn node_phase(&self, theta: f64) -> f64 {
        let n = self.shape.node_count;
        (TAU / n) * frac_trunc(n * theta / TAU)
    }

    /// Ornamentation term at curve angle `s` and whorl angle `theta`.
    ///
    /// Zero whenever `W1`, `W2` or `N` is zero.
    #[inline]
    pub fn node(&self, s: f64, theta: f64) -> f64 {
        let shape = self.shape;
        if shape.nodes_disabled() {
            return 0.0;
        }
        let l = self.node_phase(theta);
        let along_curve = 2.0 * (s - shape.node_phase) / shape.node_curve_width;
        let along_whorl = 2.0 * l / shape.node_whorl_width;
        shape.node_amplitude * (-(along_curve * along_curve + along_whorl * along_whorl)).exp()
    }

    /// Combined curve value `r(s) + node(s, theta)`.
    #[inline]
    pub fn value(&self, s: f64, theta: f64) -> f64 {
        self.radius(s) + self.node(s, theta)
    }
}
