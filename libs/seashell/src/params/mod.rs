//! # Shell Parameters
//!
//! The immutable input record for one generation call: the 14-value shape
//! vector of the growth model plus the sampling resolution.
//!
//! Angular shape fields are always radians. Degree input goes through
//! [`DegreeShape`], which converts exactly once.

mod presets;
mod units;


pub use presets::ShellPreset;
pub use units::{AngleUnit, DegreeShape};

use crate::error::{ShellError, ShellResult};
use config::constants::{
    DEFAULT_CURVE_SEGMENTS, DEFAULT_SEGMENTS_PER_TURN, DEFAULT_TURNS, MAX_VERTICES,
};
use serde::{Deserialize, Serialize};

/// Number of values in a shape vector.
pub const SHAPE_LEN: usize = 14;

// =============================================================================
// SHAPE
// =============================================================================

/// The 14 biological growth parameters of a shell.
///
/// Field order matches the canonical vector order
/// `D, A, alpha, beta, phi, mu, omega, a, b, L, P, W1, W2, N`.
///
/// # Example
///
/// ```rust
/// use seashell::ShellShape;
///
/// let values = [1.0, 90.0, 1.5, 0.17, 0.0, 0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 1.0, 1.0, 1.0];
/// let shape = ShellShape::from_array(values);
/// assert_eq!(shape.axis_offset, 90.0);
/// assert_eq!(shape.to_array(), values);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellShape {
    /// `D`: overall scale, applied to `x` only
    pub scale: f64,
    /// `A`: translation of the generating curve along the spiral axis
    pub axis_offset: f64,
    /// `alpha`: whorl expansion angle
    pub alpha: f64,
    /// `beta`: tilt of the generating curve plane
    pub beta: f64,
    /// `phi`: rotation of the curve within its plane
    pub phi: f64,
    /// `mu`: curve orientation angle
    pub mu: f64,
    /// `omega`: curve orientation angle
    pub omega: f64,
    /// `a`: first semi-axis of the generating ellipse
    pub semi_a: f64,
    /// `b`: second semi-axis of the generating ellipse
    pub semi_b: f64,
    /// `L`: node bump amplitude
    pub node_amplitude: f64,
    /// `P`: node position along the generating curve
    pub node_phase: f64,
    /// `W1`: node width along the generating curve
    pub node_curve_width: f64,
    /// `W2`: node width along the whorl
    pub node_whorl_width: f64,
    /// `N`: nodes per revolution (may be fractional)
    pub node_count: f64,
}

impl ShellShape {
    /// Builds a shape from a vector in canonical order.
    pub fn from_array(values: [f64; SHAPE_LEN]) -> Self {
        let [
            scale,
            axis_offset,
            alpha,
            beta,
            phi,
            mu,
            omega,
            semi_a,
            semi_b,
            node_amplitude,
            node_phase,
            node_curve_width,
            node_whorl_width,
            node_count,
        ] = values;
        Self {
            scale,
            axis_offset,
            alpha,
            beta,
            phi,
            mu,
            omega,
            semi_a,
            semi_b,
            node_amplitude,
            node_phase,
            node_curve_width,
            node_whorl_width,
            node_count,
        }
    }

    /// Builds a shape from a slice in canonical order.
    ///
    /// Fails unless exactly [`SHAPE_LEN`] values are supplied.
    pub fn from_slice(values: &[f64]) -> ShellResult<Self> {
        let values: [f64; SHAPE_LEN] = values.try_into().map_err(|_| {
            ShellError::invalid_parameter(
                "shape",
                format!("expected {} values, got {}", SHAPE_LEN, values.len()),
            )
        })?;
        Ok(Self::from_array(values))
    }

    /// Returns the shape as a vector in canonical order.
    pub fn to_array(&self) -> [f64; SHAPE_LEN] {
        [
            self.scale,
            self.axis_offset,
            self.alpha,
            self.beta,
            self.phi,
            self.mu,
            self.omega,
            self.semi_a,
            self.semi_b,
            self.node_amplitude,
            self.node_phase,
            self.node_curve_width,
            self.node_whorl_width,
            self.node_count,
        ]
    }

    /// Builds a radian shape from raw values given in `unit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seashell::{AngleUnit, ShellShape};
    ///
    /// let degrees = [1.0, 90.0, 90.0, 10.0, 0.0, 0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    /// let shape = ShellShape::from_unit(degrees, AngleUnit::Degrees);
    /// assert!((shape.alpha - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn from_unit(values: [f64; SHAPE_LEN], unit: AngleUnit) -> Self {
        let shape = Self::from_array(values);
        match unit {
            AngleUnit::Radians => shape,
            AngleUnit::Degrees => DegreeShape(shape).into_radians(),
        }
    }

    /// Returns true when the ornamentation term is switched off.
    ///
    /// A zero width or zero count disables nodes entirely. A zero amplitude
    /// still evaluates the term, which is then identically zero.
    #[inline]
    pub fn nodes_disabled(&self) -> bool {
        self.node_curve_width == 0.0 || self.node_whorl_width == 0.0 || self.node_count == 0.0
    }

    /// Checks the shape constraints the sampler relies on.
    pub fn validate(&self) -> ShellResult<()> {
        const NAMES: [&str; SHAPE_LEN] = [
            "D", "A", "alpha", "beta", "phi", "mu", "omega", "a", "b", "L", "P", "W1", "W2", "N",
        ];
        for (name, value) in NAMES.into_iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(ShellError::invalid_parameter(
                    name,
                    format!("must be finite, got {}", value),
                ));
            }
        }
        if self.semi_a == 0.0 {
            return Err(ShellError::invalid_parameter("a", "semi-axis must be nonzero"));
        }
        if self.semi_b == 0.0 {
            return Err(ShellError::invalid_parameter("b", "semi-axis must be nonzero"));
        }
        Ok(())
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Lattice resolution for one generation call.
///
/// # Example
///
/// ```rust
/// use seashell::Sampling;
///
/// let sampling = Sampling::new(2.5, 64, 32);
/// assert_eq!(sampling.row_count(), 160);
/// assert_eq!(sampling.column_count(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sampling {
    /// Number of whorl revolutions to sample
    pub turns: f64,
    /// Rows per full revolution
    pub segments_per_turn: u32,
    /// Samples around the generating curve (`cseg`)
    pub curve_segments: u32,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            segments_per_turn: DEFAULT_SEGMENTS_PER_TURN,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl Sampling {
    /// Creates a sampling resolution.
    pub fn new(turns: f64, segments_per_turn: u32, curve_segments: u32) -> Self {
        Self {
            turns,
            segments_per_turn,
            curve_segments,
        }
    }

    /// Lattice rows `H = floor(segments_per_turn * turns)`.
    ///
    /// Only meaningful once [`Sampling::validate`] has passed.
    pub fn row_count(&self) -> usize {
        (self.segments_per_turn as f64 * self.turns).floor() as usize
    }

    /// Lattice columns `C = curve_segments`.
    pub fn column_count(&self) -> usize {
        self.curve_segments as usize
    }

    /// Total angle swept by the whorl, `turns * 2π`.
    pub fn rotation(&self) -> f64 {
        self.turns * std::f64::consts::TAU
    }

    /// Checks the resolution is sampleable and within limits.
    pub fn validate(&self) -> ShellResult<()> {
        if !(self.turns.is_finite() && self.turns > 0.0) {
            return Err(ShellError::invalid_parameter(
                "turns",
                format!("must be positive and finite, got {}", self.turns),
            ));
        }
        if self.segments_per_turn < 1 {
            return Err(ShellError::invalid_parameter(
                "segmentsPerTurn",
                "must be at least 1",
            ));
        }
        if self.curve_segments < 1 {
            return Err(ShellError::invalid_parameter("cseg", "must be at least 1"));
        }
        let rows = self.row_count();
        if rows < 1 {
            return Err(ShellError::invalid_parameter(
                "turns",
                format!(
                    "{} turns at {} segments per turn yields no rows",
                    self.turns, self.segments_per_turn
                ),
            ));
        }
        let count = rows.saturating_mul(self.column_count());
        if count > MAX_VERTICES {
            return Err(ShellError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }
        Ok(())
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Everything the sampler needs: shape plus resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellParameters {
    /// Growth model parameters, angles in radians
    pub shape: ShellShape,
    /// Lattice resolution
    pub sampling: Sampling,
}

impl ShellParameters {
    /// Pairs a shape with a sampling resolution.
    pub fn new(shape: ShellShape, sampling: Sampling) -> Self {
        Self { shape, sampling }
    }

    /// Rows the sampler will produce.
    pub fn row_count(&self) -> usize {
        self.sampling.row_count()
    }

    /// Columns the sampler will produce.
    pub fn column_count(&self) -> usize {
        self.sampling.column_count()
    }

    /// Validates resolution first, then shape.
    pub fn validate(&self) -> ShellResult<()> {
        self.sampling.validate()?;
        self.shape.validate()
    }
}
