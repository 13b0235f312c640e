//! Degree to radian conversion for shape input.

use super::ShellShape;
use serde::{Deserialize, Serialize};

/// Unit of the angular fields in a raw shape vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Angles in degrees; converted once before sampling
    #[default]
    Degrees,
    /// Angles already in radians
    Radians,
}

/// A shape whose angular fields are in degrees.
///
/// The only way out is [`DegreeShape::into_radians`], which consumes the
/// wrapper, so a shape cannot be converted twice.
///
/// Angular fields: `alpha, beta, phi, mu, omega, P, W1, W2`.
///
/// # Example
///
/// ```rust
/// use seashell::{DegreeShape, ShellShape};
///
/// let raw = ShellShape::from_array([
///     1.0, 25.0, 83.0, 42.0, 70.0, 10.0, 30.0, 12.0, 20.0, 0.0, 0.0, 1.0, 1.0, 1.0,
/// ]);
/// let shape = DegreeShape(raw).into_radians();
/// assert_eq!(shape.axis_offset, 25.0);
/// assert!((shape.alpha - 83f64.to_radians()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeShape(pub ShellShape);

impl DegreeShape {
    /// Converts every angular field to radians.
    pub fn into_radians(self) -> ShellShape {
        let shape = self.0;
        ShellShape {
            alpha: shape.alpha.to_radians(),
            beta: shape.beta.to_radians(),
            phi: shape.phi.to_radians(),
            mu: shape.mu.to_radians(),
            omega: shape.omega.to_radians(),
            node_phase: shape.node_phase.to_radians(),
            node_curve_width: shape.node_curve_width.to_radians(),
            node_whorl_width: shape.node_whorl_width.to_radians(),
            ..shape
        }
    }
}

impl From<DegreeShape> for ShellShape {
    fn from(shape: DegreeShape) -> Self {
        shape.into_radians()
    }
}
