//! Named shells from the growth-model paper.

use super::ShellShape;
use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named shell with a fixed shape vector.
///
/// # Example
///
/// ```rust
/// use seashell::ShellPreset;
///
/// let preset: ShellPreset = "boat ear moon".parse().unwrap();
/// assert_eq!(preset, ShellPreset::BoatEarMoon);
/// assert_eq!(preset.to_string(), "Boat Ear Moon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellPreset {
    /// Circular tube with no expansion
    Torus,
    /// Haliotis (abalone)
    BoatEarMoon,
    /// Epitonium scalare, ribbed by nodes
    PreciousWentletrap,
    /// Tall tower shell
    Turritella,
    /// Ancilla
    Ancilla,
    /// Paper nautilus, flat with spines
    Argonauta,
}

impl ShellPreset {
    /// Every preset, in menu order.
    pub const ALL: [ShellPreset; 6] = [
        ShellPreset::Torus,
        ShellPreset::BoatEarMoon,
        ShellPreset::PreciousWentletrap,
        ShellPreset::Turritella,
        ShellPreset::Ancilla,
        ShellPreset::Argonauta,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShellPreset::Torus => "Torus",
            ShellPreset::BoatEarMoon => "Boat Ear Moon",
            ShellPreset::PreciousWentletrap => "Precious Wentletrap",
            ShellPreset::Turritella => "Turritella",
            ShellPreset::Ancilla => "Ancilla",
            ShellPreset::Argonauta => "Argonauta",
        }
    }

    /// Shape vector with angles in radians.
    ///
    /// Node widths of disabled-node presets are stored as raw `1.0`, not
    /// `1°`; only `L = 0` switches them off.
    #[rustfmt::skip]
    pub fn shape(self) -> ShellShape {
        let r = f64::to_radians;
        let values = match self {
            ShellPreset::Torus => [
                1.0, 90.0, r(90.0), r(10.0), 0.0, 0.0, 0.0, 10.0, 10.0,
                0.0, 0.0, 1.0, 1.0, 1.0,
            ],
            ShellPreset::BoatEarMoon => [
                1.0, 25.0, r(83.0), r(42.0), r(70.0), r(10.0), r(30.0), 12.0, 20.0,
                0.0, 0.0, 1.0, 1.0, 1.0,
            ],
            ShellPreset::PreciousWentletrap => [
                1.0, 90.0, r(86.0), r(10.0), r(-45.0), r(5.0), r(1.0), 20.0, 20.0,
                10.0, r(40.0), r(180.0), r(0.4), 8.0,
            ],
            ShellPreset::Turritella => [
                1.0, 22.2, r(88.9), r(4.0), r(55.0), r(1.0), r(-2.0), 1.3, 1.5,
                0.0, 0.0, 1.0, 1.0, 1.0,
            ],
            ShellPreset::Ancilla => [
                1.0, 100.0, r(86.0), r(7.0), 0.0, 0.0, 0.0, 15.0, 35.0,
                0.0, 0.0, 1.0, 1.0, 1.0,
            ],
            ShellPreset::Argonauta => [
                1.0, 2.0, r(80.0), r(90.0), 0.0, 0.0, 0.0, 2.0, 1.5,
                0.3, r(5.0), r(150.0), r(20.0), 30.0,
            ],
        };
        ShellShape::from_array(values)
    }
}

impl fmt::Display for ShellPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShellPreset {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShellPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShellError::UnknownPreset {
                name: s.to_string(),
            })
    }
}
