//! # Error Types
//!
//! Error types for shell generation. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when generation fails
//! - Invalid input is rejected before any sampling occurs
//! - Non-finite geometry is reported, never emitted

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating a shell mesh.
///
/// ## Example
///
/// ```rust
/// use seashell::{generate_lattice, Sampling, ShellError, ShellParameters, ShellPreset};
///
/// let sampling = Sampling::new(1.0, 8, 0);
/// let params = ShellParameters::new(ShellPreset::Torus.shape(), sampling);
///
/// match generate_lattice(&params) {
///     Err(ShellError::InvalidParameter { name, .. }) => assert_eq!(name, "cseg"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    /// A parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the violated constraint
        message: String,
    },

    /// An intermediate value became NaN or infinite while sampling.
    #[error("Non-finite point at row {row}, column {column}: {message}")]
    NumericDegenerate {
        /// Lattice row (whorl-angle sample)
        row: usize,
        /// Lattice column (cross-section sample)
        column: usize,
        /// What went wrong
        message: String,
    },

    /// A lattice is empty, jagged, or does not match its declared shape.
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch {
        /// Description of the mismatch
        message: String,
    },

    /// The requested resolution exceeds the vertex limit.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// The lattice would produce more triangles than allowed.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Requested triangle count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// A preset name did not match any known shell.
    #[error("Unknown preset: {name}")]
    UnknownPreset {
        /// The name that failed to parse
        name: String,
    },
}

impl ShellError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates a numeric degenerate error for a lattice cell.
    pub fn degenerate(row: usize, column: usize, message: impl Into<String>) -> Self {
        Self::NumericDegenerate {
            row,
            column,
            message: message.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(message: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

// =============================================================================
// TESTS
// =============================================================================
