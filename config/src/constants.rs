//! # Configuration Constants
//!
//! Centralized constants for the seashell generator. Sampling resolution
//! and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Resolution**: Default lattice sampling parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Presentation**: Values used by hosts when handing a mesh to a viewer

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of lattice rows sampled per whorl revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS_PER_TURN;
///
/// let user_value: Option<u32> = None;
/// assert_eq!(user_value.unwrap_or(DEFAULT_SEGMENTS_PER_TURN), 64);
/// ```
pub const DEFAULT_SEGMENTS_PER_TURN: u32 = 64;

/// Default number of samples around the generating curve.
///
/// Effectively turns the generating ellipse into an N-gon.
pub const DEFAULT_CURVE_SEGMENTS: u32 = 64;

/// Default number of whorl revolutions.
pub const DEFAULT_TURNS: f64 = 10.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 640 * 64;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 20_000_000;

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Edge length of the cube a finished shell is fitted into before display.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FIT_SIZE;
///
/// assert_eq!(DEFAULT_FIT_SIZE, 15.0);
/// ```
pub const DEFAULT_FIT_SIZE: f64 = 15.0;
