//! # Config Crate
//!
//! Centralized configuration constants for the seashell generator.
//! Sampling defaults, safety limits and tolerances live here so that the
//! core library and its hosts agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CURVE_SEGMENTS, DEFAULT_SEGMENTS_PER_TURN, DEFAULT_TURNS};
//!
//! let rows = (DEFAULT_SEGMENTS_PER_TURN as f64 * DEFAULT_TURNS).floor() as usize;
//! let columns = DEFAULT_CURVE_SEGMENTS as usize;
//! assert_eq!(rows * columns, 640 * 64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
