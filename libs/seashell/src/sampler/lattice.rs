//! # Point Lattice
//!
//! Row-major grid of sampled surface points. Rows follow the whorl angle,
//! columns follow the generating curve.

use crate::error::{ShellError, ShellResult};
use glam::DVec3;

/// An `rows × columns` grid of 3-D points stored row-major.
///
/// # Example
///
/// ```rust
/// use seashell::PointLattice;
/// use glam::DVec3;
///
/// let lattice = PointLattice::from_rows(vec![
///     vec![DVec3::ZERO, DVec3::X],
///     vec![DVec3::Y, DVec3::Z],
/// ]).unwrap();
/// assert_eq!(lattice.rows(), 2);
/// assert_eq!(lattice.get(1, 0), Some(DVec3::Y));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointLattice {
    rows: usize,
    columns: usize,
    points: Vec<DVec3>,
}

impl PointLattice {
    /// Wraps a flat row-major buffer.
    ///
    /// Fails when either dimension is zero, their product overflows, or the
    /// buffer length is not `rows * columns`.
    pub fn new(rows: usize, columns: usize, points: Vec<DVec3>) -> ShellResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(ShellError::dimension_mismatch(format!(
                "lattice must have at least one row and column, got {}x{}",
                rows, columns
            )));
        }
        let Some(expected) = rows.checked_mul(columns) else {
            return Err(ShellError::dimension_mismatch(format!(
                "{}x{} lattice dimensions overflow",
                rows, columns
            )));
        };
        if points.len() != expected {
            return Err(ShellError::dimension_mismatch(format!(
                "{}x{} lattice needs {} points, got {}",
                rows,
                columns,
                expected,
                points.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            points,
        })
    }

    /// Builds a lattice from nested rows, rejecting empty or jagged input.
    pub fn from_rows(rows: Vec<Vec<DVec3>>) -> ShellResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns) {
            return Err(ShellError::dimension_mismatch(format!(
                "row {} has {} columns, expected {}",
                index,
                row.len(),
                columns
            )));
        }
        let row_count = rows.len();
        let points = rows.into_iter().flatten().collect();
        Self::new(row_count, columns, points)
    }

    /// Lattice rows `H`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Lattice columns `C`.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed lattice.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<DVec3> {
        if i < self.rows && j < self.columns {
            Some(self.points[i * self.columns + j])
        } else {
            None
        }
    }

    /// One whorl row.
    pub fn row(&self, i: usize) -> Option<&[DVec3]> {
        if i < self.rows {
            let start = i * self.columns;
            Some(&self.points[start..start + self.columns])
        } else {
            None
        }
    }

    /// All rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[DVec3]> {
        self.points.chunks(self.columns)
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Releases the flat buffer.
    #[inline]
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }
}
