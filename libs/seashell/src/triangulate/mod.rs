//! # Mesh Triangulator
//!
//! Turns an `H × C` point lattice into an open spiral tube. Columns wrap
//! (`C - 1` connects back to `0`) to close the tube around its cross
//! section; rows do not wrap, so both whorl ends stay open.
//!
//! For every row `i < H - 1` and column `j`:
//!
//! ```text
//! A = (i*C + j, (i+1)*C + (j+1)%C, i*C + (j+1)%C)
//! B = (i*C + j, (i+1)*C + j,       (i+1)*C + (j+1)%C)
//! ```

#[cfg(test)]
mod tests;

use crate::error::{ShellError, ShellResult};
use crate::mesh::Mesh;
use crate::sampler::PointLattice;
use config::constants::MAX_TRIANGLES;
use rayon::prelude::*;

/// The two triangles closing the quad at row `i`, column `j`.
///
/// # Example
///
/// ```rust
/// use seashell::quad_triangles;
///
/// assert_eq!(quad_triangles(0, 0, 4), [[0, 5, 1], [0, 4, 5]]);
/// // last column wraps back to column 0
/// assert_eq!(quad_triangles(0, 3, 4), [[3, 4, 0], [3, 7, 4]]);
/// ```
#[inline]
pub fn quad_triangles(i: u32, j: u32, columns: u32) -> [[u32; 3]; 2] {
    let next = (j + 1) % columns;
    let here = i * columns;
    let above = (i + 1) * columns;
    [
        [here + j, above + next, here + next],
        [here + j, above + j, above + next],
    ]
}

/// Number of triangles for an `rows × columns` lattice.
#[inline]
pub fn triangle_count(rows: usize, columns: usize) -> usize {
    2 * rows.saturating_sub(1) * columns
}

/// Converts a lattice into a mesh, taking ownership of its points.
///
/// Vertex `i*C + j` is lattice cell `(i, j)`. A single-row lattice yields
/// vertices and no triangles.
///
/// # Errors
///
/// - [`ShellError::DimensionMismatch`] for an empty lattice or one whose
///   buffer does not match its dimensions.
/// - [`ShellError::TooManyVertices`] when indices would not fit in `u32`.
/// - [`ShellError::TooManyTriangles`] when the triangle count exceeds the
///   configured limit.
///
/// # Example
///
/// ```rust
/// use seashell::{generate_lattice, triangulate, Sampling, ShellParameters, ShellPreset};
///
/// let params = ShellParameters::new(ShellPreset::Torus.shape(), Sampling::new(1.0, 4, 4));
/// let mesh = triangulate(generate_lattice(&params).unwrap()).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 24);
/// ```
pub fn triangulate(lattice: PointLattice) -> ShellResult<Mesh> {
    let rows = lattice.rows();
    let columns = lattice.columns();

    if rows == 0 || columns == 0 || lattice.len() != rows * columns {
        return Err(ShellError::dimension_mismatch(format!(
            "cannot triangulate {}x{} lattice holding {} points",
            rows,
            columns,
            lattice.len()
        )));
    }

    let vertex_count = lattice.len();
    if u32::try_from(vertex_count).is_err() {
        return Err(ShellError::TooManyVertices {
            count: vertex_count,
            max: u32::MAX as usize,
        });
    }
    let count = triangle_count(rows, columns);
    if count > MAX_TRIANGLES {
        return Err(ShellError::TooManyTriangles {
            count,
            max: MAX_TRIANGLES,
        });
    }

    // Checked above: every index fits in u32.
    let c = columns as u32;
    let mut triangles = vec![[0u32; 3]; count];
    triangles
        .par_chunks_mut(2 * columns)
        .enumerate()
        .for_each(|(i, band)| {
            for (j, pair) in band.chunks_exact_mut(2).enumerate() {
                pair.copy_from_slice(&quad_triangles(i as u32, j as u32, c));
            }
        });

    Ok(Mesh::from_parts(lattice.into_points(), triangles))
}
