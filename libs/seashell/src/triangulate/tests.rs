//! Triangulation tests.

use super::*;
use crate::params::{Sampling, ShellParameters, ShellPreset};
use crate::sampler::generate_lattice;
use glam::DVec3;
use std::collections::HashSet;

fn grid(rows: usize, columns: usize) -> PointLattice {
    let points = (0..rows * columns)
        .map(|k| DVec3::new((k % columns) as f64, (k / columns) as f64, 0.0))
        .collect();
    PointLattice::new(rows, columns, points).unwrap()
}

#[test]
fn test_counts() {
    for (rows, columns) in [(2, 1), (2, 3), (4, 4), (7, 5), (30, 64)] {
        let mesh = triangulate(grid(rows, columns)).unwrap();
        assert_eq!(mesh.vertex_count(), rows * columns);
        assert_eq!(mesh.triangle_count(), 2 * (rows - 1) * columns);
        assert!(mesh.validate());
    }
}

#[test]
fn test_single_row_has_no_triangles() {
    let mesh = triangulate(grid(1, 4)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_torus_winding_literals() {
    let params = ShellParameters::new(ShellPreset::Torus.shape(), Sampling::new(1.0, 4, 4));
    let mesh = triangulate(generate_lattice(&params).unwrap()).unwrap();
    let triangles = mesh.triangles();

    assert_eq!(triangles.len(), 24);
    assert_eq!(triangles[0], [0, 5, 1]);
    assert_eq!(triangles[1], [0, 4, 5]);
    // row 0, column 3 wraps to column 0
    assert_eq!(triangles[6], [3, 4, 0]);
    assert_eq!(triangles[7], [3, 7, 4]);
    // row 2, column 1
    assert_eq!(triangles[18], [9, 14, 10]);
    assert_eq!(triangles[19], [9, 13, 14]);

    for (k, tri) in triangles.iter().enumerate() {
        let (i, j) = ((k / 2) / 4, (k / 2) % 4);
        assert_eq!(*tri, quad_triangles(i as u32, j as u32, 4)[k % 2]);
    }
}

#[test]
fn test_vertices_are_lattice_in_row_major_order() {
    let lattice = grid(3, 5);
    let expected = lattice.points().to_vec();
    let mesh = triangulate(lattice).unwrap();
    assert_eq!(mesh.vertices(), expected.as_slice());
}

#[test]
fn test_columns_wrap_rows_do_not() {
    let (rows, columns) = (5, 6);
    let mesh = triangulate(grid(rows, columns)).unwrap();

    let mut seam_quads = 0;
    for tri in mesh.triangles() {
        let row_of: Vec<usize> = tri.iter().map(|&v| v as usize / columns).collect();
        let col_of: Vec<usize> = tri.iter().map(|&v| v as usize % columns).collect();

        assert!(col_of.iter().all(|&c| c < columns));
        let lowest = *row_of.iter().min().unwrap();
        let highest = *row_of.iter().max().unwrap();
        // every triangle spans exactly two adjacent rows, never last -> first
        assert_eq!(highest - lowest, 1);

        if col_of.contains(&0) && col_of.contains(&(columns - 1)) {
            seam_quads += 1;
        }
    }
    // two triangles per row band touch the wrapped seam
    assert_eq!(seam_quads, 2 * (rows - 1));
}

#[test]
fn test_every_quad_edge_shared() {
    // Interior edges of the tube are shared by exactly two triangles;
    // only the two open whorl ends have boundary edges.
    let (rows, columns) = (4, 5);
    let mesh = triangulate(grid(rows, columns)).unwrap();

    let mut edges: std::collections::HashMap<(u32, u32), usize> = Default::default();
    for tri in mesh.triangles() {
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    let boundary: HashSet<(u32, u32)> = edges
        .iter()
        .filter(|(_, n)| **n == 1)
        .map(|(e, _)| *e)
        .collect();
    assert_eq!(boundary.len(), 2 * columns);
    assert!(edges.values().all(|&n| n <= 2));
}

#[test]
fn test_single_column_tube() {
    let mesh = triangulate(grid(3, 1)).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.triangles()[0], [0, 1, 0]);
    assert!(mesh.validate());
}
