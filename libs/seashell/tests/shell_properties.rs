//! End-to-end properties of generated shells.

use approx::assert_relative_eq;
use seashell::{
    generate_lattice, generate_mesh, generate_preset, triangulate, AngleUnit, MeshBuffers,
    Sampling, ShellError, ShellParameters, ShellPreset, ShellShape,
};

#[test]
fn mesh_sizes_follow_lattice_dimensions() {
    for (turns, per_turn, cseg) in [(10.0, 64, 64), (2.5, 10, 7), (1.0, 2, 3)] {
        let sampling = Sampling::new(turns, per_turn, cseg);
        let h = (per_turn as f64 * turns).floor() as usize;
        let c = cseg as usize;

        let mesh = generate_preset(ShellPreset::Turritella, sampling).unwrap();
        assert_eq!(mesh.vertex_count(), h * c);
        assert_eq!(mesh.triangle_count(), 2 * (h - 1) * c);
        assert!(mesh
            .triangles()
            .iter()
            .flatten()
            .all(|&index| (index as usize) < h * c));
    }
}

#[test]
fn torus_four_by_four_literal_winding() {
    // 4 rows need 4 segments per turn over one turn
    let params = ShellParameters::new(ShellPreset::Torus.shape(), Sampling::new(1.0, 4, 4));
    let lattice = generate_lattice(&params).unwrap();
    assert_eq!((lattice.rows(), lattice.columns()), (4, 4));

    let mesh = triangulate(lattice).unwrap();
    assert_eq!(mesh.triangles()[0], [0, 5, 1]);
    assert_eq!(mesh.triangles()[1], [0, 4, 5]);
}

#[test]
fn single_row_shell_has_empty_triangle_buffer() {
    let params = ShellParameters::new(ShellPreset::Torus.shape(), Sampling::new(1.0, 1, 4));
    let mesh = generate_mesh(&params).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert!(mesh.triangles().is_empty());
}

#[test]
fn zero_curve_segments_is_invalid_parameter() {
    let params = ShellParameters::new(ShellPreset::Ancilla.shape(), Sampling::new(1.0, 4, 0));
    assert!(matches!(
        generate_lattice(&params),
        Err(ShellError::InvalidParameter { .. })
    ));
}

#[test]
fn degree_input_matches_radian_preset() {
    let degrees = [
        1.0, 2.0, 80.0, 90.0, 0.0, 0.0, 0.0, 2.0, 1.5, 0.3, 5.0, 150.0, 20.0, 30.0,
    ];
    let sampling = Sampling::new(2.0, 12, 10);
    let from_degrees = generate_mesh(&ShellParameters::new(
        ShellShape::from_unit(degrees, AngleUnit::Degrees),
        sampling,
    ))
    .unwrap();
    let preset = generate_preset(ShellPreset::Argonauta, sampling).unwrap();

    for (a, b) in from_degrees.vertices().iter().zip(preset.vertices()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }
}

#[test]
fn ornamented_shell_differs_from_plain_one() {
    let sampling = Sampling::new(2.0, 32, 32);
    let ornamented = ShellPreset::PreciousWentletrap.shape();
    let mut plain = ornamented;
    plain.node_amplitude = 0.0;

    let a = generate_mesh(&ShellParameters::new(ornamented, sampling)).unwrap();
    let b = generate_mesh(&ShellParameters::new(plain, sampling)).unwrap();
    assert_ne!(a.vertices(), b.vertices());
}

#[test]
fn fitted_buffers_stay_within_fit_size() {
    let mut mesh = generate_preset(ShellPreset::BoatEarMoon, Sampling::new(3.0, 24, 16)).unwrap();
    mesh.fit_into(15.0);
    let (min, max) = mesh.bounding_box();
    let extent = (max - min).max_element();
    assert_relative_eq!(extent, 15.0, epsilon = 1e-9);

    let buffers = MeshBuffers::from(&mesh);
    assert_eq!(buffers.vertex_count(), mesh.vertex_count());
    assert!(buffers.vertices.iter().all(|c| c.abs() <= 7.5 + 1e-4));
}
