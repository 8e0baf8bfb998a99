//! Integration tests for the reconstruction/limiting pipeline.
//!
//! These tests verify:
//! - Envelope bounds after limiting (TVD property)
//! - Exact planar round trips through the vertex/edge interpolators
//! - Beta endpoint behavior (fully diffusive and unlimited)
//! - Node averaging on shared mesh nodes

use fv_rs::{
    apply_limiter, average_vertex_values, compute_gradients, extrapolate_from_gradient,
    extrapolate_second_order, interpolate_from_edges_to_vertices,
    interpolate_from_vertices_to_edges, LimiterKind, QuantityField, ReconstructionConfig,
    TriangleTopology,
};

/// Build a step field that needs limiting at the jump.
fn step_problem(nx: usize, ny: usize) -> (TriangleTopology, QuantityField) {
    let (topo, _) = TriangleTopology::rectangular(0.0, 10.0, 0.0, 10.0, nx, ny);
    let mut field = QuantityField::new(topo.n_triangles);
    field.set_from_function(&topo, |x, _| if x < 5.0 { 1.0 } else { 4.0 });
    extrapolate_second_order(&topo, &mut field).unwrap();
    (topo, field)
}

/// Global neighbour envelope of triangle k.
fn envelope(topo: &TriangleTopology, q: &[f64], k: usize) -> (f64, f64) {
    let mut lo = q[k];
    let mut hi = q[k];
    for n in topo.neighbours[k].iter().flatten() {
        lo = lo.min(q[*n]);
        hi = hi.max(q[*n]);
    }
    (lo, hi)
}

#[test]
fn test_all_neighbour_variants_respect_envelope() {
    for kind in [
        LimiterKind::VerticesByAllNeighbours,
        LimiterKind::EdgesByAllNeighbours,
    ] {
        let (topo, mut field) = step_problem(8, 8);
        apply_limiter(kind, &topo, 1.0, &mut field).unwrap();

        for k in 0..topo.n_triangles {
            if topo.number_of_boundaries[k] > 1 {
                continue;
            }
            let (lo, hi) = envelope(&topo, &field.centroid_values, k);
            let carried = match kind {
                LimiterKind::VerticesByAllNeighbours => &field.vertex_values,
                _ => &field.edge_values,
            };
            for i in 0..3 {
                let v = carried[3 * k + i];
                assert!(
                    v >= lo - 1e-11 && v <= hi + 1e-11,
                    "{}: triangle {} slot {}: {} outside [{}, {}]",
                    kind.name(),
                    k,
                    i,
                    v,
                    lo,
                    hi
                );
            }
        }
    }
}

#[test]
fn test_planar_round_trip_is_exact() {
    // Arbitrary planar data per triangle: the vertex->edge->vertex and
    // edge->vertex->edge round trips are identities.
    let vertex: Vec<f64> = (0..30).map(|i| (i as f64) * 0.37 - 4.0).collect();
    let mut edge = vec![0.0; 30];
    let mut recovered = vec![0.0; 30];

    interpolate_from_vertices_to_edges(&vertex, &mut edge).unwrap();
    interpolate_from_edges_to_vertices(&mut recovered, &edge).unwrap();

    for (a, b) in vertex.iter().zip(recovered.iter()) {
        assert!((a - b).abs() < 1e-12);
    }

    let mut edge_again = vec![0.0; 30];
    interpolate_from_vertices_to_edges(&recovered, &mut edge_again).unwrap();
    for (a, b) in edge.iter().zip(edge_again.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_beta_zero_is_fully_diffusive() {
    for kind in [
        LimiterKind::VerticesByAllNeighbours,
        LimiterKind::EdgesByAllNeighbours,
    ] {
        let (topo, mut field) = step_problem(6, 6);
        apply_limiter(kind, &topo, 0.0, &mut field).unwrap();

        for k in 0..topo.n_triangles {
            let qc = field.centroid_values[k];
            for i in 0..3 {
                assert!(
                    (field.vertex_values[3 * k + i] - qc).abs() < 1e-12,
                    "{}: beta = 0 must collapse vertices to the centroid",
                    kind.name()
                );
                assert!((field.edge_values[3 * k + i] - qc).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_large_beta_keeps_smooth_field_unlimited() {
    let (topo, _) = TriangleTopology::rectangular(0.0, 10.0, 0.0, 10.0, 6, 6);
    let mut field = QuantityField::new(topo.n_triangles);
    field.set_from_function(&topo, |_, _| 2.5);
    extrapolate_second_order(&topo, &mut field).unwrap();

    let unlimited = field.clone();
    apply_limiter(LimiterKind::EdgesByAllNeighbours, &topo, 100.0, &mut field).unwrap();

    for (a, b) in unlimited.edge_values.iter().zip(field.edge_values.iter()) {
        assert!((a - b).abs() < 1e-13);
    }
    for (a, b) in unlimited
        .vertex_values
        .iter()
        .zip(field.vertex_values.iter())
    {
        assert!((a - b).abs() < 1e-13);
    }
}

#[test]
fn test_linear_field_survives_default_reconstruction() {
    let f = |x: f64, y: f64| 3.0 + 0.5 * x - 0.25 * y;
    let (topo, _) = TriangleTopology::rectangular(0.0, 8.0, 0.0, 8.0, 8, 8);
    let mut field = QuantityField::new(topo.n_triangles);
    field.set_from_function(&topo, f);

    ReconstructionConfig::new().reconstruct(&topo, &mut field).unwrap();

    // Interior triangles reconstruct the plane exactly and the limiter must
    // leave it alone (no new extrema in a linear field).
    for k in 0..topo.n_triangles {
        if topo.number_of_boundaries[k] == 0 {
            let verts = topo.triangle_vertices(k);
            for i in 0..3 {
                let (x, y) = verts[i];
                assert!(
                    (field.vertex_values[3 * k + i] - f(x, y)).abs() < 1e-9,
                    "triangle {} vertex {}",
                    k,
                    i
                );
            }
        }
    }
}

#[test]
fn test_separate_gradient_and_extrapolation_stages() {
    let (topo, _) = TriangleTopology::rectangular(0.0, 4.0, 0.0, 4.0, 4, 4);
    let mut staged = QuantityField::new(topo.n_triangles);
    staged.set_from_function(&topo, |x, y| x * y);

    let mut combined = staged.clone();

    compute_gradients(&topo, &mut staged).unwrap();
    extrapolate_from_gradient(&topo, &mut staged).unwrap();
    extrapolate_second_order(&topo, &mut combined).unwrap();

    for (a, b) in staged.vertex_values.iter().zip(combined.vertex_values.iter()) {
        assert!((a - b).abs() < 1e-13);
    }
}

#[test]
fn test_node_averaging_on_shared_nodes() {
    let (topo, tables) = TriangleTopology::rectangular(0.0, 2.0, 0.0, 2.0, 2, 2);
    let mut field = QuantityField::new(topo.n_triangles);
    field.set_from_function(&topo, |x, y| x + 2.0 * y);
    extrapolate_second_order(&topo, &mut field).unwrap();

    let mut node_values = vec![0.0; tables.n_nodes];
    average_vertex_values(
        &tables.vertex_value_indices,
        &tables.triangles_per_node,
        &field.vertex_values,
        &mut node_values,
    )
    .unwrap();

    assert_eq!(node_values.len(), tables.n_nodes);
    // The averaged field stays within the range of the vertex values
    let lo = field.vertex_values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = field
        .vertex_values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    for &v in &node_values {
        assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
    }
}
