//! Limiters using the global envelope over all valid neighbours.

use crate::error::QuantityError;
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;
use crate::reconstruct::{edges_from_vertices, vertices_from_edges};

use super::{neighbour_envelope, tighten};

/// Limit vertex deviations against the min/max of all valid neighbours'
/// centroid values, then re-derive edge values from the limited vertices.
///
/// After this pass every vertex and edge value lies within
/// `[min(q_c, neighbour q_c's), max(q_c, neighbour q_c's)]` scaled by
/// `beta`.
pub fn limit_vertices_by_all_neighbours(
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    for k in 0..topology.n_triangles {
        let qc = field.centroid_values[k];
        let (qmin, qmax) = neighbour_envelope(topology, &field.centroid_values, k);

        let base = 3 * k;
        let mut phi = 1.0;
        let mut dqa = [0.0; 3];
        for i in 0..3 {
            let dq = field.vertex_values[base + i] - qc;
            dqa[i] = dq;
            phi = tighten(phi, dq, qc, qmin, qmax, beta);
        }

        let v = [qc + phi * dqa[0], qc + phi * dqa[1], qc + phi * dqa[2]];
        field.vertex_values[base..base + 3].copy_from_slice(&v);
        field.edge_values[base..base + 3].copy_from_slice(&edges_from_vertices(v));
    }

    Ok(())
}

/// Limit edge deviations against the min/max of all valid neighbours'
/// centroid values, then re-derive vertex values from the limited edges.
pub fn limit_edges_by_all_neighbours(
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    for k in 0..topology.n_triangles {
        let qc = field.centroid_values[k];
        let (qmin, qmax) = neighbour_envelope(topology, &field.centroid_values, k);

        let base = 3 * k;
        let mut phi = 1.0;
        let mut dqa = [0.0; 3];
        for i in 0..3 {
            let dq = field.edge_values[base + i] - qc;
            dqa[i] = dq;
            phi = tighten(phi, dq, qc, qmin, qmax, beta);
        }

        let e = [qc + phi * dqa[0], qc + phi * dqa[1], qc + phi * dqa[2]];
        field.edge_values[base..base + 3].copy_from_slice(&e);
        field.vertex_values[base..base + 3].copy_from_slice(&vertices_from_edges(e));
    }

    Ok(())
}
