//! Limiters using a per-edge envelope from the opposite neighbour only.
//!
//! Each edge deviation is constrained against the min/max of just the own
//! centroid value and the centroid value of the triangle across that edge.
//! Edges without a true neighbour impose no constraint on `phi`; there is
//! deliberately no global fallback for them.

use crate::error::QuantityError;
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;
use crate::reconstruct::vertices_from_edges;

use super::tighten;

fn limit_edges_per_edge(
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    for k in 0..topology.n_triangles {
        let qc = field.centroid_values[k];

        let base = 3 * k;
        let mut phi = 1.0;
        let mut dqa = [0.0; 3];
        for i in 0..3 {
            let dq = field.edge_values[base + i] - qc;
            dqa[i] = dq;

            if let Some(n) = topology.neighbours[k][i] {
                let qn = field.centroid_values[n];
                let qmin = qc.min(qn);
                let qmax = qc.max(qn);
                phi = tighten(phi, dq, qc, qmin, qmax, beta);
            }
        }

        let e = [qc + phi * dqa[0], qc + phi * dqa[1], qc + phi * dqa[2]];
        field.edge_values[base..base + 3].copy_from_slice(&e);
        field.vertex_values[base..base + 3].copy_from_slice(&vertices_from_edges(e));
    }

    Ok(())
}

/// Limit each edge deviation against its own edge's neighbour, then
/// re-derive vertex values from the limited edges.
pub fn limit_edges_by_neighbour(
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    limit_edges_per_edge(topology, beta, field)
}

/// Per-edge limiter that also receives the gradient arrays.
///
/// The limiting arithmetic is identical to [`limit_edges_by_neighbour`];
/// the gradients travel with the field but are not consulted, matching the
/// historical interface of this variant.
pub fn limit_gradient_by_neighbour(
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    limit_edges_per_edge(topology, beta, field)
}
