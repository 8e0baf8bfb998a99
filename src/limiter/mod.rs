//! TVD slope limiters for reconstructed vertex and edge values.
//!
//! All variants share one template: per triangle, compute a multiplier
//! `phi ∈ [0, 1]` that scales the reconstructed deviations from the
//! centroid value so no limited value leaves the admissible envelope of
//! neighbouring centroid values, then rewrite the carried representation as
//! `q_c + phi * dq`. They differ in which representation carries the
//! limited deviation (vertex or edge), whether the envelope is global over
//! all valid neighbours or per-edge, and are all scaled by the safety
//! factor `beta` (`beta = 1` is the least diffusive fully TVD setting;
//! smaller values trade accuracy for extra damping).
//!
//! None of the limiters fail for valid numeric input; they are total
//! functions over the provided arrays. Size mismatches are rejected before
//! any write.

mod by_all_neighbours;
mod by_neighbour;
mod legacy;

pub use by_all_neighbours::{limit_edges_by_all_neighbours, limit_vertices_by_all_neighbours};
pub use by_neighbour::{limit_edges_by_neighbour, limit_gradient_by_neighbour};
pub use legacy::{compute_centroid_extrema, limit_old};

use crate::error::QuantityError;
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;

/// Tighten the limiting multiplier against one deviation.
///
/// The ratio `r` defaults to 1 so a zero deviation imposes no constraint
/// (and never divides); positive deviations are measured against the upper
/// envelope, negative against the lower.
#[inline(always)]
pub(crate) fn tighten(phi: f64, dq: f64, qc: f64, qmin: f64, qmax: f64, beta: f64) -> f64 {
    let mut r = 1.0;
    if dq > 0.0 {
        r = (qmax - qc) / dq;
    }
    if dq < 0.0 {
        r = (qmin - qc) / dq;
    }
    phi.min((r * beta).min(1.0))
}

/// Min/max of the centroid value and its valid neighbours' centroid values.
#[inline(always)]
pub(crate) fn neighbour_envelope(
    topology: &TriangleTopology,
    centroid_values: &[f64],
    k: usize,
) -> (f64, f64) {
    let qc = centroid_values[k];
    let mut qmin = qc;
    let mut qmax = qc;
    for n in topology.neighbours[k].iter().flatten() {
        let qn = centroid_values[*n];
        qmin = qmin.min(qn);
        qmax = qmax.max(qn);
    }
    (qmin, qmax)
}

/// Which monotonicity limiter a reconstruction pass applies.
///
/// [`limit_old`] is not listed here because it consumes a caller-provided
/// envelope rather than the topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimiterKind {
    /// Vertex deviations against the global neighbour envelope
    VerticesByAllNeighbours,
    /// Edge deviations against the global neighbour envelope
    #[default]
    EdgesByAllNeighbours,
    /// Edge deviations, each against only its own edge's neighbour
    EdgesByNeighbour,
    /// Same limiting arithmetic as [`LimiterKind::EdgesByNeighbour`];
    /// accepts gradient arrays for interface compatibility
    GradientByNeighbour,
}

impl LimiterKind {
    /// Human-readable name for debugging and logging.
    pub fn name(&self) -> &'static str {
        match self {
            LimiterKind::VerticesByAllNeighbours => "vertices_by_all_neighbours",
            LimiterKind::EdgesByAllNeighbours => "edges_by_all_neighbours",
            LimiterKind::EdgesByNeighbour => "edges_by_neighbour",
            LimiterKind::GradientByNeighbour => "gradient_by_neighbour",
        }
    }
}

/// Apply the selected limiter to the reconstructed field.
pub fn apply_limiter(
    kind: LimiterKind,
    topology: &TriangleTopology,
    beta: f64,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    match kind {
        LimiterKind::VerticesByAllNeighbours => {
            limit_vertices_by_all_neighbours(topology, beta, field)
        }
        LimiterKind::EdgesByAllNeighbours => limit_edges_by_all_neighbours(topology, beta, field),
        LimiterKind::EdgesByNeighbour => limit_edges_by_neighbour(topology, beta, field),
        LimiterKind::GradientByNeighbour => limit_gradient_by_neighbour(topology, beta, field),
    }
}
