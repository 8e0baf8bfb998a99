//! Legacy vertex limiter with a caller-provided envelope.
//!
//! Older call sites precompute the per-triangle admissible envelope and
//! pass it in as `qmin`/`qmax` arrays; only the vertex values are rewritten
//! and the edge values are left for the caller to refresh. Kept for
//! multistage schemes that reuse one envelope across several limiting
//! passes.

use crate::error::{check_len, QuantityError};
use crate::mesh::TriangleTopology;

use super::{neighbour_envelope, tighten};

/// Fill `qmin`/`qmax` with the envelope of own + valid neighbours'
/// centroid values, one entry per triangle.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] on length disagreement.
pub fn compute_centroid_extrema(
    topology: &TriangleTopology,
    centroid_values: &[f64],
    qmin: &mut [f64],
    qmax: &mut [f64],
) -> Result<(), QuantityError> {
    let n = topology.n_triangles;
    check_len("centroid_values", centroid_values.len(), n)?;
    check_len("qmin", qmin.len(), n)?;
    check_len("qmax", qmax.len(), n)?;

    for k in 0..n {
        let (lo, hi) = neighbour_envelope(topology, centroid_values, k);
        qmin[k] = lo;
        qmax[k] = hi;
    }
    Ok(())
}

/// Limit vertex deviations against a caller-provided envelope.
///
/// Rewrites `vertex_values` in place as `q_c + phi * dq`; edge values are
/// not touched.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] on length disagreement.
pub fn limit_old(
    beta: f64,
    centroid_values: &[f64],
    vertex_values: &mut [f64],
    qmin: &[f64],
    qmax: &[f64],
) -> Result<(), QuantityError> {
    let n = centroid_values.len();
    check_len("vertex_values", vertex_values.len(), 3 * n)?;
    check_len("qmin", qmin.len(), n)?;
    check_len("qmax", qmax.len(), n)?;

    for k in 0..n {
        let qc = centroid_values[k];
        let base = 3 * k;

        let mut phi = 1.0;
        let mut dqa = [0.0; 3];
        for i in 0..3 {
            let dq = vertex_values[base + i] - qc;
            dqa[i] = dq;
            phi = tighten(phi, dq, qc, qmin[k], qmax[k], beta);
        }

        for i in 0..3 {
            vertex_values[base + i] = qc + phi * dqa[i];
        }
    }

    Ok(())
}
