//! Linear maps between the vertex and edge-midpoint representations.
//!
//! Edge midpoints are affine combinations of the vertices, so the two maps
//! are exact inverses of each other for any planar field:
//!
//! - vertex → edge: `edge[i] = (vertex[j] + vertex[k]) / 2` for the two
//!   vertices not opposite edge i
//! - edge → vertex: `vertex[i] = edge[j] + edge[k] - edge[i]`

use crate::error::{check_len, QuantityError};

/// Edge-midpoint values of one triangle from its vertex values.
#[inline(always)]
pub fn edges_from_vertices(v: [f64; 3]) -> [f64; 3] {
    [
        0.5 * (v[1] + v[2]),
        0.5 * (v[2] + v[0]),
        0.5 * (v[0] + v[1]),
    ]
}

/// Vertex values of one triangle from its edge-midpoint values.
#[inline(always)]
pub fn vertices_from_edges(e: [f64; 3]) -> [f64; 3] {
    [
        e[1] + e[2] - e[0],
        e[2] + e[0] - e[1],
        e[0] + e[1] - e[2],
    ]
}

/// Overwrite all edge values from the vertex values.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] if the two arrays differ in
/// length or are not a multiple of three.
pub fn interpolate_from_vertices_to_edges(
    vertex_values: &[f64],
    edge_values: &mut [f64],
) -> Result<(), QuantityError> {
    check_len("edge_values", edge_values.len(), vertex_values.len())?;
    check_len(
        "vertex_values",
        vertex_values.len(),
        3 * (vertex_values.len() / 3),
    )?;

    for (v, e) in vertex_values.chunks_exact(3).zip(edge_values.chunks_exact_mut(3)) {
        e.copy_from_slice(&edges_from_vertices([v[0], v[1], v[2]]));
    }
    Ok(())
}

/// Overwrite all vertex values from the edge values.
///
/// Exact inverse of [`interpolate_from_vertices_to_edges`] up to floating
/// point rounding.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] on length disagreement.
pub fn interpolate_from_edges_to_vertices(
    vertex_values: &mut [f64],
    edge_values: &[f64],
) -> Result<(), QuantityError> {
    check_len("edge_values", edge_values.len(), vertex_values.len())?;
    check_len(
        "vertex_values",
        vertex_values.len(),
        3 * (vertex_values.len() / 3),
    )?;

    for (v, e) in vertex_values.chunks_exact_mut(3).zip(edge_values.chunks_exact(3)) {
        v.copy_from_slice(&vertices_from_edges([e[0], e[1], e[2]]));
    }
    Ok(())
}
