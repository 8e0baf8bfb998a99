//! Extrapolation from centroid values and gradients to vertices and edges.

use crate::error::QuantityError;
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;
use crate::reconstruct::gradient::compute_gradients;
use crate::reconstruct::interpolate::edges_from_vertices;

/// Project each centroid value along its planar gradient to the triangle's
/// three vertices, then average vertex pairs onto the edge midpoints.
///
/// `vertex_value[i] = q_c + a*(x_i - x_c) + b*(y_i - y_c)`.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] if the field does not match the
/// topology. Pure otherwise.
pub fn extrapolate_from_gradient(
    topology: &TriangleTopology,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    for k in 0..topology.n_triangles {
        let (xc, yc) = topology.centroid(k);
        let verts = topology.triangle_vertices(k);
        let qc = field.centroid_values[k];
        let a = field.x_gradient[k];
        let b = field.y_gradient[k];

        let base = 3 * k;
        let mut v = [0.0; 3];
        for i in 0..3 {
            let (x, y) = verts[i];
            v[i] = qc + a * (x - xc) + b * (y - yc);
        }
        field.vertex_values[base..base + 3].copy_from_slice(&v);
        field.edge_values[base..base + 3].copy_from_slice(&edges_from_vertices(v));
    }

    Ok(())
}

/// First-order reconstruction: copy the centroid value onto all vertex and
/// edge slots, leaving the gradients alone.
pub fn extrapolate_first_order(field: &mut QuantityField) -> Result<(), QuantityError> {
    field.check_sizes()?;

    for k in 0..field.n_triangles {
        let qc = field.centroid_values[k];
        let base = 3 * k;
        for i in 0..3 {
            field.vertex_values[base + i] = qc;
            field.edge_values[base + i] = qc;
        }
    }
    Ok(())
}

/// Second-order reconstruction: zero the gradient buffers, compute fresh
/// gradients and extrapolate. Zeroing first keeps fully isolated triangles
/// (which the gradient pass skips) at the first-order fallback.
///
/// # Errors
/// Propagates [`QuantityError::DegenerateTopology`] from the gradient pass;
/// vertex and edge values are untouched in that case.
pub fn extrapolate_second_order(
    topology: &TriangleTopology,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    field.x_gradient.fill(0.0);
    field.y_gradient.fill(0.0);
    compute_gradients(topology, field)?;
    extrapolate_from_gradient(topology, field)
}
