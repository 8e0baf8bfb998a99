//! Node averaging of per-triangle vertex values.
//!
//! Vertex values are stored per triangle, so a mesh node shared by several
//! triangles carries one value per incident triangle. This pass collapses
//! them to a single averaged value per node.

use crate::error::{check_len, QuantityError};

/// Average the vertex values sharing each mesh node.
///
/// `vertex_value_indices` lists flat vertex slots (`triangle*3 + local`)
/// grouped by node in node order; `triangles_per_node[node]` gives each
/// group's run length. Nodes are emitted in grouping order: sum the group,
/// divide by its length, store, move on.
///
/// The grouping itself is trusted: run lengths that do not match the actual
/// group boundaries produce wrong averages, not an error.
///
/// # Errors
/// Returns [`QuantityError::SizeMismatch`] if `node_values` disagrees with
/// the node count or the run lengths do not sum to the index count.
pub fn average_vertex_values(
    vertex_value_indices: &[usize],
    triangles_per_node: &[usize],
    vertex_values: &[f64],
    node_values: &mut [f64],
) -> Result<(), QuantityError> {
    check_len("node_values", node_values.len(), triangles_per_node.len())?;
    check_len(
        "vertex_value_indices",
        vertex_value_indices.len(),
        triangles_per_node.iter().sum(),
    )?;

    let mut current_node = 0;
    let mut count = 0usize;
    let mut total = 0.0;

    for &index in vertex_value_indices {
        total += vertex_values[index];
        count += 1;

        if triangles_per_node[current_node] == count {
            node_values[current_node] = total / count as f64;

            total = 0.0;
            count = 0;
            current_node += 1;
        }
    }

    Ok(())
}
