//! Piecewise-linear reconstruction of centroid fields.
//!
//! One reconstruction pass runs gradient computation, extrapolation to
//! vertices and edge midpoints, and (via [`crate::limiter`]) monotonicity
//! limiting. The vertex/edge interpolators are the exact affine maps between
//! the two derived representations.

mod extrapolate;
mod gradient;
mod interpolate;

pub use extrapolate::{extrapolate_first_order, extrapolate_from_gradient, extrapolate_second_order};
pub use gradient::compute_gradients;
pub use interpolate::{
    edges_from_vertices, interpolate_from_edges_to_vertices, interpolate_from_vertices_to_edges,
    vertices_from_edges,
};
