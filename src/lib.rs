//! # fv-rs
//!
//! Quantity-reconstruction and flux-limiting kernel for finite-volume
//! solvers on unstructured triangular meshes.
//!
//! This crate provides the per-timestep building blocks that sit between a
//! mesh and the flux computation of an explicit/semi-implicit solver:
//! - Planar gradient reconstruction from neighbouring centroid values
//! - Extrapolation of centroid values to vertices and edge midpoints
//! - A family of TVD slope limiters keeping reconstructed values monotone
//! - Exact vertex ↔ edge interpolation maps
//! - The explicit/semi-implicit centroid update
//! - Backup/blend utilities for multistage time stepping
//! - Node averaging of per-triangle vertex values
//!
//! All operations are bulk sweeps over flat per-triangle arrays, single
//! threaded and allocation free; each call either completes over every
//! triangle or reports a typed [`QuantityError`].
//!
//! # Example
//! ```
//! use fv_rs::{QuantityField, ReconstructionConfig, TriangleTopology, update};
//!
//! let (topology, _) = TriangleTopology::rectangular(0.0, 1.0, 0.0, 1.0, 8, 8);
//! let mut field = QuantityField::new(topology.n_triangles);
//! field.set_from_function(&topology, |x, y| x + y);
//!
//! // Reconstruct a limited piecewise-linear representation
//! ReconstructionConfig::new().reconstruct(&topology, &mut field)?;
//!
//! // ... external flux computation fills the update accumulators ...
//! update(0.01, &mut field)?;
//! # Ok::<(), fv_rs::QuantityError>(())
//! ```

pub mod average;
pub mod config;
pub mod error;
pub mod limiter;
pub mod mesh;
pub mod quantity;
pub mod reconstruct;
pub mod time;

// Re-export main types for convenience
pub use average::average_vertex_values;
pub use config::ReconstructionConfig;
pub use error::QuantityError;
pub use limiter::{
    apply_limiter, compute_centroid_extrema, limit_edges_by_all_neighbours,
    limit_edges_by_neighbour, limit_gradient_by_neighbour, limit_old,
    limit_vertices_by_all_neighbours, LimiterKind,
};
pub use mesh::{NodeAverageTables, TriangleTopology};
pub use quantity::QuantityField;
pub use reconstruct::{
    compute_gradients, extrapolate_first_order, extrapolate_from_gradient,
    extrapolate_second_order, interpolate_from_edges_to_vertices,
    interpolate_from_vertices_to_edges,
};
pub use time::update;
