//! Structure-of-arrays storage for one conserved quantity.
//!
//! The centroid values are the authoritative state; vertex and edge values
//! are derived representations overwritten by every reconstruction pass.
//! Update accumulators are populated externally per step and consumed by
//! [`crate::update`]. All buffers are flat `Vec<f64>` of length `N` or `3N`,
//! owned by the caller for the duration of each kernel call.

use crate::error::{check_len, QuantityError};
use crate::mesh::TriangleTopology;

/// Per-triangle field arrays for one scalar quantity.
///
/// Layout: per-triangle slots for vertex/edge values live at
/// `3*k .. 3*k+3`. Constructors guarantee consistent lengths; since the
/// buffers are public, batch operations re-check sizes before any numeric
/// work.
#[derive(Clone, Debug)]
pub struct QuantityField {
    /// Conserved value at each triangle centroid (length N)
    pub centroid_values: Vec<f64>,

    /// Reconstructed value at each triangle vertex (length 3N)
    pub vertex_values: Vec<f64>,

    /// Reconstructed value at each edge midpoint (length 3N)
    pub edge_values: Vec<f64>,

    /// x-component of the planar gradient (length N)
    pub x_gradient: Vec<f64>,

    /// y-component of the planar gradient (length N)
    pub y_gradient: Vec<f64>,

    /// Explicit source-term accumulator (length N)
    pub explicit_update: Vec<f64>,

    /// Semi-implicit source-term accumulator (length N); consumed and
    /// zeroed by [`crate::update`]
    pub semi_implicit_update: Vec<f64>,

    /// Snapshot of centroid values for multistage blending (length N)
    pub centroid_backup_values: Vec<f64>,

    /// Number of triangles
    pub n_triangles: usize,
}

impl QuantityField {
    /// Create a zero-initialized field for `n_triangles` triangles.
    pub fn new(n_triangles: usize) -> Self {
        Self {
            centroid_values: vec![0.0; n_triangles],
            vertex_values: vec![0.0; 3 * n_triangles],
            edge_values: vec![0.0; 3 * n_triangles],
            x_gradient: vec![0.0; n_triangles],
            y_gradient: vec![0.0; n_triangles],
            explicit_update: vec![0.0; n_triangles],
            semi_implicit_update: vec![0.0; n_triangles],
            centroid_backup_values: vec![0.0; n_triangles],
            n_triangles,
        }
    }

    /// Create a field from existing centroid values.
    pub fn from_centroid_values(centroid_values: Vec<f64>) -> Self {
        let n = centroid_values.len();
        let mut field = Self::new(n);
        field.centroid_values = centroid_values;
        field
    }

    /// Sample a function of (x, y) at every centroid.
    pub fn set_from_function<F>(&mut self, topology: &TriangleTopology, f: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        for (k, value) in self.centroid_values.iter_mut().enumerate() {
            let (x, y) = topology.centroid(k);
            *value = f(x, y);
        }
    }

    /// Snapshot centroid values into the backup buffer.
    pub fn backup_centroids(&mut self) {
        self.centroid_backup_values.copy_from_slice(&self.centroid_values);
    }

    /// Blend centroid values with the backup: `q = a*q + b*backup`.
    ///
    /// Used by multistage time-stepping schemes to form convex combinations
    /// across stages; `a = 1, b = 0` is a no-op and `a = 0, b = 1` restores
    /// the snapshot exactly.
    pub fn saxpy_centroids(&mut self, a: f64, b: f64) {
        for (q, backup) in self
            .centroid_values
            .iter_mut()
            .zip(self.centroid_backup_values.iter())
        {
            *q = a * *q + b * *backup;
        }
    }

    /// Maximum absolute centroid value.
    pub fn max_abs_centroid(&self) -> f64 {
        self.centroid_values
            .iter()
            .map(|&x| x.abs())
            .fold(0.0, f64::max)
    }

    /// Verify every buffer still has its constructed length.
    pub(crate) fn check_sizes(&self) -> Result<(), QuantityError> {
        let n = self.n_triangles;
        check_len("centroid_values", self.centroid_values.len(), n)?;
        check_len("vertex_values", self.vertex_values.len(), 3 * n)?;
        check_len("edge_values", self.edge_values.len(), 3 * n)?;
        check_len("x_gradient", self.x_gradient.len(), n)?;
        check_len("y_gradient", self.y_gradient.len(), n)?;
        check_len("explicit_update", self.explicit_update.len(), n)?;
        check_len("semi_implicit_update", self.semi_implicit_update.len(), n)?;
        check_len(
            "centroid_backup_values",
            self.centroid_backup_values.len(),
            n,
        )?;
        Ok(())
    }

    /// Verify the field matches the topology's triangle count and that all
    /// buffers are consistent.
    pub(crate) fn check_against(&self, topology: &TriangleTopology) -> Result<(), QuantityError> {
        check_len("quantity_field", self.n_triangles, topology.n_triangles)?;
        self.check_sizes()
    }
}
