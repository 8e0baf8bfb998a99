//! Reconstruction configuration.

use crate::error::QuantityError;
use crate::limiter::{apply_limiter, LimiterKind};
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;
use crate::reconstruct::extrapolate_second_order;

/// Parameters of one reconstruction pass.
///
/// `beta` is the limiter safety factor in `(0, 1]`: `beta = 1` keeps the
/// reconstruction as sharp as the TVD envelope allows, smaller values damp
/// it further. Defaults match the usual second-order configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReconstructionConfig {
    /// Limiter safety factor
    pub beta: f64,
    /// Limiter variant applied after extrapolation
    pub limiter: LimiterKind,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            beta: 1.0,
            limiter: LimiterKind::EdgesByAllNeighbours,
        }
    }
}

impl ReconstructionConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limiter safety factor.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the limiter variant.
    pub fn with_limiter(mut self, limiter: LimiterKind) -> Self {
        self.limiter = limiter;
        self
    }

    /// Run one full reconstruction pass: second-order extrapolation
    /// followed by the configured limiter.
    ///
    /// # Errors
    /// Propagates failures from the gradient stage and size checks.
    pub fn reconstruct(
        &self,
        topology: &TriangleTopology,
        field: &mut QuantityField,
    ) -> Result<(), QuantityError> {
        extrapolate_second_order(topology, field)?;
        apply_limiter(self.limiter, topology, self.beta, field)
    }
}
