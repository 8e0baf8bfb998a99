//! Error types for the reconstruction and update kernels.

use thiserror::Error;

/// Errors reported by the quantity kernels.
///
/// Every bulk operation validates array sizes up front and reports the
/// first inconsistency it finds; numeric failures carry the offending
/// triangle index.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// The surrogate-neighbour stencil of a triangle collapsed onto
    /// duplicate points, so no plane (or line) can be fitted through it.
    #[error("Degenerate topology at triangle {triangle}: duplicate stencil points")]
    DegenerateTopology { triangle: usize },

    /// The semi-implicit denominator `1 - dt * s` vanished for a triangle,
    /// so the implicit part of the update has no solution.
    #[error("Semi-implicit update is singular at triangle {triangle}")]
    SingularSemiImplicit { triangle: usize },

    /// An array does not have the length the operation requires.
    #[error("Size mismatch for {name}: expected {expected}, got {actual}")]
    SizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Check an array length against its expected value.
#[inline]
pub(crate) fn check_len(
    name: &'static str,
    actual: usize,
    expected: usize,
) -> Result<(), QuantityError> {
    if actual == expected {
        Ok(())
    } else {
        Err(QuantityError::SizeMismatch {
            name,
            expected,
            actual,
        })
    }
}
