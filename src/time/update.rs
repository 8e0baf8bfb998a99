//! One explicit/semi-implicit update of the centroid values.
//!
//! Explicit source terms have the form `G(q, t)` and advance as
//! `q_next = q + dt * G`. Semi-implicit terms are assumed to factor as
//! `G(q, t) = H(q, t) * q` and advance as `q_next = q / (1 - dt * H)`,
//! which stays stable for stiff decay terms.

use crate::error::QuantityError;
use crate::quantity::QuantityField;

/// Advance the centroid values by one step of size `timestep`.
///
/// Four sweeps over all triangles, in order:
/// 1. Normalize: convert each semi-implicit term from absolute form to the
///    relative rate `H = G / q`; a zero-valued cell cannot support a
///    relative rate, so its term is forced to zero instead of dividing.
/// 2. Implicit half-step: `q /= 1 - dt * H`, checking every denominator.
/// 3. Explicit half-step: `q += dt * explicit_update`.
/// 4. Reset the semi-implicit accumulator to zero; it is single-use and the
///    caller must repopulate it before the next call.
///
/// The implicit sweep finishes (or aborts) before the explicit sweep
/// starts, so a singular denominator anywhere prevents every explicit
/// contribution from being applied.
///
/// # Errors
/// Returns [`QuantityError::SingularSemiImplicit`] naming the first
/// triangle whose denominator vanishes. The centroid values touched before
/// the failure are partially updated and must be discarded by the caller.
pub fn update(timestep: f64, field: &mut QuantityField) -> Result<(), QuantityError> {
    field.check_sizes()?;
    let n = field.n_triangles;

    // Convert semi-implicit terms to relative-rate form
    for k in 0..n {
        let q = field.centroid_values[k];
        if q == 0.0 {
            field.semi_implicit_update[k] = 0.0;
        } else {
            field.semi_implicit_update[k] /= q;
        }
    }

    // Semi-implicit update
    for k in 0..n {
        let denominator = 1.0 - timestep * field.semi_implicit_update[k];
        if denominator == 0.0 {
            return Err(QuantityError::SingularSemiImplicit { triangle: k });
        }
        field.centroid_values[k] /= denominator;
    }

    // Explicit update
    for k in 0..n {
        field.centroid_values[k] += timestep * field.explicit_update[k];
    }

    // Semi-implicit terms are single-use per step
    field.semi_implicit_update.fill(0.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_explicit_update() {
        let mut field = QuantityField::from_centroid_values(vec![1.0, 2.0, 3.0]);
        field.explicit_update = vec![0.5, 0.5, 0.5];

        update(0.1, &mut field).unwrap();

        for (q, expected) in field.centroid_values.iter().zip([1.05, 2.05, 3.05]) {
            assert!((q - expected).abs() < 1e-14);
        }
        assert!(field.semi_implicit_update.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_semi_implicit_decay() {
        // G = H*q with H = -1: one step gives q / (1 + dt)
        let mut field = QuantityField::from_centroid_values(vec![2.0]);
        field.semi_implicit_update = vec![-2.0]; // absolute form: H*q = -1 * 2.0

        update(0.5, &mut field).unwrap();

        assert!((field.centroid_values[0] - 2.0 / 1.5).abs() < 1e-14);
        assert_eq!(field.semi_implicit_update[0], 0.0);
    }

    #[test]
    fn test_zero_mass_cell_never_divides() {
        let mut field = QuantityField::from_centroid_values(vec![0.0, 1.0]);
        field.semi_implicit_update = vec![123.0, 0.0];

        update(0.25, &mut field).unwrap();

        assert_eq!(field.centroid_values[0], 0.0);
        assert_eq!(field.semi_implicit_update, vec![0.0, 0.0]);
    }

    #[test]
    fn test_singular_denominator_reported() {
        // H = 1/dt makes the denominator exactly zero
        let dt = 0.5;
        let mut field = QuantityField::from_centroid_values(vec![1.0, 3.0]);
        field.semi_implicit_update = vec![0.0, 3.0 / dt * 1.0]; // H = 1/dt for cell 1
        field.explicit_update = vec![10.0, 10.0];

        let err = update(dt, &mut field).unwrap_err();
        assert_eq!(err, QuantityError::SingularSemiImplicit { triangle: 1 });

        // No explicit contribution was applied and no NaN/Inf leaked
        assert!(field.centroid_values.iter().all(|q| q.is_finite()));
        assert_eq!(field.centroid_values[0], 1.0);
    }

    #[test]
    fn test_semi_implicit_zeroed_after_step() {
        let mut field = QuantityField::from_centroid_values(vec![4.0]);
        field.semi_implicit_update = vec![1.0];
        update(0.1, &mut field).unwrap();
        assert_eq!(field.semi_implicit_update, vec![0.0]);
    }
}
