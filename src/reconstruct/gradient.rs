//! Planar gradient reconstruction from neighbouring centroid values.
//!
//! Each triangle gets the coefficients (a, b) of the local planar
//! approximation `q(x, y) = q_c + a*(x - x_c) + b*(y - y_c)`. The fit uses
//! the surrogate-neighbour table, which substitutes the triangle itself for
//! missing neighbours, so boundary triangles degrade gracefully:
//!
//! - boundary count 0 or 1: three-point planar fit through the surrogate
//!   neighbours' centroids
//! - boundary count 2: one-dimensional fit along the line to the single
//!   true neighbour, orthogonal component zero
//! - boundary count 3: gradient left untouched (the caller keeps these
//!   buffers zeroed for a first-order fallback)

use crate::error::QuantityError;
use crate::mesh::TriangleTopology;
use crate::quantity::QuantityField;

/// Fit a plane through three (x, y, q) points and return its slope (a, b).
///
/// Cramer's rule on the 2×2 system of centroid differences. No conditioning
/// check is applied to the determinant; a near-degenerate point set yields a
/// poorly conditioned gradient. Structurally coincident points are rejected
/// by the caller before this runs.
#[inline(always)]
fn gradient3(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    q0: f64,
    q1: f64,
    q2: f64,
) -> (f64, f64) {
    let det = (y2 - y0) * (x1 - x0) - (y1 - y0) * (x2 - x0);

    let a = ((y2 - y0) * (q1 - q0) - (y1 - y0) * (q2 - q0)) / det;
    let b = ((x1 - x0) * (q2 - q0) - (x2 - x0) * (q1 - q0)) / det;
    (a, b)
}

/// Fit a 1-D gradient along the segment between two (x, y, q) points.
///
/// The slope is aligned with the segment direction; the orthogonal component
/// is implicitly zero.
#[inline(always)]
fn gradient2(x0: f64, y0: f64, x1: f64, y1: f64, q0: f64, q1: f64) -> (f64, f64) {
    let xd = x1 - x0;
    let yd = y1 - y0;
    let d2 = xd * xd + yd * yd;
    let dq = q1 - q0;

    (xd * dq / d2, yd * dq / d2)
}

/// Compute the planar gradient (a, b) for every triangle.
///
/// Writes `field.x_gradient` / `field.y_gradient`. Fully isolated triangles
/// (boundary count 3) are skipped, leaving whatever the caller stored there;
/// pre-zeroed buffers give the first-order fallback.
///
/// # Errors
/// Returns [`QuantityError::DegenerateTopology`] if a triangle's surrogate
/// slots repeat where a three-point fit is required, or if a triangle with
/// exactly one true neighbour has all surrogate slots pointing at itself.
/// The whole batch is aborted; partial gradient output must not be trusted.
pub fn compute_gradients(
    topology: &TriangleTopology,
    field: &mut QuantityField,
) -> Result<(), QuantityError> {
    field.check_against(topology)?;

    let centroids = &topology.centroids;
    let q = &field.centroid_values;

    for k in 0..topology.n_triangles {
        match topology.number_of_boundaries[k] {
            0 | 1 => {
                // Two or three true neighbours: three-point planar fit
                let [k0, k1, k2] = topology.surrogate_neighbours[k];
                if k0 == k1 || k1 == k2 {
                    return Err(QuantityError::DegenerateTopology { triangle: k });
                }

                let (x0, y0) = centroids[k0];
                let (x1, y1) = centroids[k1];
                let (x2, y2) = centroids[k2];

                let (a, b) = gradient3(x0, y0, x1, y1, x2, y2, q[k0], q[k1], q[k2]);
                field.x_gradient[k] = a;
                field.y_gradient[k] = b;
            }
            2 => {
                // One true neighbour: first differing surrogate slot
                let k0 = topology.surrogate_neighbours[k]
                    .iter()
                    .copied()
                    .find(|&n| n != k)
                    .ok_or(QuantityError::DegenerateTopology { triangle: k })?;

                let (x0, y0) = centroids[k0];
                let (x1, y1) = centroids[k];

                let (a, b) = gradient2(x0, y0, x1, y1, q[k0], q[k]);
                field.x_gradient[k] = a;
                field.y_gradient[k] = b;
            }
            // No true neighbours: first order, gradient left untouched
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_gradient3_exact_plane() {
        // q = 2 + 3x - y sampled at three points
        let q = |x: f64, y: f64| 2.0 + 3.0 * x - y;
        let (a, b) = gradient3(
            0.0,
            0.0,
            1.0,
            0.0,
            0.0,
            1.0,
            q(0.0, 0.0),
            q(1.0, 0.0),
            q(0.0, 1.0),
        );
        assert!((a - 3.0).abs() < TOL);
        assert!((b + 1.0).abs() < TOL);
    }

    #[test]
    fn test_gradient2_along_x() {
        let (a, b) = gradient2(0.0, 0.0, 2.0, 0.0, 1.0, 5.0);
        assert!((a - 2.0).abs() < TOL);
        assert!(b.abs() < TOL);
    }

    #[test]
    fn test_gradient2_oblique() {
        // Direction (1, 1)/sqrt(2), dq = 2 over distance sqrt(2):
        // slope magnitude sqrt(2), components (1, 1)
        let (a, b) = gradient2(0.0, 0.0, 1.0, 1.0, 0.0, 2.0);
        assert!((a - 1.0).abs() < TOL);
        assert!((b - 1.0).abs() < TOL);
    }

    #[test]
    fn test_linear_field_recovered_on_interior() {
        let (topo, _) = TriangleTopology::rectangular(0.0, 1.0, 0.0, 1.0, 4, 4);
        let mut field = QuantityField::new(topo.n_triangles);
        field.set_from_function(&topo, |x, y| 1.0 + 2.0 * x + 3.0 * y);

        compute_gradients(&topo, &mut field).unwrap();

        for k in 0..topo.n_triangles {
            if topo.number_of_boundaries[k] == 0 {
                assert!(
                    (field.x_gradient[k] - 2.0).abs() < 1e-10,
                    "triangle {}: a = {}",
                    k,
                    field.x_gradient[k]
                );
                assert!(
                    (field.y_gradient[k] - 3.0).abs() < 1e-10,
                    "triangle {}: b = {}",
                    k,
                    field.y_gradient[k]
                );
            }
        }
    }

    #[test]
    fn test_isolated_triangle_left_untouched() {
        let centroids = vec![(1.0 / 3.0, 1.0 / 3.0)];
        let verts = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let topo =
            TriangleTopology::from_parts(centroids, verts, vec![[None; 3]]).unwrap();

        let mut field = QuantityField::from_centroid_values(vec![7.0]);
        field.x_gradient[0] = 0.0;
        field.y_gradient[0] = 0.0;

        compute_gradients(&topo, &mut field).unwrap();
        assert_eq!(field.x_gradient[0], 0.0);
        assert_eq!(field.y_gradient[0], 0.0);
    }

    #[test]
    fn test_degenerate_surrogates_rejected() {
        // Two triangles that both claim the other across every edge:
        // surrogate slots repeat, which must abort the batch.
        let centroids = vec![(0.0, 0.0), (1.0, 0.0)];
        let verts = vec![(0.0, 0.0); 6];
        let neighbours = vec![[Some(1), Some(1), None], [Some(0), Some(0), None]];
        let topo = TriangleTopology::from_parts(centroids, verts, neighbours).unwrap();

        let mut field = QuantityField::new(2);
        let err = compute_gradients(&topo, &mut field).unwrap_err();
        assert_eq!(err, QuantityError::DegenerateTopology { triangle: 0 });
    }

    #[test]
    fn test_two_point_path_on_corner_triangles() {
        // 1x1 rectangle: both triangles have exactly one true neighbour
        let (topo, _) = TriangleTopology::rectangular(0.0, 1.0, 0.0, 1.0, 1, 1);
        let mut field = QuantityField::from_centroid_values(vec![1.0, 2.0]);

        compute_gradients(&topo, &mut field).unwrap();

        // Gradient must point from the lower triangle's centroid towards the
        // upper one's, scaled by dq / |d|^2
        let (x0, y0) = topo.centroid(1);
        let (x1, y1) = topo.centroid(0);
        let d2 = (x1 - x0).powi(2) + (y1 - y0).powi(2);
        let expected_a = (x1 - x0) * (1.0 - 2.0) / d2;
        let expected_b = (y1 - y0) * (1.0 - 2.0) / d2;

        assert!((field.x_gradient[0] - expected_a).abs() < TOL);
        assert!((field.y_gradient[0] - expected_b).abs() < TOL);
    }
}
