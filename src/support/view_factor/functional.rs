use tracing::{trace, warn};
use uom::si::length::meter;

use super::{
    CornerRelation, Geometry, Parallel, Perpendicular, ViewFactor, ViewFactorError,
    decompose::decompose,
};

/// Largest excursion outside [0, 1] attributed to floating-point cancellation.
const ROUNDING_TOLERANCE: f64 = 1e-12;

/// Calculate the view factor for a geometry under a corner relation.
///
/// The receiver is decomposed into corner-aligned sub-rectangles, the
/// relation is evaluated for each, and the results are combined with their
/// signs.
///
/// # Errors
///
/// Returns `Err` if the geometry cannot be decomposed (non-finite
/// coordinates) or if the combined value lies outside [0, 1] by more than
/// rounding noise.
pub fn view_factor(
    relation: &impl CornerRelation,
    geometry: &Geometry,
) -> Result<ViewFactor, ViewFactorError> {
    let emitter = geometry.emitter();
    let receiver = geometry.receiver();
    let separation = geometry.separation().get::<meter>();

    let decomposition = decompose(
        emitter.width().get::<meter>(),
        emitter.height().get::<meter>(),
        receiver.x.get::<meter>(),
        receiver.y.get::<meter>(),
    )?;

    let value = decomposition.sum(|width, height| relation.corner(width, height, separation));
    trace!(
        position = ?decomposition.position(),
        planes = decomposition.planes().len(),
        value,
        "view factor evaluated"
    );

    checked(value)
}

/// View factor for a receiver parallel to the emitter.
///
/// # Errors
///
/// See [`view_factor`].
pub fn phi_parallel(geometry: &Geometry) -> Result<ViewFactor, ViewFactorError> {
    view_factor(&Parallel, geometry)
}

/// View factor for a receiver perpendicular to the emitter.
///
/// # Errors
///
/// See [`view_factor`].
pub fn phi_perpendicular(geometry: &Geometry) -> Result<ViewFactor, ViewFactorError> {
    view_factor(&Perpendicular, geometry)
}

/// Accept a combined view factor, absorbing cancellation noise at the bounds.
fn checked(value: f64) -> Result<ViewFactor, ViewFactorError> {
    let clamped = if (-ROUNDING_TOLERANCE..0.0).contains(&value) {
        0.0
    } else if value > 1.0 && value <= 1.0 + ROUNDING_TOLERANCE {
        1.0
    } else {
        value
    };

    ViewFactor::new(clamped).map_err(|_| {
        warn!(value, "view factor outside [0, 1]");
        ViewFactorError::OutOfRange { value }
    })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::f64::Length;

    use super::*;
    use crate::support::view_factor::{Emitter, Receiver};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn geometry(width: f64, height: f64, x: f64, y: f64, separation: f64) -> Geometry {
        let emitter = Emitter::new(m(width), m(height)).unwrap();
        Geometry::new(emitter, Receiver::new(m(x), m(y)), m(separation)).unwrap()
    }

    fn parallel(width: f64, height: f64, x: f64, y: f64, separation: f64) -> f64 {
        phi_parallel(&geometry(width, height, x, y, separation))
            .unwrap()
            .value
    }

    fn perpendicular(width: f64, height: f64, x: f64, y: f64, separation: f64) -> f64 {
        phi_perpendicular(&geometry(width, height, x, y, separation))
            .unwrap()
            .value
    }

    /// Midpoint-rule integral of the parallel point kernel over the emitter.
    fn parallel_numeric(width: f64, height: f64, x: f64, y: f64, separation: f64) -> f64 {
        let n = 200;
        let dx = width / f64::from(n);
        let dy = height / f64::from(n);
        let s2 = separation * separation;

        let mut sum = 0.0;
        for i in 0..n {
            let u = (f64::from(i) + 0.5) * dx - x;
            for j in 0..n {
                let v = (f64::from(j) + 0.5) * dy - y;
                let r2 = s2 + u * u + v * v;
                sum += s2 / (PI * r2 * r2);
            }
        }
        sum * dx * dy
    }

    #[test]
    fn parallel_reference_values() {
        assert_relative_eq!(parallel(10.0, 10.0, 0.0, 0.0, 10.0), 0.138_531_606_0, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 2.0, 0.0, 10.0), 0.163_869_454_5, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 5.0, 5.0, 10.0), 0.239_456_470_5, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 2.0, 2.0, 10.0), 0.195_452_334_9, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 5.0, 15.0, 10.0), 0.084_353_664_4, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 20.0, 15.0, 10.0), 0.019_560_702_1, epsilon = 1e-8);
        assert_relative_eq!(parallel(10.0, 10.0, 15.0, 0.0, 10.0), 0.068_581_765_4, epsilon = 1e-8);
    }

    #[test]
    fn perpendicular_reference_values() {
        assert_relative_eq!(perpendicular(10.0, 10.0, 0.0, 0.0, 10.0), 0.055_734_197_0, epsilon = 1e-8);
        assert_relative_eq!(perpendicular(10.0, 10.0, 2.0, 0.0, 10.0), 0.065_058_163_88, epsilon = 1e-8);
        assert_relative_eq!(perpendicular(10.0, 10.0, 0.0, 2.0, 10.0), 0.046_564_687_70, epsilon = 1e-8);
        assert_relative_eq!(perpendicular(10.0, 10.0, 5.0, -10.0, 10.0), 0.045_174_338_14, epsilon = 1e-8);
        assert_relative_eq!(perpendicular(10.0, 10.0, 5.0, 20.0, 10.0), 0.045_174_338_14, epsilon = 1e-8);
    }

    #[test]
    fn perpendicular_depends_on_axis() {
        // Transposing the panel changes which extent runs along the receiver plane.
        let along = perpendicular(10.0, 10.0, 2.0, 0.0, 10.0);
        let across = perpendicular(10.0, 10.0, 0.0, 2.0, 10.0);
        assert!(along > across);
    }

    #[test]
    fn centre_of_large_panel() {
        // 10 m square panel at 4 m: the BR 187 worked case.
        assert_relative_eq!(parallel(10.0, 10.0, 5.0, 5.0, 4.0), 0.659_142_941_5, epsilon = 1e-8);
    }

    #[test]
    fn mirrored_receivers_agree() {
        let (width, height, separation) = (8.0, 5.0, 3.0);
        for (x, y) in [(1.0, 2.0), (-3.0, 1.0), (-2.0, -4.0), (11.0, 7.5), (0.0, 6.0)] {
            for evaluate in [parallel, perpendicular] {
                let base = evaluate(width, height, x, y, separation);
                assert_relative_eq!(evaluate(width, height, width - x, y, separation), base, epsilon = 1e-12);
                assert_relative_eq!(evaluate(width, height, x, height - y, separation), base, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn values_stay_within_unit_interval() {
        let coords = [-7.5, -2.0, 0.0, 1.5, 3.0, 6.0, 10.0, 12.0, 25.0];
        for x in coords {
            for y in coords {
                for separation in [0.1, 1.0, 5.0, 50.0] {
                    let g = geometry(10.0, 6.0, x, y, separation);
                    for phi in [phi_parallel(&g), phi_perpendicular(&g)] {
                        let value = phi.expect("any finite receiver is valid").value;
                        assert!((0.0..=1.0).contains(&value), "{value} at ({x}, {y}, {separation})");
                    }
                }
            }
        }
    }

    #[test]
    fn decreases_with_separation_for_facing_receivers() {
        let separations = [0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
        for (x, y) in [(0.0, 0.0), (2.0, 0.0), (5.0, 5.0), (10.0, 3.0), (7.0, 10.0)] {
            for evaluate in [parallel, perpendicular] {
                let values: Vec<f64> = separations
                    .iter()
                    .map(|&s| evaluate(10.0, 10.0, x, y, s))
                    .collect();
                assert!(
                    values.windows(2).all(|pair| pair[0] > pair[1]),
                    "not decreasing at ({x}, {y}): {values:?}"
                );
            }
        }
    }

    #[test]
    fn agrees_with_numerical_integration() {
        for (width, height, x, y, separation) in [
            (10.0, 10.0, 5.0, 15.0, 10.0),
            (10.0, 10.0, 20.0, 15.0, 10.0),
            (6.0, 3.0, -2.0, 7.0, 4.0),
            (6.0, 3.0, 3.0, 1.5, 4.0),
            (10.0, 4.0, 13.0, -1.0, 3.0),
        ] {
            assert_relative_eq!(
                parallel(width, height, x, y, separation),
                parallel_numeric(width, height, x, y, separation),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn rounding_noise_is_absorbed() {
        assert_relative_eq!(checked(-1e-14).unwrap().value, 0.0);
        assert_relative_eq!(checked(1.0 + 1e-14).unwrap().value, 1.0);
        assert_relative_eq!(checked(0.25).unwrap().value, 0.25);
    }

    #[test]
    fn inconsistent_values_are_rejected() {
        assert_eq!(
            checked(-0.01),
            Err(ViewFactorError::OutOfRange { value: -0.01 })
        );
        assert_eq!(checked(1.5), Err(ViewFactorError::OutOfRange { value: 1.5 }));
    }

    #[test]
    fn non_finite_receiver_is_an_error() {
        let g = geometry(10.0, 10.0, f64::NAN, 0.0, 5.0);
        assert!(matches!(
            phi_parallel(&g),
            Err(ViewFactorError::Decompose(_))
        ));
    }
}
