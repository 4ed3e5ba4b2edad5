use std::{cmp::Ordering, marker::PhantomData};

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// View factors and unprotected area fractions live here.
///
/// # Examples
///
/// ```
/// use fse_models::support::constraint::{Constrained, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let phi = UnitInterval::new(0.1385).unwrap();
/// assert_eq!(phi.into_inner(), 0.1385);
///
/// let area = Constrained::<Ratio, UnitInterval>::new(Ratio::new::<ratio>(0.5)).unwrap();
/// assert_eq!(area.as_ref().get::<percent>(), 50.0);
///
/// assert!(UnitInterval::new(1.0001).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn endpoints_are_inside() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(1.0)).is_ok());
        assert_eq!(UnitInterval::one::<f64>().into_inner(), 1.0);
    }

    #[test]
    fn rounding_noise_is_still_rejected() {
        assert_eq!(
            UnitInterval::new(-1e-15),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(UnitInterval::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
