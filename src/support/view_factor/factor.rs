use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// The view factor (configuration factor) between an emitter and a receiver point.
///
/// The fraction of radiation leaving the emitter that reaches the receiver,
/// in the interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFactor(Constrained<Ratio, UnitInterval>);

impl ViewFactor {
    /// Create a [`ViewFactor`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`ViewFactor`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for ViewFactor {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
