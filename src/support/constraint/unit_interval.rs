mod closed;
mod lower_open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use closed::UnitInterval;
pub use lower_open::UnitIntervalLowerOpen;

/// Supplies 0 and 1 for types used with the unit interval constraints.
///
/// Implementations must satisfy `zero() ≤ one()` under the type's `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
