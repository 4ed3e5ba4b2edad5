//! Corner view factor relations for the supported receiver orientations.

mod parallel;
mod perpendicular;

use std::f64::consts::PI;

pub use parallel::Parallel;
pub use perpendicular::Perpendicular;

/// Trait for the view factor of a receiver point facing one corner of a
/// rectangular emitter.
pub trait CornerRelation {
    /// Calculate the view factor for a `width` by `height` rectangle with the
    /// receiver opposite one of its corners at `separation`.
    ///
    /// All lengths are in metres. `separation` must be strictly positive.
    fn corner(&self, width: f64, height: f64, separation: f64) -> f64;
}

/// Evaluate a dimensionless corner relation.
///
/// `fn_raw` receives `X = width / separation` and `Y = height / separation`
/// and returns the bracketed term, which is scaled by `1 / 2π`.
#[inline]
pub(crate) fn corner_via(
    width: f64,
    height: f64,
    separation: f64,
    fn_raw: impl Fn(f64, f64) -> f64,
) -> f64 {
    let x = width / separation;
    let y = height / separation;
    fn_raw(x, y) / (2.0 * PI)
}
