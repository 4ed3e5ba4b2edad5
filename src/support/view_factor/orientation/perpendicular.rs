//! Receiver perpendicular to the emitter (BR 187 equation A5).

use crate::support::view_factor::orientation::{CornerRelation, corner_via};

/// Receiver plane perpendicular to the emitter.
///
/// The separation is measured in the emitter's plane, along its width axis,
/// to the receiver's plane. Unlike [`Parallel`](super::Parallel), the
/// relation is not symmetric in width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perpendicular;

impl CornerRelation for Perpendicular {
    fn corner(&self, width: f64, height: f64, separation: f64) -> f64 {
        corner_via(width, height, separation, |x, y| {
            let root_y = (1. + y.powi(2)).sqrt();
            x.atan() - (x / root_y).atan() / root_y
        })
    }
}
