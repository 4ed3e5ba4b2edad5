//! Receiver parallel to the emitter (BR 187 equation A4).

use crate::support::view_factor::orientation::{CornerRelation, corner_via};

/// Receiver plane parallel to the emitter, separated along the normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parallel;

impl CornerRelation for Parallel {
    fn corner(&self, width: f64, height: f64, separation: f64) -> f64 {
        corner_via(width, height, separation, |x, y| {
            let root_x = (1. + x.powi(2)).sqrt();
            let root_y = (1. + y.powi(2)).sqrt();
            x / root_x * (y / root_x).atan() + y / root_y * (x / root_y).atan()
        })
    }
}
