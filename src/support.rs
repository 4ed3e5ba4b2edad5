//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`view_factor`]: Configuration factors between a rectangular emitter and a receiver point.

pub mod constraint;
pub mod view_factor;
