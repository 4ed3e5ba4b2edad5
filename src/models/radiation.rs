//! Thermal radiation models.
//!
//! - [`ViewFactorModel`]: view factor of a [`Geometry`] for one receiver orientation.
//! - [`br187`]: BR 187 unprotected area and boundary distance checks.
//!
//! [`Geometry`]: crate::support::view_factor::Geometry

pub mod br187;
mod view_factor;

pub use view_factor::ViewFactorModel;
