//! View factors from a rectangular emitter to a receiver point.
//!
//! A [`Geometry`] places a receiver point relative to a rectangular
//! [`Emitter`] at a given separation. The view factor is evaluated by
//! decomposing the receiver position into corner cases (see [`decompose`])
//! and applying a [`CornerRelation`] for the receiver's orientation:
//!
//! - [`Parallel`]: receiver plane parallel to the emitter.
//! - [`Perpendicular`]: receiver plane perpendicular to the emitter.
//!
//! [`solve_geometry`] inverts the evaluation for one [`Parameter`].
//!
//! # Example
//!
//! ```
//! use fse_models::support::view_factor::{Emitter, Geometry, phi_parallel};
//! use uom::si::{f64::Length, length::meter};
//!
//! let emitter = Emitter::new(Length::new::<meter>(10.0), Length::new::<meter>(10.0)).unwrap();
//! let geometry = Geometry::new(emitter, emitter.centre(), Length::new::<meter>(4.0)).unwrap();
//!
//! let phi = phi_parallel(&geometry).unwrap();
//! assert!((phi.value - 0.659_142_9).abs() < 1e-6);
//! ```

pub mod decompose;
mod error;
mod factor;
mod functional;
mod geometry;
mod inverse;
pub mod orientation;

pub use error::ViewFactorError;
pub use factor::ViewFactor;
pub use functional::{phi_parallel, phi_perpendicular, view_factor};
pub use geometry::{Emitter, Geometry, Parameter, Receiver};
pub use inverse::{SolveGeometryError, solve_geometry};
pub use orientation::{CornerRelation, Parallel, Perpendicular};
