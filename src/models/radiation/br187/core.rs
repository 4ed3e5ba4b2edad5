//! BR 187 external fire spread checks.
//!
//! A facade radiates towards a notional boundary. Its mirror image across
//! the boundary is the receiver, so the separation between emitter and
//! receiver is twice the boundary distance. The incident heat flux at the
//! receiver must not exceed the critical heat flux, which limits the
//! unprotected fraction of the facade.

mod config;
mod error;
mod facade;
mod given_area;
mod given_distance;

#[cfg(test)]
mod test_support;

pub use config::Br187Config;
pub use error::Br187Error;
pub use facade::{Assessment, Facade};

use std::marker::PhantomData;

use uom::si::f64::{Length, Ratio};

use crate::support::{
    constraint::{Constrained, NonNegative},
    view_factor::CornerRelation,
};

use given_area::given_unprotected_area;
use given_distance::given_boundary_distance;

/// Entry point for BR 187 checks.
///
/// The receiver orientation is fixed by the `Relation` generic.
pub struct Br187<Relation> {
    _relation: PhantomData<Relation>,
}

impl<Relation: CornerRelation + Default> Br187<Relation> {
    /// Calculates the maximum unprotected area at a boundary distance.
    ///
    /// # Errors
    ///
    /// Returns [`Br187Error`] if the configuration is invalid or the view
    /// factor cannot be evaluated.
    pub fn given_boundary_distance(
        facade: &Facade,
        boundary_distance: Constrained<Length, NonNegative>,
        config: &Br187Config,
    ) -> Result<Assessment, Br187Error> {
        given_boundary_distance(&Relation::default(), facade, boundary_distance, config)
    }

    /// Calculates the minimum boundary distance for an unprotected area.
    ///
    /// # Errors
    ///
    /// Returns [`Br187Error`] if no separation in the search bracket gives
    /// the required view factor, or an input is invalid.
    pub fn given_unprotected_area(
        facade: &Facade,
        unprotected_area: Ratio,
        config: &Br187Config,
    ) -> Result<Assessment, Br187Error> {
        given_unprotected_area(&Relation::default(), facade, unprotected_area, config)
    }
}
