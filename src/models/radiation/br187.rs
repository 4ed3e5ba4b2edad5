//! BR 187 external fire spread models.
//!
//! Two [`twine_core::Model`] adapters share the internal `core` module:
//!
//! - [`GivenBoundaryDistance`]: maximum unprotected area at a boundary distance.
//! - [`GivenUnprotectedArea`]: minimum boundary distance for an unprotected area.
//!
//! Both are generic over the receiver orientation ([`Parallel`] or
//! [`Perpendicular`]).
//!
//! # Example
//!
//! ```
//! use fse_models::{
//!     models::radiation::br187::{BoundaryDistanceInput, Facade, GivenBoundaryDistance},
//!     support::{constraint::NonNegative, view_factor::{Emitter, Parallel}},
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{HeatFluxDensity, Length},
//!     heat_flux_density::kilowatt_per_square_meter,
//!     length::meter,
//!     ratio::percent,
//! };
//!
//! let emitter = Emitter::new(Length::new::<meter>(10.0), Length::new::<meter>(10.0)).unwrap();
//! let facade = Facade::centred(
//!     emitter,
//!     HeatFluxDensity::new::<kilowatt_per_square_meter>(84.0),
//! )
//! .unwrap();
//!
//! let model = GivenBoundaryDistance::<Parallel>::default();
//! let assessment = model
//!     .call(&BoundaryDistanceInput {
//!         facade,
//!         boundary_distance: NonNegative::new(Length::new::<meter>(2.0)).unwrap(),
//!     })
//!     .unwrap();
//!
//! let area = assessment.unprotected_area.into_inner().get::<percent>();
//! assert!((area - 22.76).abs() < 0.01);
//! ```
//!
//! [`Parallel`]: crate::support::view_factor::Parallel
//! [`Perpendicular`]: crate::support::view_factor::Perpendicular

pub(crate) mod core;

pub use self::core::{Assessment, Br187, Br187Config, Br187Error, Facade};

use std::marker::PhantomData;

use twine_core::Model;
use uom::si::f64::{Length, Ratio};

use crate::support::{
    constraint::{Constrained, NonNegative},
    view_factor::CornerRelation,
};

/// Input to [`GivenBoundaryDistance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryDistanceInput {
    pub facade: Facade,
    pub boundary_distance: Constrained<Length, NonNegative>,
}

/// Input to [`GivenUnprotectedArea`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnprotectedAreaInput {
    pub facade: Facade,

    /// Requested unprotected fraction, clamped to the configured range.
    pub unprotected_area: Ratio,
}

/// Maximum unprotected area for a facade at a boundary distance.
#[derive(Debug, Clone, Copy)]
pub struct GivenBoundaryDistance<Relation> {
    config: Br187Config,
    _relation: PhantomData<Relation>,
}

impl<Relation> GivenBoundaryDistance<Relation> {
    #[must_use]
    pub fn new(config: Br187Config) -> Self {
        Self {
            config,
            _relation: PhantomData,
        }
    }
}

impl<Relation> Default for GivenBoundaryDistance<Relation> {
    fn default() -> Self {
        Self::new(Br187Config::default())
    }
}

impl<Relation: CornerRelation + Default> Model for GivenBoundaryDistance<Relation> {
    type Input = BoundaryDistanceInput;
    type Output = Assessment;
    type Error = Br187Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Br187::<Relation>::given_boundary_distance(
            &input.facade,
            input.boundary_distance,
            &self.config,
        )
    }
}

/// Minimum boundary distance for a facade with an unprotected area.
///
/// For a perpendicular receiver, construct with
/// [`Br187Config::perpendicular`] to search beyond 200 m.
#[derive(Debug, Clone, Copy)]
pub struct GivenUnprotectedArea<Relation> {
    config: Br187Config,
    _relation: PhantomData<Relation>,
}

impl<Relation> GivenUnprotectedArea<Relation> {
    #[must_use]
    pub fn new(config: Br187Config) -> Self {
        Self {
            config,
            _relation: PhantomData,
        }
    }
}

impl<Relation> Default for GivenUnprotectedArea<Relation> {
    fn default() -> Self {
        Self::new(Br187Config::default())
    }
}

impl<Relation: CornerRelation + Default> Model for GivenUnprotectedArea<Relation> {
    type Input = UnprotectedAreaInput;
    type Output = Assessment;
    type Error = Br187Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Br187::<Relation>::given_unprotected_area(
            &input.facade,
            input.unprotected_area,
            &self.config,
        )
    }
}
