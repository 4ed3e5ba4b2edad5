use twine_core::Model;

use crate::support::view_factor::{
    CornerRelation, Geometry, Parallel, Perpendicular, ViewFactor, ViewFactorError, view_factor,
};

/// View factor from a rectangular emitter to a receiver point.
///
/// The receiver orientation is set by the [`CornerRelation`].
///
/// # Example
///
/// ```
/// use fse_models::{
///     models::radiation::ViewFactorModel,
///     support::view_factor::{Emitter, Geometry, Receiver},
/// };
/// use twine_core::Model;
/// use uom::si::{f64::Length, length::meter};
///
/// let emitter = Emitter::new(Length::new::<meter>(10.0), Length::new::<meter>(10.0)).unwrap();
/// let receiver = Receiver::new(Length::new::<meter>(0.0), Length::new::<meter>(0.0));
/// let geometry = Geometry::new(emitter, receiver, Length::new::<meter>(10.0)).unwrap();
///
/// let phi = ViewFactorModel::parallel().call(&geometry).unwrap();
/// assert!((phi.value - 0.138_531_6).abs() < 1e-7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFactorModel<Relation> {
    relation: Relation,
}

impl<Relation: CornerRelation> ViewFactorModel<Relation> {
    #[must_use]
    pub fn new(relation: Relation) -> Self {
        Self { relation }
    }
}

impl ViewFactorModel<Parallel> {
    /// A model for a receiver parallel to the emitter.
    #[must_use]
    pub fn parallel() -> Self {
        Self::new(Parallel)
    }
}

impl ViewFactorModel<Perpendicular> {
    /// A model for a receiver perpendicular to the emitter.
    #[must_use]
    pub fn perpendicular() -> Self {
        Self::new(Perpendicular)
    }
}

impl<Relation: CornerRelation> Model for ViewFactorModel<Relation> {
    type Input = Geometry;
    type Output = ViewFactor;
    type Error = ViewFactorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        view_factor(&self.relation, input)
    }
}
