use uom::si::f64::{HeatFluxDensity, Length, Ratio};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitInterval},
    view_factor::{Emitter, Geometry, Receiver, ViewFactor},
};

/// A radiating facade: the emitter panel, the point assessed on the
/// receiving side, and the heat flux emitted by the fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facade {
    emitter: Emitter,
    receiver: Receiver,
    heat_flux: Constrained<HeatFluxDensity, StrictlyPositive>,
}

impl Facade {
    /// Create a [`Facade`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the emitted heat flux is not strictly positive.
    pub fn new(
        emitter: Emitter,
        receiver: Receiver,
        heat_flux: HeatFluxDensity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            emitter,
            receiver,
            heat_flux: StrictlyPositive::new(heat_flux)?,
        })
    }

    /// Create a [`Facade`] assessed opposite the centre of the emitter.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the emitted heat flux is not strictly positive.
    pub fn centred(emitter: Emitter, heat_flux: HeatFluxDensity) -> ConstraintResult<Self> {
        Self::new(emitter, emitter.centre(), heat_flux)
    }

    #[must_use]
    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    #[must_use]
    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    #[must_use]
    pub fn heat_flux(&self) -> HeatFluxDensity {
        self.heat_flux.into_inner()
    }

    pub(super) fn geometry(&self, separation: Length) -> ConstraintResult<Geometry> {
        Geometry::new(self.emitter, self.receiver, separation)
    }
}

/// Result of a BR 187 check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Distance between the emitter and its mirror image across the boundary.
    pub separation: Length,

    /// Distance from the facade to the relevant boundary, half the separation.
    pub boundary_distance: Length,

    /// View factor at the separation.
    pub view_factor: ViewFactor,

    /// Heat flux at the receiver with the whole emitter unprotected.
    pub incident_heat_flux: HeatFluxDensity,

    /// Fraction of the facade that may be unprotected.
    pub unprotected_area: Constrained<Ratio, UnitInterval>,
}
