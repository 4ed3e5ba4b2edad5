//! Minimum boundary distance for a given unprotected area.

use tracing::debug;
use uom::si::{
    f64::Ratio,
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::ratio,
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive, UnitInterval, UnitIntervalLowerOpen},
    view_factor::{CornerRelation, Parameter, ViewFactor, solve_geometry, view_factor},
};

use super::{Assessment, Br187Config, Br187Error, Facade};

/// Calculates the smallest boundary distance for an unprotected area fraction.
///
/// The fraction is clamped to `[config.min_unprotected_area, 1]`. The
/// separation at which the incident heat flux from the unprotected part of
/// the facade equals the critical heat flux is found by bisection over
/// `config.separation_bracket`.
///
/// # Errors
///
/// - [`Br187Error::Unreachable`] if the required view factor exceeds one.
/// - [`Br187Error::Solve`] if no separation in the bracket gives the required
///   view factor, or the search does not converge.
/// - [`Br187Error::Constraint`] if the fraction is `NaN` or the configuration
///   is invalid.
pub(super) fn given_unprotected_area(
    relation: &impl CornerRelation,
    facade: &Facade,
    unprotected_area: Ratio,
    config: &Br187Config,
) -> Result<Assessment, Br187Error> {
    let critical = StrictlyPositive::new(config.critical_heat_flux)?.into_inner();

    let requested = unprotected_area.get::<ratio>();
    if requested.is_nan() {
        return Err(ConstraintError::NotANumber.into());
    }
    let fraction = UnitIntervalLowerOpen::new(
        requested
            .max(config.min_unprotected_area.get::<ratio>())
            .min(1.0),
    )?
    .into_inner();

    let required = critical.get::<watt_per_square_meter>()
        / (facade.heat_flux().get::<watt_per_square_meter>() * fraction);
    let target = ViewFactor::new(required).map_err(|_| {
        debug!(required, "required view factor exceeds one");
        Br187Error::Unreachable { required }
    })?;

    let start = facade.geometry(config.separation_bracket[0])?;
    let separation = solve_geometry(
        relation,
        &start,
        Parameter::Separation,
        target,
        config.separation_bracket,
        &config.bisection(),
    )?;

    let geometry = start.with(Parameter::Separation, separation)?;
    let view_factor = view_factor(relation, &geometry)?;
    let incident_heat_flux = facade.heat_flux() * view_factor.value;

    debug!(
        unprotected_area = fraction,
        required,
        separation = separation.get::<meter>(),
        "minimum boundary distance"
    );

    Ok(Assessment {
        separation,
        boundary_distance: separation * 0.5,
        view_factor,
        incident_heat_flux,
        unprotected_area: UnitInterval::new(Ratio::new::<ratio>(fraction))?,
    })
}
