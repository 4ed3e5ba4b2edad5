//! Maximum unprotected area for a given boundary distance.

use tracing::debug;
use uom::si::{
    f64::{Length, Ratio},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval},
    view_factor::{CornerRelation, view_factor},
};

use super::{Assessment, Br187Config, Br187Error, Facade};

/// Calculates the largest unprotected area fraction at `boundary_distance`.
///
/// The separation is twice the boundary distance, clamped to
/// `config.separation_limits`. The reported boundary distance is half the
/// clamped separation.
///
/// # Errors
///
/// Returns [`Br187Error`] if the configuration is invalid or the view factor
/// cannot be evaluated.
pub(super) fn given_boundary_distance(
    relation: &impl CornerRelation,
    facade: &Facade,
    boundary_distance: Constrained<Length, NonNegative>,
    config: &Br187Config,
) -> Result<Assessment, Br187Error> {
    let critical = StrictlyPositive::new(config.critical_heat_flux)?.into_inner();

    let [lower, upper] = config.separation_limits.map(|limit| limit.get::<meter>());
    let separation = Length::new::<meter>(
        (2.0 * boundary_distance.into_inner().get::<meter>())
            .max(lower)
            .min(upper),
    );

    let geometry = facade.geometry(separation)?;
    let view_factor = view_factor(relation, &geometry)?;
    let incident_heat_flux = facade.heat_flux() * view_factor.value;

    // A zero incident flux divides to infinity: the facade may be fully unprotected.
    let fraction = critical.get::<watt_per_square_meter>()
        / incident_heat_flux.get::<watt_per_square_meter>();
    let unprotected_area = if fraction >= 1.0 {
        UnitInterval::one()
    } else {
        UnitInterval::new(Ratio::new::<ratio>(fraction))?
    };

    debug!(
        separation = separation.get::<meter>(),
        view_factor = view_factor.value,
        unprotected_area = unprotected_area.as_ref().get::<ratio>(),
        "maximum unprotected area"
    );

    Ok(Assessment {
        separation,
        boundary_distance: separation * 0.5,
        view_factor,
        incident_heat_flux,
        unprotected_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::HeatFluxDensity, heat_flux_density::kilowatt_per_square_meter, ratio::percent,
    };

    use crate::support::view_factor::{Parallel, Perpendicular};

    use crate::models::radiation::br187::core::test_support::{facade, square_facade};

    fn distance(value: f64) -> Constrained<Length, NonNegative> {
        NonNegative::new(Length::new::<meter>(value)).unwrap()
    }

    #[test]
    fn worked_example() {
        // 10 m square at 84 kW/m², assessed at its centre, 2 m from the boundary.
        let result = given_boundary_distance(
            &Parallel,
            &square_facade(84.0),
            distance(2.0),
            &Br187Config::default(),
        )
        .unwrap();

        assert_relative_eq!(result.separation.get::<meter>(), 4.0);
        assert_relative_eq!(result.boundary_distance.get::<meter>(), 2.0);
        assert_relative_eq!(result.view_factor.value, 0.659_142_941_5, epsilon = 1e-8);
        assert_relative_eq!(
            result.incident_heat_flux.get::<kilowatt_per_square_meter>(),
            55.368_008,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            result.unprotected_area.into_inner().get::<percent>(),
            22.756_824,
            epsilon = 1e-5
        );
    }

    #[test]
    fn separation_is_clamped_to_limits() {
        let config = Br187Config::default();

        let near = given_boundary_distance(&Parallel, &square_facade(84.0), distance(0.0), &config)
            .unwrap();
        assert_relative_eq!(near.separation.get::<meter>(), 1.0);
        assert_relative_eq!(near.boundary_distance.get::<meter>(), 0.5);

        let far = given_boundary_distance(&Parallel, &square_facade(84.0), distance(150.0), &config)
            .unwrap();
        assert_relative_eq!(far.separation.get::<meter>(), 200.0);
        assert_relative_eq!(far.boundary_distance.get::<meter>(), 100.0);
    }

    #[test]
    fn low_heat_flux_allows_full_unprotected_area() {
        let result = given_boundary_distance(
            &Parallel,
            &square_facade(10.0),
            distance(1.0),
            &Br187Config::default(),
        )
        .unwrap();

        // 10 kW/m² is below the critical flux at any view factor.
        assert_eq!(result.unprotected_area, UnitInterval::one::<Ratio>());
        assert_relative_eq!(result.unprotected_area.into_inner().get::<ratio>(), 1.0);
    }

    #[test]
    fn perpendicular_receiver() {
        let result = given_boundary_distance(
            &Perpendicular,
            &facade(10.0, 10.0, 0.0, 0.0, 84.0),
            distance(1.0),
            &Br187Config::default(),
        )
        .unwrap();

        assert_relative_eq!(result.view_factor.value, 0.194_375_032, epsilon = 1e-8);
        assert_relative_eq!(
            result.unprotected_area.into_inner().get::<ratio>(),
            0.771_704_053,
            epsilon = 1e-8
        );
    }

    #[test]
    fn invalid_critical_heat_flux() {
        let config = Br187Config {
            critical_heat_flux: HeatFluxDensity::new::<kilowatt_per_square_meter>(0.0),
            ..Br187Config::default()
        };

        let result = given_boundary_distance(&Parallel, &square_facade(84.0), distance(2.0), &config);
        assert!(matches!(result, Err(Br187Error::Constraint(_))));
    }
}
