use twine_solvers::equation::bisection;
use uom::si::{
    f64::{HeatFluxDensity, Length, Ratio},
    heat_flux_density::kilowatt_per_square_meter,
    length::meter,
    ratio::ratio,
};

/// Settings for the BR 187 unprotected area and boundary distance checks.
///
/// The defaults suit a receiver parallel to the facade. A perpendicular
/// receiver sees far less of the facade at a given separation, so its
/// minimum distance can lie well beyond 200 m; use
/// [`Br187Config::perpendicular`] for those checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Br187Config {
    /// Incident heat flux at the boundary that must not be exceeded.
    pub critical_heat_flux: HeatFluxDensity,

    /// Range a separation derived from a boundary distance is clamped to.
    ///
    /// Separations are measured to the notional mirror-image facade, so they
    /// are twice the boundary distance.
    pub separation_limits: [Length; 2],

    /// Separation range searched when solving for a boundary distance.
    pub separation_bracket: [Length; 2],

    /// Smallest unprotected area fraction accepted when solving for distance.
    pub min_unprotected_area: Ratio,

    /// Maximum iteration count for the separation search.
    pub max_iters: usize,

    /// Absolute tolerance on the view factor residual (achieved - required).
    pub view_factor_tol: Ratio,
}

impl Default for Br187Config {
    fn default() -> Self {
        Self {
            critical_heat_flux: HeatFluxDensity::new::<kilowatt_per_square_meter>(12.6),
            separation_limits: [Length::new::<meter>(1.0), Length::new::<meter>(200.0)],
            separation_bracket: [Length::new::<meter>(0.01), Length::new::<meter>(200.0)],
            min_unprotected_area: Ratio::new::<ratio>(0.0001),
            max_iters: 100,
            view_factor_tol: Ratio::new::<ratio>(0.001),
        }
    }
}

impl Br187Config {
    /// Settings for a receiver perpendicular to the facade.
    ///
    /// Searches separations up to 1000 m with up to 500 iterations. All
    /// other settings match [`Br187Config::default`].
    #[must_use]
    pub fn perpendicular() -> Self {
        Self {
            separation_bracket: [Length::new::<meter>(0.01), Length::new::<meter>(1000.0)],
            max_iters: 500,
            ..Self::default()
        }
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: 0.0,
            x_rel_tol: 0.0,
            residual_tol: self.view_factor_tol.get::<ratio>(),
        }
    }
}
