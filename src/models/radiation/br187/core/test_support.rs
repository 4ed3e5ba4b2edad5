use uom::si::{
    f64::{HeatFluxDensity, Length},
    heat_flux_density::kilowatt_per_square_meter,
    length::meter,
};

use crate::support::view_factor::{Emitter, Receiver};

use super::Facade;

/// A facade with a `width` by `height` emitter assessed at `(x, y)`.
pub(crate) fn facade(width: f64, height: f64, x: f64, y: f64, heat_flux: f64) -> Facade {
    let emitter = Emitter::new(Length::new::<meter>(width), Length::new::<meter>(height))
        .expect("test emitter extents are positive");
    let receiver = Receiver::new(Length::new::<meter>(x), Length::new::<meter>(y));
    Facade::new(
        emitter,
        receiver,
        HeatFluxDensity::new::<kilowatt_per_square_meter>(heat_flux),
    )
    .expect("test heat flux is positive")
}

/// A 10 m square facade assessed at its centre.
pub(crate) fn square_facade(heat_flux: f64) -> Facade {
    facade(10.0, 10.0, 5.0, 5.0, heat_flux)
}
