use uom::si::{
    angle::radian,
    area::square_meter,
    f64::{
        Angle, Area, Length, Power, TemperatureInterval, ThermalConductance,
        ThermodynamicTemperature,
    },
    length::meter,
    power::watt,
    temperature_interval,
    thermal_conductance::watt_per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::error::{require_finite, require_positive, ConductionError};
use crate::material::{ConductorPair, Material};

/// Steady state of a conductor bridging two heat reservoirs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermalState {
    pub temperature_difference: TemperatureInterval,
    pub conductance: ThermalConductance,
    pub heat_flow: Power,
}

impl ThermalState {
    /// Thermal resistance of the conductor [K/W].
    pub fn thermal_resistance(&self) -> f64 {
        self.conductance.get::<watt_per_kelvin>().recip()
    }
}

/// Fourier's law in finite difference form: dQ/dt = k * A * dT / L.
///
/// Only the single `material` conductivity enters the result.
pub fn series_conductance(
    material: &Material,
    area: Area,
    length: Length,
    warmer: ThermodynamicTemperature,
    cooler: ThermodynamicTemperature,
) -> Result<ThermalState, ConductionError> {
    require_positive("conductor area", area.get::<square_meter>())?;
    require_positive("conductor length", length.get::<meter>())?;
    require_positive(
        &format!("thermal conductivity of {}", material.name),
        material.thermal_conductivity.get::<watt_per_meter_kelvin>(),
    )?;
    let warmer = require_finite("warmer temperature", warmer.get::<degree_celsius>())?;
    let cooler = require_finite("cooler temperature", cooler.get::<degree_celsius>())?;

    // Absolute temperatures don't subtract in uom, so the interval is taken by hand
    let temperature_difference = TemperatureInterval::new::<temperature_interval::degree_celsius>(
        require_finite("temperature difference", warmer - cooler)?,
    );
    let conductance: ThermalConductance = material.thermal_conductivity * area / length;
    require_positive("thermal conductance", conductance.get::<watt_per_kelvin>())?;
    let heat_flow = Power::new::<watt>(require_finite(
        "heat flow",
        conductance.get::<watt_per_kelvin>()
            * temperature_difference.get::<temperature_interval::kelvin>(),
    )?);

    Ok(ThermalState {
        temperature_difference,
        conductance,
        heat_flow,
    })
}

/// Least-time path of heat through two conductors laid end to end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefractionResult {
    /// Thermal resistance of conductor 1 [m.K/W]
    pub rho1: f64,
    /// Thermal resistance of conductor 2 [m.K/W]
    pub rho2: f64,
    /// Distance from the start where the path crosses into conductor 2.
    pub crossing_point: Length,
    pub theta1: Angle,
    pub theta2: Angle,
}

/// Tangent law of refraction for heat conduction (Tan & Holland, 1990).
///
/// Heat enters the outer corner of conductor 1 and leaves the opposite corner
/// of conductor 2. Minimizing the travel time gives the crossing point
/// `x = L / (rho1 / rho2 + 1)`, the conductor height cancels out.
pub fn tangent_refraction(
    pair: &ConductorPair,
    length: Length,
    height: Length,
) -> Result<RefractionResult, ConductionError> {
    let length = require_positive("conductor length", length.get::<meter>())?;
    let height = require_positive("conductor height", height.get::<meter>())?;
    let k1 = require_positive(
        &format!("thermal conductivity of {}", pair.first.name),
        pair.first.thermal_conductivity.get::<watt_per_meter_kelvin>(),
    )?;
    let k2 = require_positive(
        &format!("thermal conductivity of {}", pair.second.name),
        pair.second.thermal_conductivity.get::<watt_per_meter_kelvin>(),
    )?;

    let rho1 = require_positive(
        &format!("thermal resistance of {}", pair.first.name),
        k1.recip(),
    )?;
    let rho2 = require_positive(
        &format!("thermal resistance of {}", pair.second.name),
        k2.recip(),
    )?;
    // Wildly mismatched conductivities collapse the crossing point onto an end
    let x = length / ((rho1 / rho2) + 1.0);
    if !(x > 0.0 && x < length) {
        return Err(ConductionError::InvalidGeometry {
            parameter: "crossing point".into(),
            value: x,
        });
    }

    Ok(RefractionResult {
        rho1,
        rho2,
        crossing_point: Length::new::<meter>(x),
        theta1: Angle::new::<radian>((x / height).atan()),
        theta2: Angle::new::<radian>(((length - x) / height).atan()),
    })
}
