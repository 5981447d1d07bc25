use std::fmt;

use uom::si::{
    angle::{degree, radian},
    area::square_meter,
    length::meter,
    power::watt,
    temperature_interval::degree_celsius as celsius_interval,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::conduction::{RefractionResult, ThermalState};
use crate::material::{ConductorPair, Material};
use crate::model::{SeriesSetup, TangentSetup};

const WIDTH: usize = 79;

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{:=^width$}\n", format!(" {title} "), width = WIDTH)
}

fn banner(f: &mut fmt::Formatter<'_>, description: &[&str]) -> fmt::Result {
    let rule = "#".repeat(WIDTH);
    let blank = format!("#{}#", " ".repeat(WIDTH - 2));
    let separator = format!("#{}#", "_".repeat(WIDTH - 2));

    writeln!(f, "\n{rule}\n{blank}")?;
    writeln!(f, "# {:<75} #", "CONDUCTORS IN SERIES")?;
    writeln!(f, "{separator}\n{blank}")?;
    writeln!(f, "# {:<75} #", "Description:")?;
    for line in description {
        writeln!(f, "# {line:<75} #")?;
    }
    writeln!(f, "{blank}\n{rule}\n")
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<40}{value:>12}")
}

fn conductivity_line(
    f: &mut fmt::Formatter<'_>,
    material: &Material,
    precision: usize,
) -> fmt::Result {
    line(
        f,
        &format!("Thermal Conductivity of {} is", material.name),
        format!(
            "{:.precision$}",
            material.thermal_conductivity.get::<watt_per_meter_kelvin>()
        ),
    )
}

/// Banner and background of the heat flow calculation.
#[derive(Copy, Clone, Debug)]
pub struct SeriesIntro;

impl fmt::Display for SeriesIntro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(
            f,
            &[
                "This simulation calculates the flow of heat energy across 2 thermal",
                "conductors that connects a warmer object to a cooler object.",
            ],
        )?;
        heading(f, "Background")?;
        writeln!(f, " Conductors in series describes the flow of heat energy through")?;
        writeln!(f, " two conductors that bridge a warmer and a cooler reservoir.\n")?;
        writeln!(f, " dQ/dt = (k A) (dT / dL)")?;
        writeln!(f, " k = thermal conductivity of material\n\n")
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SeriesParameters<'a>(pub &'a SeriesSetup);

impl<'a> fmt::Display for SeriesParameters<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let setup = self.0;
        heading(f, "Parameters")?;
        line(
            f,
            "Warmer temp (in C):",
            format!("{:.3}", setup.warmer_temperature.get::<degree_celsius>()),
        )?;
        line(
            f,
            "Cooler temp (in C):",
            format!("{:.3}", setup.cooler_temperature.get::<degree_celsius>()),
        )?;
        line(
            f,
            "Area (in m^2):",
            format!("{:.3}", setup.area.get::<square_meter>()),
        )?;
        line(
            f,
            "Length (in m):",
            format!("{:.3}", setup.length.get::<meter>()),
        )?;
        line(f, "Material:", &setup.material)?;
        line(f, "Material 1:", &setup.material1)?;
        line(f, "Material 2:", &setup.material2)?;
        writeln!(f, "\n")
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SeriesOutput<'a> {
    pub material: &'a Material,
    pub pair: &'a ConductorPair,
    pub state: &'a ThermalState,
}

impl<'a> fmt::Display for SeriesOutput<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Output")?;
        conductivity_line(f, self.material, 3)?;
        conductivity_line(f, &self.pair.first, 3)?;
        conductivity_line(f, &self.pair.second, 3)?;
        line(
            f,
            "Temp diff (in degrees C):",
            format!(
                "{:.3}",
                self.state.temperature_difference.get::<celsius_interval>()
            ),
        )?;
        line(
            f,
            "Thermal resistance (in K/W):",
            format!("{:.3e}", self.state.thermal_resistance()),
        )?;
        line(
            f,
            "Heat energy flow (in J/s):",
            format!("{:.3}", self.state.heat_flow.get::<watt>()),
        )?;
        writeln!(f, "\n")
    }
}

/// Units key and references of the heat flow calculation.
#[derive(Copy, Clone, Debug)]
pub struct SeriesFooter;

impl fmt::Display for SeriesFooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Units Key")?;
        writeln!(f, "  {:<12}Unit", "Abbreviation")?;
        writeln!(f, "  {:<12}degrees Celsius, a unit of temperature", "C")?;
        writeln!(f, "  {:<12}Joules, a unit of energy", "J")?;
        writeln!(f, "  {:<12}Kelvin, a unit of temperature", "K")?;
        writeln!(f, "  {:<12}meters, a unit of length", "m")?;
        writeln!(f, "  {:<12}Watts, a unit of power", "W")?;
        writeln!(f, "\n")?;
        heading(f, "References")?;
        writeln!(
            f,
            " Daniel V. Schroeder, \"An Introduction to Thermal Physics.\" (2000)."
        )?;
        writeln!(
            f,
            " Wolfram, \"http://scienceworld.wolfram.com/physics/SnellsLaw.html\"\n\n"
        )
    }
}

/// Banner and background of the tangent law calculation.
#[derive(Copy, Clone, Debug)]
pub struct TangentIntro;

impl fmt::Display for TangentIntro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(
            f,
            &[
                "This simulation calculates the angles of the path of maximum heat flow",
                "through a series of two conductors that bridge a thermal difference.",
            ],
        )?;
        heading(f, "Background")?;
        writeln!(
            f,
            " Heat flows through two rectangular conductors in series, arranged parallel"
        )?;
        writeln!(
            f,
            " lengthwise, into the outer left corner of conductor 1 out of the extreme"
        )?;
        writeln!(
            f,
            " opposite corner of conductor 2. Heat flow is refracted across the boundary"
        )?;
        writeln!(f, " between the two conductors.\n")?;
        writeln!(
            f,
            " Fourier's law of conduction is combined with a refraction analogy. Unlike"
        )?;
        writeln!(
            f,
            " light, heat does not enter at a pre-determined angle, it enters and leaves"
        )?;
        writeln!(
            f,
            " at fixed points. The angles depend on the ratio of the conductivities of"
        )?;
        writeln!(f, " the two materials and on the dimensions of the conductors.\n")?;
        writeln!(
            f,
            " This simulation uses the Tangent Law disclosed by Tan and Holland (1990).\n\n"
        )
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TangentParameters<'a>(pub &'a TangentSetup);

impl<'a> fmt::Display for TangentParameters<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let setup = self.0;
        heading(f, "Parameters")?;
        line(
            f,
            "Conductor Length (in m):",
            format!("{:.4}", setup.length.get::<meter>()),
        )?;
        line(
            f,
            "Conductor Height (in m):",
            format!("{:.4}", setup.height.get::<meter>()),
        )?;
        writeln!(f)?;
        line(f, "Conductor Material 1:", &setup.material1)?;
        line(f, "Conductor Material 2:", &setup.material2)?;
        writeln!(f)
    }
}

/// Resolved conductivities, printed as the tail of the parameters section.
#[derive(Copy, Clone, Debug)]
pub struct TangentConductivities<'a>(pub &'a ConductorPair);

impl<'a> fmt::Display for TangentConductivities<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        conductivity_line(f, &self.0.first, 1)?;
        conductivity_line(f, &self.0.second, 1)?;
        writeln!(f)?;
        writeln!(f, "  Note: Conductor Width = Conductor Height\n\n")
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TangentOutput<'a>(pub &'a RefractionResult);

impl<'a> fmt::Display for TangentOutput<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        heading(f, "Output")?;
        writeln!(f, "RESULTS USING TANGENT LAW\n")?;
        line(f, "Thermal resistance 1 (in m K/W):", format!("{:.5}", result.rho1))?;
        line(f, "Thermal resistance 2 (in m K/W):", format!("{:.5}", result.rho2))?;
        writeln!(f)?;
        writeln!(
            f,
            "  x (in meters): {:>10.4} (where path of maximum heat flow crosses boundary)\n\n",
            result.crossing_point.get::<meter>()
        )?;
        line(
            f,
            "Angle 1 (in radians):",
            format!("{:.2}", result.theta1.get::<radian>()),
        )?;
        line(
            f,
            "Angle 2 (in radians):",
            format!("{:.2}", result.theta2.get::<radian>()),
        )?;
        writeln!(f, "\n")?;
        line(
            f,
            "Angle 1 (in degrees):",
            format!("{:.1}", result.theta1.get::<degree>()),
        )?;
        line(
            f,
            "Angle 2 (in degrees):",
            format!("{:.1}", result.theta2.get::<degree>()),
        )?;
        writeln!(f, "\n")
    }
}

/// Units key and references of the tangent law calculation.
#[derive(Copy, Clone, Debug)]
pub struct TangentFooter;

impl fmt::Display for TangentFooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Units Key")?;
        writeln!(f, "  {:<12}Unit", "Abbreviation")?;
        writeln!(f, "  {:<12}Kelvin, a unit of temperature", "K")?;
        writeln!(f, "  {:<12}meters, a unit of length", "m")?;
        writeln!(f, "  {:<12}Watts, a unit of power", "W")?;
        writeln!(f, "\n")?;
        heading(f, "References")?;
        writeln!(
            f,
            " Daniel V. Schroeder, \"An Introduction to Thermal Physics.\" (2000)."
        )?;
        writeln!(
            f,
            " A. Tan and L. R. Holland, \"Tangent Law of Refraction for Heat Conduction"
        )?;
        writeln!(
            f,
            " Through an Interface and Underlying Variational Principle\", Am. J. Phys.,"
        )?;
        writeln!(f, " 58, 988-991 (1990).")?;
        writeln!(
            f,
            " Wolfram, \"http://scienceworld.wolfram.com/physics/SnellsLaw.html\"\n\n"
        )
    }
}
