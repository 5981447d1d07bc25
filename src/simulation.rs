use std::io::Write;

use crate::conduction::{series_conductance, tangent_refraction};
use crate::material::ConductorPair;
use crate::model::Run;
use crate::report::{
    SeriesFooter, SeriesIntro, SeriesOutput, SeriesParameters, TangentConductivities,
    TangentFooter, TangentIntro, TangentOutput, TangentParameters,
};

/// Run one calculation and write its report.
///
/// Banner, background and parameters are written first. Any failure while
/// resolving materials or computing is returned before the output, units and
/// references sections are written.
pub fn simulate<W: Write>(run: &Run, out: &mut W) -> anyhow::Result<()> {
    match run {
        Run::Series { setup, materials } => {
            write!(out, "{}{}", SeriesIntro, SeriesParameters(setup))?;

            let material = materials.resolve(&setup.material)?;
            let pair = ConductorPair::resolve(materials, &setup.material1, &setup.material2)?;
            let state = series_conductance(
                material,
                setup.area,
                setup.length,
                setup.warmer_temperature,
                setup.cooler_temperature,
            )?;

            let output = SeriesOutput {
                material,
                pair: &pair,
                state: &state,
            };
            write!(out, "{}{}", output, SeriesFooter)?;
        }
        Run::Tangent { setup, materials } => {
            write!(out, "{}{}", TangentIntro, TangentParameters(setup))?;

            let pair = ConductorPair::resolve(materials, &setup.material1, &setup.material2)?;
            write!(out, "{}", TangentConductivities(&pair))?;

            let result = tangent_refraction(&pair, setup.length, setup.height)?;
            write!(out, "{}{}", TangentOutput(&result), TangentFooter)?;
        }
    }
    Ok(())
}
