use std::fs;
use std::path::Path;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::material::{Material, MaterialTable};

/// Reservoirs joined by a conductor, for the heat flow calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSetup {
    pub warmer_temperature: ThermodynamicTemperature,
    pub cooler_temperature: ThermodynamicTemperature,
    pub area: Area,
    pub length: Length,
    /// The material whose conductivity drives the heat flow.
    pub material: String,
    pub material1: String,
    pub material2: String,
}

impl Default for SeriesSetup {
    fn default() -> Self {
        SeriesSetup {
            warmer_temperature: ThermodynamicTemperature::new::<degree_celsius>(50.0),
            cooler_temperature: ThermodynamicTemperature::new::<degree_celsius>(30.0),
            area: Area::new::<square_meter>(1.0),
            length: Length::new::<meter>(1.0),
            material: "copper".into(),
            material1: "copper".into(),
            material2: "iron".into(),
        }
    }
}

/// Two conductors of equal height (and width) placed end to end.
#[derive(Clone, Debug, PartialEq)]
pub struct TangentSetup {
    pub length: Length,
    pub height: Length,
    pub material1: String,
    pub material2: String,
}

impl Default for TangentSetup {
    fn default() -> Self {
        TangentSetup {
            length: Length::new::<meter>(0.05),
            height: Length::new::<meter>(0.0133),
            material1: "copper".into(),
            material2: "iron".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Run {
    Series {
        setup: SeriesSetup,
        materials: MaterialTable,
    },
    Tangent {
        setup: TangentSetup,
        materials: MaterialTable,
    },
}

impl Run {
    pub fn series(setup: SeriesSetup) -> Self {
        Run::Series {
            setup,
            materials: MaterialTable::series_defaults(),
        }
    }

    pub fn tangent(setup: TangentSetup) -> Self {
        Run::Tangent {
            setup,
            materials: MaterialTable::tangent_defaults(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub runs: Vec<Run>,
}

impl Default for Model {
    /// One run of each calculation with the built-in parameters.
    fn default() -> Self {
        Model {
            runs: vec![
                Run::series(SeriesSetup::default()),
                Run::tangent(TangentSetup::default()),
            ],
        }
    }
}

impl Model {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let string = fs::read_to_string(path)?;
        Self::from_json(&string)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let loaded: as_loaded::Model = json5::from_str(json)?;
        let converted = loaded.try_into()?;
        Ok(converted)
    }
}

impl TryFrom<as_loaded::Model> for Model {
    type Error = anyhow::Error;
    fn try_from(value: as_loaded::Model) -> Result<Self, Self::Error> {
        if value.runs.is_empty() {
            anyhow::bail!("Model doesn't contain any runs")
        }

        let runs = value
            .runs
            .into_iter()
            .enumerate()
            .map(|(index, run)| {
                let (mut run, run_materials) = run.convert();
                let materials = match &mut run {
                    Run::Series { materials, .. } | Run::Tangent { materials, .. } => materials,
                };
                for (name, material) in value.materials.iter().chain(run_materials.iter()) {
                    materials
                        .insert(material.convert(name.clone()))
                        .map_err(|e| anyhow::anyhow!("Run {}: {}", index, e))?;
                }
                Ok(run)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Model { runs })
    }
}

mod as_loaded {
    use std::collections::HashMap;

    use serde::Deserialize;
    use uom::si::{
        f64::{Area, Length, ThermalConductivity, ThermodynamicTemperature},
        thermodynamic_temperature::degree_celsius,
    };

    #[derive(Clone, Debug, Deserialize)]
    pub struct Model {
        #[serde(default)]
        pub materials: HashMap<String, Material>,
        pub runs: Vec<Run>,
    }

    #[derive(Clone, Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "snake_case")]
    pub enum Run {
        Series(SeriesRun),
        Tangent(TangentRun),
    }

    impl Run {
        /// Convert into a run with the variant's built-in material table,
        /// handing back the run-specific materials still to be layered on top.
        pub fn convert(self) -> (super::Run, HashMap<String, Material>) {
            match self {
                Run::Series(run) => (
                    super::Run::series(super::SeriesSetup {
                        warmer_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                            run.warmer_temperature,
                        ),
                        cooler_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                            run.cooler_temperature,
                        ),
                        area: run.area,
                        length: run.length,
                        material: run.material,
                        material1: run.material1,
                        material2: run.material2,
                    }),
                    run.materials,
                ),
                Run::Tangent(run) => (
                    super::Run::tangent(super::TangentSetup {
                        length: run.length,
                        height: run.height,
                        material1: run.material1,
                        material2: run.material2,
                    }),
                    run.materials,
                ),
            }
        }
    }

    /// Temperatures are in degrees Celsius, everything else in SI base units.
    #[derive(Clone, Debug, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct SeriesRun {
        pub warmer_temperature: f64,
        pub cooler_temperature: f64,
        pub area: Area,
        pub length: Length,
        pub material: String,
        pub material1: String,
        pub material2: String,
        pub materials: HashMap<String, Material>,
    }

    impl Default for SeriesRun {
        fn default() -> Self {
            let setup = super::SeriesSetup::default();
            SeriesRun {
                warmer_temperature: setup.warmer_temperature.get::<degree_celsius>(),
                cooler_temperature: setup.cooler_temperature.get::<degree_celsius>(),
                area: setup.area,
                length: setup.length,
                material: setup.material,
                material1: setup.material1,
                material2: setup.material2,
                materials: HashMap::new(),
            }
        }
    }

    #[derive(Clone, Debug, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct TangentRun {
        pub length: Length,
        pub height: Length,
        pub material1: String,
        pub material2: String,
        pub materials: HashMap<String, Material>,
    }

    impl Default for TangentRun {
        fn default() -> Self {
            let setup = super::TangentSetup::default();
            TangentRun {
                length: setup.length,
                height: setup.height,
                material1: setup.material1,
                material2: setup.material2,
                materials: HashMap::new(),
            }
        }
    }

    #[derive(Clone, Debug, Deserialize, PartialEq)]
    pub struct Material {
        pub thermal_conductivity: ThermalConductivity,
    }

    impl Material {
        pub fn convert(&self, name: String) -> super::Material {
            super::Material {
                name,
                thermal_conductivity: self.thermal_conductivity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use approx::assert_ulps_eq;
    use assert_matches::assert_matches;
    use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

    fn conductivity(run: &Run, name: &str) -> f64 {
        let materials = match run {
            Run::Series { materials, .. } | Run::Tangent { materials, .. } => materials,
        };
        materials
            .resolve(name)
            .unwrap()
            .thermal_conductivity
            .get::<watt_per_meter_kelvin>()
    }

    #[test]
    fn default_model_has_both_runs() {
        let model = Model::default();
        assert_eq!(model.runs.len(), 2);
        assert_matches!(&model.runs[0], Run::Series { setup, .. } => {
            assert_eq!(setup, &SeriesSetup::default());
        });
        assert_matches!(&model.runs[1], Run::Tangent { setup, .. } => {
            assert_eq!(setup.length, Length::new::<meter>(0.05));
            assert_eq!(setup.height, Length::new::<meter>(0.0133));
        });
        assert_eq!(conductivity(&model.runs[0], "copper"), 400.0);
        assert_eq!(conductivity(&model.runs[1], "copper"), 398.0);
    }

    #[test]
    fn convert_material() {
        let input = as_loaded::Material {
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(123.0),
        };

        let output = input.convert("qwertyuiop".into());

        assert_eq!(output.name, "qwertyuiop");
        assert_eq!(
            output.thermal_conductivity,
            ThermalConductivity::new::<watt_per_meter_kelvin>(123.0)
        );
    }

    #[test]
    fn convert_model_empty_runs() {
        let input = as_loaded::Model {
            materials: HashMap::new(),
            runs: vec![],
        };

        let message = format!("{}", Model::try_from(input).unwrap_err());
        message
            .find("runs")
            .expect("Error message should say that runs are missing");
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let model = Model::from_json("{ runs: [ { series: {} }, { tangent: {} } ] }").unwrap();
        assert_eq!(model, Model::default());
    }

    #[test]
    fn material_layering() {
        let model = Model::from_json(
            r#"{
            materials: {
                copper: { thermal_conductivity: 401 },
                glass: { thermal_conductivity: 1.0 },
            },
            runs: [
                { series: {} },
                {
                    tangent: {
                        materials: { glass: { thermal_conductivity: 0.8 } },
                    },
                },
            ],
        }"#,
        )
        .unwrap();

        assert_eq!(conductivity(&model.runs[0], "copper"), 401.0);
        assert_eq!(conductivity(&model.runs[0], "glass"), 1.0);
        assert_eq!(conductivity(&model.runs[0], "wood"), 0.08);
        assert_eq!(conductivity(&model.runs[1], "copper"), 401.0);
        assert_eq!(conductivity(&model.runs[1], "glass"), 0.8);
        assert_eq!(conductivity(&model.runs[1], "brass"), 109.0);
    }

    #[test]
    fn bad_conductivity_is_rejected() {
        let message = format!(
            "{}",
            Model::from_json(
                r#"{
                runs: [
                    { tangent: {} },
                    { tangent: { materials: { foam: { thermal_conductivity: -1 } } } },
                ],
            }"#,
            )
            .unwrap_err()
        );

        message
            .find("foam")
            .expect("Error message should contain the name of the material");
        message
            .find("Run 1")
            .expect("Error message should contain the index of the run");
    }

    #[test]
    fn unknown_run_kind_is_rejected() {
        assert!(Model::from_json("{ runs: [ { parallel: {} } ] }").is_err());
    }

    #[test]
    fn load_model() {
        let mut f = tempfile::NamedTempFile::new().unwrap();

        use std::io::Write;
        write!(f, "{}", sample_model_json()).unwrap();

        let model = Model::load(f.path()).unwrap();

        check_sample_model(model);
    }

    #[test]
    fn model_from_json() {
        let model = Model::from_json(sample_model_json()).unwrap();
        check_sample_model(model);
    }

    #[test]
    fn load_shipped_sample() {
        let model = Model::load(concat!(env!("CARGO_MANIFEST_DIR"), "/model.json5")).unwrap();
        assert_eq!(model.runs.len(), 3);
        assert_eq!(conductivity(&model.runs[2], "silver"), 406.0);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Model::load(dir.path().join("missing.json5")).is_err());
    }

    /// Provide string with sample JSON5 model
    fn sample_model_json() -> &'static str {
        r#"{
            runs: [
                {
                    series: {
                        warmer_temperature: 80,
                        cooler_temperature: 20,
                        area: 0.5,
                        length: 2,
                        material: "iron",
                    }
                },
                {
                    tangent: {
                        length: 0.1,
                        height: 0.02,
                        material1: "aluminum",
                        material2: "brass",
                    }
                },
            ],
        }"#
    }

    /// Shared check for both file loading and string loading
    fn check_sample_model(model: Model) {
        assert_eq!(model.runs.len(), 2);
        assert_matches!(&model.runs[0], Run::Series { setup, .. } => {
            assert_ulps_eq!(setup.warmer_temperature.get::<degree_celsius>(), 80.0);
            assert_ulps_eq!(setup.cooler_temperature.get::<degree_celsius>(), 20.0);
            assert_eq!(setup.area, Area::new::<square_meter>(0.5));
            assert_eq!(setup.length, Length::new::<meter>(2.0));
            assert_eq!(setup.material, "iron");
            assert_eq!(setup.material1, "copper");
            assert_eq!(setup.material2, "iron");
        });
        assert_matches!(&model.runs[1], Run::Tangent { setup, .. } => {
            assert_eq!(setup.length, Length::new::<meter>(0.1));
            assert_eq!(setup.height, Length::new::<meter>(0.02));
            assert_eq!(setup.material1, "aluminum");
            assert_eq!(setup.material2, "brass");
        });
    }
}
