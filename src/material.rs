use std::collections::HashMap;

use itertools::Itertools;
use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use crate::error::ConductionError;

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub thermal_conductivity: ThermalConductivity,
}

impl Material {
    pub fn new(name: &str, watts_per_meter_kelvin: f64) -> Self {
        Material {
            name: name.into(),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                watts_per_meter_kelvin,
            ),
        }
    }
}

#[cfg(test)]
impl Arbitrary for Material {
    type Parameters = ();
    type Strategy = BoxedStrategy<Material>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        ("[a-z]+", 1e-2f64..1e3f64)
            .prop_map(|tuple| Material::new(&tuple.0, tuple.1))
            .boxed()
    }
}

/// Lookup of thermal conductivities by material name.
/// Every entry is guaranteed to have a positive, finite conductivity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialTable {
    materials: HashMap<String, Material>,
}

impl MaterialTable {
    /// Conductivities used by the heat flow calculation [W/(m.K)].
    pub fn series_defaults() -> Self {
        Self::from_constants(&[
            ("air", 0.026),
            ("wood", 0.08),
            ("water", 0.6),
            ("iron", 80.0),
            ("copper", 400.0),
        ])
    }

    /// Conductivities used by the tangent law calculation [W/(m.K)].
    /// Source: NIST (iron, copper) and hyperphysics (aluminum, brass).
    pub fn tangent_defaults() -> Self {
        Self::from_constants(&[
            ("iron", 80.0),
            ("copper", 398.0),
            ("aluminum", 237.0),
            ("brass", 109.0),
        ])
    }

    fn from_constants(constants: &[(&str, f64)]) -> Self {
        MaterialTable {
            materials: constants
                .iter()
                .map(|(name, k)| (name.to_string(), Material::new(name, *k)))
                .collect(),
        }
    }

    /// Add a material, replacing any previous entry of the same name.
    pub fn insert(&mut self, material: Material) -> Result<(), ConductionError> {
        let value = material.thermal_conductivity.get::<watt_per_meter_kelvin>();
        if !(value.is_finite() && value > 0.0) {
            return Err(ConductionError::InvalidConductivity {
                material: material.name,
                value,
            });
        }
        self.materials.insert(material.name.clone(), material);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&Material, ConductionError> {
        self.materials
            .get(name)
            .ok_or_else(|| ConductionError::UnknownMaterial {
                name: name.into(),
                known: self.names().join(", "),
            })
    }

    /// Material names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(String::as_str).sorted().collect()
    }
}

/// Two conductors joined along their common boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct ConductorPair {
    pub first: Material,
    pub second: Material,
}

impl ConductorPair {
    pub fn resolve(
        table: &MaterialTable,
        material1: &str,
        material2: &str,
    ) -> Result<Self, ConductionError> {
        Ok(ConductorPair {
            first: table.resolve(material1)?.clone(),
            second: table.resolve(material2)?.clone(),
        })
    }
}
