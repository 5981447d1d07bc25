use thiserror::Error;

/// Reasons a conduction calculation refuses to run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConductionError {
    /// The material name is not present in the conductivity table.
    #[error("Unknown material {name:?} (known materials: {known})")]
    UnknownMaterial { name: String, known: String },

    /// An input or derived quantity outside the range the calculation can
    /// represent, such as a non-positive length or an overflowing heat flow.
    #[error("Invalid geometry: {parameter} is out of range (received {value})")]
    InvalidGeometry { parameter: String, value: f64 },

    /// A conductivity table entry that is not a positive number.
    #[error("Thermal conductivity of {material:?} must be positive (received {value})")]
    InvalidConductivity { material: String, value: f64 },
}

/// Reject anything that is not a finite, strictly positive number.
pub fn require_positive(parameter: &str, value: f64) -> Result<f64, ConductionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConductionError::InvalidGeometry {
            parameter: parameter.into(),
            value,
        })
    }
}

/// Reject NaN and infinities, any sign is accepted.
pub fn require_finite(parameter: &str, value: f64) -> Result<f64, ConductionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConductionError::InvalidGeometry {
            parameter: parameter.into(),
            value,
        })
    }
}
