//! Error types for parameter handling and output

use thiserror::Error;

use crate::shape::ModelWarning;

pub type SimulationResult<T> = Result<T, SimulationError>;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("{name} = {value} is outside the allowed range [{min}, {max}]")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid geometry: inner radius {inner_radius} m is not smaller than outer radius {outer_radius} m")]
    InvalidGeometry { inner_radius: f64, outer_radius: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ModelWarning> for SimulationError {
    fn from(warning: ModelWarning) -> Self {
        match warning {
            ModelWarning::InvalidGeometry { inner_radius, outer_radius } => {
                SimulationError::InvalidGeometry { inner_radius, outer_radius }
            }
        }
    }
}
