//! Range checks for parameters coming from the control panel.
//!
//! The model itself accepts any numbers; these checks enforce the slider
//! ranges for callers that take raw user input, such as the CLI.

use crate::constants::{
    max_inner_radius, DURATION_RANGE, FORCE_RANGE, FRAME_RATE_RANGE, INNER_RADIUS_MIN, MASS_RANGE,
    OUTER_RADIUS_RANGE, TORQUE_RANGE, UNWOUND_DISTANCE_RANGE,
};
use crate::error::{SimulationError, SimulationResult};
use crate::motion::MotionSpec;
use crate::shape::{CylinderSpec, ShapeKind};

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> SimulationResult<()> {
    // NaN fails both comparisons and is rejected
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(SimulationError::ParameterOutOfRange { name, value, min, max })
    }
}

pub fn validate_cylinder(spec: &CylinderSpec) -> SimulationResult<()> {
    check_range("mass", spec.mass, MASS_RANGE)?;
    check_range("outer_radius", spec.outer_radius, OUTER_RADIUS_RANGE)?;

    if spec.shape == ShapeKind::Hollow {
        check_range(
            "inner_radius",
            spec.inner_radius,
            (INNER_RADIUS_MIN, max_inner_radius(spec.outer_radius)),
        )?;
    }

    Ok(())
}

pub fn validate_motion(motion: &MotionSpec) -> SimulationResult<()> {
    match *motion {
        MotionSpec::ForceUnwind { force, unwound_distance } => {
            check_range("force", force, FORCE_RANGE)?;
            check_range("unwound_distance", unwound_distance, UNWOUND_DISTANCE_RANGE)
        }
        MotionSpec::ConstantTorque { torque, duration } => {
            check_range("torque", torque, TORQUE_RANGE)?;
            check_range("duration", duration, DURATION_RANGE)
        }
    }
}

/// Bounds the number of frames a sampled trajectory can have.
pub fn validate_frame_rate(frame_rate: f64) -> SimulationResult<()> {
    check_range("fps", frame_rate, FRAME_RATE_RANGE)
}
