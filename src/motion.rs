use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FORCE_N, DEFAULT_UNWOUND_DISTANCE_M};
use crate::shape::{CylinderSpec, MomentOfInertia};

/// How the driving action on the cord is described
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MotionSpec {
    /// Pull the cord with a constant force until a given length has unwound
    ForceUnwind {
        force: f64,            // N
        unwound_distance: f64, // m
    },
    /// Apply a constant torque for a fixed time
    ConstantTorque {
        torque: f64,   // N·m
        duration: f64, // s
    },
}

impl Default for MotionSpec {
    fn default() -> Self {
        MotionSpec::ForceUnwind {
            force: DEFAULT_FORCE_N,
            unwound_distance: DEFAULT_UNWOUND_DISTANCE_M,
        }
    }
}

/// Uniformly accelerated rotation from rest, fully described by α and t_final
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionResult {
    pub angular_accel: f64,          // rad/s²
    pub final_angular_velocity: f64, // rad/s
    pub final_angle: f64,            // rad
    pub duration: f64,               // s
    pub unwound_distance: f64,       // m
    pub applied_torque: f64,         // N·m
}

/// Derive the constant angular acceleration and end state of the motion.
///
/// The body always starts at rest. Degenerate inputs (zero inertia, zero
/// radius, no motion) resolve to zeros instead of dividing by zero.
pub fn resolve_motion(
    inertia: MomentOfInertia,
    cylinder: &CylinderSpec,
    motion: &MotionSpec,
) -> MotionResult {
    let i = inertia.value();
    let radius = cylinder.outer_radius;

    let result = match *motion {
        MotionSpec::ForceUnwind { force, unwound_distance } => {
            resolve_force_unwind(i, radius, force, unwound_distance)
        }
        MotionSpec::ConstantTorque { torque, duration } => {
            resolve_constant_torque(i, radius, torque, duration)
        }
    };

    log::debug!(
        "resolved motion: alpha={:.6} rad/s², omega_f={:.6} rad/s, theta_f={:.6} rad, t_f={:.6} s",
        result.angular_accel,
        result.final_angular_velocity,
        result.final_angle,
        result.duration
    );

    result
}

/// Work-energy method: W = F·d = ½Iω², then α from ω² = 2αθ.
fn resolve_force_unwind(i: f64, radius: f64, force: f64, unwound_distance: f64) -> MotionResult {
    let work = force * unwound_distance;

    let final_angular_velocity = if i > 0.0 { (2.0 * work / i).sqrt() } else { 0.0 };
    let final_angle = if radius > 0.0 { unwound_distance / radius } else { 0.0 };

    let angular_accel = if final_angle > 0.0 && final_angular_velocity > 0.0 {
        final_angular_velocity * final_angular_velocity / (2.0 * final_angle)
    } else {
        0.0
    };

    let duration = if angular_accel > 0.0 {
        final_angular_velocity / angular_accel
    } else {
        0.0
    };

    MotionResult {
        angular_accel,
        final_angular_velocity,
        final_angle,
        duration,
        unwound_distance,
        applied_torque: i * angular_accel,
    }
}

/// Newton's second law for rotation: α = τ / I.
fn resolve_constant_torque(i: f64, radius: f64, torque: f64, duration: f64) -> MotionResult {
    let angular_accel = if i > 0.0 { torque / i } else { 0.0 };
    let final_angular_velocity = angular_accel * duration;
    let final_angle = 0.5 * angular_accel * duration * duration;

    MotionResult {
        angular_accel,
        final_angular_velocity,
        final_angle,
        duration,
        unwound_distance: final_angle * radius,
        applied_torque: torque,
    }
}
