//! Entry points used by the presentation layer

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FRAME_RATE;
use crate::kinematics::{derive_kinematics, KinematicSummary};
use crate::motion::{resolve_motion, MotionResult, MotionSpec};
use crate::replay::ReplaySession;
use crate::series::PlotSeries;
use crate::shape::{compute_moment_of_inertia, CylinderSpec, ModelWarning, MomentOfInertia};
use crate::trajectory_sampling::{sample, Trajectory};

/// Presentation settings shared by every evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub frame_rate: f64, // Hz
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

/// Everything derived from one (cylinder, motion) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub cylinder: CylinderSpec,
    pub motion_spec: MotionSpec,
    pub inertia: MomentOfInertia,
    pub motion: MotionResult,
    pub kinematics: KinematicSummary,
    pub warnings: Vec<ModelWarning>,
}

/// Compute inertia, motion and end-of-run kinematics.
///
/// Never fails: invalid hollow geometry is reported in `warnings` and the
/// numbers are computed anyway.
pub fn evaluate(cylinder: &CylinderSpec, motion_spec: &MotionSpec) -> Evaluation {
    let inertia = compute_moment_of_inertia(cylinder);
    let motion = resolve_motion(inertia, cylinder, motion_spec);
    let kinematics = derive_kinematics(
        inertia.value(),
        cylinder.mass,
        cylinder.outer_radius,
        motion.angular_accel,
        motion.final_angular_velocity,
    );

    Evaluation {
        cylinder: *cylinder,
        motion_spec: *motion_spec,
        inertia,
        motion,
        kinematics,
        warnings: cylinder.geometry_warning().into_iter().collect(),
    }
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn trajectory(&self, frame_rate: f64) -> Trajectory {
        sample(
            self.motion.angular_accel,
            self.motion.duration,
            frame_rate,
            self.cylinder.outer_radius,
        )
    }

    pub fn plot_series(&self, frame_rate: f64) -> PlotSeries {
        PlotSeries::from_trajectory(
            &self.trajectory(frame_rate),
            self.inertia.value(),
            self.cylinder.mass,
        )
    }

    pub fn replay(&self, config: &SimulationConfig) -> ReplaySession {
        ReplaySession::new(self.trajectory(config.frame_rate))
            .with_hole_radius(self.cylinder.display_inner_radius())
    }
}
