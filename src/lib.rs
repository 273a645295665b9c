//! # Cylinder Unwind
//!
//! Rotational kinematics of a cylinder unwinding a cord: moment of inertia,
//! uniformly accelerated motion from a force or a torque, and frame sampling
//! for animated replays and time-series plots.

// Re-export the main types and functions
pub use shape::{compute_moment_of_inertia, CylinderSpec, ModelWarning, MomentOfInertia, ShapeKind};
pub use motion::{resolve_motion, MotionResult, MotionSpec};
pub use kinematics::{derive_kinematics, energy_at, EnergyBreakdown, KinematicSummary};
pub use trajectory_sampling::{sample, KinematicSample, SampleIter, Trajectory};
pub use series::PlotSeries;
pub use replay::{FrameSink, ReplayFrame, ReplaySession, ReplayState};
pub use cache::TrajectoryCache;
pub use simulation::{evaluate, Evaluation, SimulationConfig};
pub use error::{SimulationError, SimulationResult};

// Module declarations
pub mod constants;
pub mod params;
mod shape;
mod motion;
mod kinematics;
mod trajectory_sampling;
mod series;
mod replay;
mod cache;
mod simulation;
mod error;
