//! Physical and presentation constants for the cylinder model

/// Frame rate of the reference replay (frames per second)
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Fraction of the outer radius drawn as the hole of a thin-walled cylinder
pub const THIN_WALL_DISPLAY_RATIO: f64 = 0.9;

/// Clearance kept between the inner and outer radius of a hollow cylinder (m)
pub const INNER_RADIUS_CLEARANCE: f64 = 0.01;

// Parameter ranges accepted from the control panel, as (min, max)

/// Cylinder mass (kg)
pub const MASS_RANGE: (f64, f64) = (1.0, 100.0);

/// Outer radius (m)
pub const OUTER_RADIUS_RANGE: (f64, f64) = (0.05, 1.0);

/// Lower bound of the inner radius (m); the upper bound depends on the outer radius
pub const INNER_RADIUS_MIN: f64 = 0.01;

/// Force pulling the cord (N)
pub const FORCE_RANGE: (f64, f64) = (1.0, 50.0);

/// Cord length paid out (m)
pub const UNWOUND_DISTANCE_RANGE: (f64, f64) = (0.1, 5.0);

/// Constant applied torque (N·m)
pub const TORQUE_RANGE: (f64, f64) = (0.1, 10.0);

/// Duration of a constant-torque run (s)
pub const DURATION_RANGE: (f64, f64) = (0.1, 10.0);

/// Replay and plot sampling rate (Hz)
pub const FRAME_RATE_RANGE: (f64, f64) = (1.0, 240.0);

// Default slider positions

pub const DEFAULT_MASS_KG: f64 = 50.0;
pub const DEFAULT_OUTER_RADIUS_M: f64 = 0.06;
pub const DEFAULT_INNER_RADIUS_M: f64 = 0.03;
pub const DEFAULT_FORCE_N: f64 = 9.0;
pub const DEFAULT_UNWOUND_DISTANCE_M: f64 = 2.0;
pub const DEFAULT_TORQUE_NM: f64 = 0.54;
pub const DEFAULT_DURATION_S: f64 = 1.0;

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

/// Largest inner radius the control panel offers for a given outer radius.
///
/// Never drops below [`INNER_RADIUS_MIN`], so the slider range stays non-empty
/// for very thin cylinders.
pub fn max_inner_radius(outer_radius: f64) -> f64 {
    (outer_radius - INNER_RADIUS_CLEARANCE).max(INNER_RADIUS_MIN)
}
