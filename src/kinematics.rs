use serde::{Deserialize, Serialize};

/// Kinetic energy split at one instant (J)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub rotational: f64,
    pub translational: f64,
    pub total: f64,
}

/// End-of-run quantities shown next to the animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSummary {
    pub linear_velocity: f64,  // m/s at the rim
    pub tangential_accel: f64, // m/s²
    pub energy: EnergyBreakdown,
}

/// Kinetic energies for angular velocity `omega`.
///
/// The translational term is ½·m·v² of the rim point (the unwinding cord),
/// using the full body mass. It is not the centre-of-mass energy, which is
/// zero for rotation about a fixed axis.
pub fn energy_at(inertia: f64, mass: f64, radius: f64, omega: f64) -> EnergyBreakdown {
    let linear_velocity = omega * radius;
    let rotational = 0.5 * inertia * omega * omega;
    let translational = 0.5 * mass * linear_velocity * linear_velocity;

    EnergyBreakdown {
        rotational,
        translational,
        total: rotational + translational,
    }
}

/// Rim velocity, tangential acceleration and energies at the end of the run.
pub fn derive_kinematics(
    inertia: f64,
    mass: f64,
    radius: f64,
    angular_accel: f64,
    final_angular_velocity: f64,
) -> KinematicSummary {
    KinematicSummary {
        linear_velocity: final_angular_velocity * radius,
        tangential_accel: angular_accel * radius,
        energy: energy_at(inertia, mass, radius, final_angular_velocity),
    }
}
