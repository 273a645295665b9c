use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_MASS_KG, DEFAULT_OUTER_RADIUS_M, THIN_WALL_DISPLAY_RATIO};

/// Cross-section of the rotating cylinder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Solid,
    Hollow,
    ThinWalled,
}

impl ShapeKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "solid" => Some(ShapeKind::Solid),
            "hollow" => Some(ShapeKind::Hollow),
            "thin_walled" | "thin" => Some(ShapeKind::ThinWalled),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Solid => "solid",
            ShapeKind::Hollow => "hollow",
            ShapeKind::ThinWalled => "thin-walled",
        };
        write!(f, "{}", name)
    }
}

/// Non-fatal problems found while evaluating a cylinder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelWarning {
    /// Hollow cylinder whose inner radius is not smaller than its outer radius.
    /// The inertia is still computed but has no physical meaning.
    InvalidGeometry { inner_radius: f64, outer_radius: f64 },
}

impl fmt::Display for ModelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelWarning::InvalidGeometry { inner_radius, outer_radius } => write!(
                f,
                "inner radius {:.3} m must be smaller than outer radius {:.3} m",
                inner_radius, outer_radius
            ),
        }
    }
}

/// Physical description of the cylinder the cord is wound around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    pub mass: f64,          // kg
    pub outer_radius: f64,  // m
    pub shape: ShapeKind,
    pub inner_radius: f64,  // m, only meaningful for hollow cylinders
}

impl Default for CylinderSpec {
    fn default() -> Self {
        Self::solid(DEFAULT_MASS_KG, DEFAULT_OUTER_RADIUS_M)
    }
}

impl CylinderSpec {
    pub fn solid(mass: f64, outer_radius: f64) -> Self {
        Self {
            mass,
            outer_radius,
            shape: ShapeKind::Solid,
            inner_radius: 0.0,
        }
    }

    pub fn hollow(mass: f64, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            mass,
            outer_radius,
            shape: ShapeKind::Hollow,
            inner_radius,
        }
    }

    pub fn thin_walled(mass: f64, outer_radius: f64) -> Self {
        Self {
            mass,
            outer_radius,
            shape: ShapeKind::ThinWalled,
            inner_radius: 0.0,
        }
    }

    /// Inner radius as used by the model: zero unless the cylinder is hollow.
    pub fn effective_inner_radius(&self) -> f64 {
        match self.shape {
            ShapeKind::Hollow => self.inner_radius,
            ShapeKind::Solid | ShapeKind::ThinWalled => 0.0,
        }
    }

    /// Check the hollow-cylinder precondition r < R.
    pub fn geometry_warning(&self) -> Option<ModelWarning> {
        if self.shape == ShapeKind::Hollow && self.inner_radius >= self.outer_radius {
            Some(ModelWarning::InvalidGeometry {
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
            })
        } else {
            None
        }
    }

    /// Radius of the hole drawn in the replay, if any.
    ///
    /// Thin-walled cylinders get a cosmetic hole at 90% of the outer radius.
    pub fn display_inner_radius(&self) -> Option<f64> {
        match self.shape {
            ShapeKind::Solid => None,
            ShapeKind::Hollow if self.inner_radius > 0.0 => Some(self.inner_radius),
            ShapeKind::Hollow => None,
            ShapeKind::ThinWalled => {
                let r = self.outer_radius * THIN_WALL_DISPLAY_RATIO;
                if r > 0.0 {
                    Some(r)
                } else {
                    None
                }
            }
        }
    }
}

/// Moment of inertia about the cylinder axis (kg·m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentOfInertia(f64);

impl MomentOfInertia {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for MomentOfInertia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} kg·m²", self.0)
    }
}

/// Compute the moment of inertia for the given cross-section.
///
/// * Solid: I = ½·m·R²
/// * Hollow: I = ½·m·(R² + r²)
/// * Thin-walled: I = m·R²
///
/// A hollow cylinder with r ≥ R still yields a finite value; callers can
/// detect that case with [`CylinderSpec::geometry_warning`].
pub fn compute_moment_of_inertia(spec: &CylinderSpec) -> MomentOfInertia {
    let m = spec.mass;
    let r_out = spec.outer_radius;

    let inertia = match spec.shape {
        ShapeKind::Solid => 0.5 * m * r_out * r_out,
        ShapeKind::Hollow => {
            let r_in = spec.inner_radius;
            0.5 * m * (r_out * r_out + r_in * r_in)
        }
        ShapeKind::ThinWalled => m * r_out * r_out,
    };

    if let Some(warning) = spec.geometry_warning() {
        log::warn!("{}", warning);
    }

    MomentOfInertia(inertia.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_kind_from_str() {
        assert_eq!(ShapeKind::from_str("solid"), Some(ShapeKind::Solid));
        assert_eq!(ShapeKind::from_str("Hollow"), Some(ShapeKind::Hollow));
        assert_eq!(ShapeKind::from_str("thin-walled"), Some(ShapeKind::ThinWalled));
        assert_eq!(ShapeKind::from_str("THIN_WALLED"), Some(ShapeKind::ThinWalled));
        assert_eq!(ShapeKind::from_str("cube"), None);
    }

    #[test]
    fn test_solid_inertia() {
        let spec = CylinderSpec::solid(50.0, 0.06);
        assert_relative_eq!(compute_moment_of_inertia(&spec).value(), 0.09, epsilon = 1e-12);
    }

    #[test]
    fn test_hollow_inertia() {
        let spec = CylinderSpec::hollow(50.0, 0.06, 0.03);
        // 0.5 * 50 * (0.0036 + 0.0009)
        assert_relative_eq!(compute_moment_of_inertia(&spec).value(), 0.1125, epsilon = 1e-12);
        assert!(spec.geometry_warning().is_none());
    }

    #[test]
    fn test_thin_walled_is_twice_solid() {
        let solid = compute_moment_of_inertia(&CylinderSpec::solid(12.0, 0.4));
        let thin = compute_moment_of_inertia(&CylinderSpec::thin_walled(12.0, 0.4));
        assert_relative_eq!(thin.value(), 2.0 * solid.value(), epsilon = 1e-12);
    }

    #[test]
    fn test_inner_radius_ignored_for_solid() {
        let mut spec = CylinderSpec::solid(10.0, 0.5);
        spec.inner_radius = 0.3;
        assert_eq!(spec.effective_inner_radius(), 0.0);
        assert_relative_eq!(compute_moment_of_inertia(&spec).value(), 1.25, epsilon = 1e-12);
        assert!(spec.geometry_warning().is_none());
    }

    #[test]
    fn test_invalid_hollow_geometry_is_flagged_not_rejected() {
        let spec = CylinderSpec::hollow(10.0, 0.1, 0.2);
        let inertia = compute_moment_of_inertia(&spec);
        assert!(inertia.value().is_finite());
        assert_relative_eq!(inertia.value(), 0.5 * 10.0 * (0.01 + 0.04), epsilon = 1e-12);
        assert_eq!(
            spec.geometry_warning(),
            Some(ModelWarning::InvalidGeometry {
                inner_radius: 0.2,
                outer_radius: 0.1
            })
        );

        // Equal radii are invalid too
        assert!(CylinderSpec::hollow(10.0, 0.1, 0.1).geometry_warning().is_some());
    }

    #[test]
    fn test_display_inner_radius() {
        assert_eq!(CylinderSpec::solid(1.0, 0.5).display_inner_radius(), None);
        assert_eq!(CylinderSpec::hollow(1.0, 0.5, 0.2).display_inner_radius(), Some(0.2));
        assert_eq!(CylinderSpec::hollow(1.0, 0.5, 0.0).display_inner_radius(), None);
        let thin = CylinderSpec::thin_walled(1.0, 0.5).display_inner_radius().unwrap();
        assert_relative_eq!(thin, 0.45, epsilon = 1e-12);
    }
}
