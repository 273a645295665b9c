//! Column data for the three time-series plots drawn beside the replay:
//! angular velocity, rim velocity and the kinetic energies.

use serde::{Deserialize, Serialize};

use crate::kinematics::energy_at;
use crate::trajectory_sampling::Trajectory;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotSeries {
    pub time: Vec<f64>,
    pub angular_velocity: Vec<f64>,
    pub linear_velocity: Vec<f64>,
    pub rotational_energy: Vec<f64>,
    pub translational_energy: Vec<f64>,
    pub total_energy: Vec<f64>,
}

impl PlotSeries {
    /// Build the plot columns from a sampled trajectory.
    pub fn from_trajectory(trajectory: &Trajectory, inertia: f64, mass: f64) -> Self {
        let n = trajectory.len();
        let mut series = PlotSeries {
            time: Vec::with_capacity(n),
            angular_velocity: Vec::with_capacity(n),
            linear_velocity: Vec::with_capacity(n),
            rotational_energy: Vec::with_capacity(n),
            translational_energy: Vec::with_capacity(n),
            total_energy: Vec::with_capacity(n),
        };

        for s in trajectory {
            let energy = energy_at(inertia, mass, trajectory.radius(), s.angular_velocity);
            series.time.push(s.time);
            series.angular_velocity.push(s.angular_velocity);
            series.linear_velocity.push(s.linear_velocity);
            series.rotational_energy.push(energy.rotational);
            series.translational_energy.push(energy.translational);
            series.total_energy.push(energy.total);
        }

        series
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// x position of the vertical "current time" marker for a replay frame.
    /// Frames past the end pin the marker to the last sample.
    pub fn cursor(&self, frame: usize) -> Option<f64> {
        self.time.get(frame).or_else(|| self.time.last()).copied()
    }

    /// Upper y-limit of each plot as (ω, v, E_total), handy for axis scaling.
    pub fn peaks(&self) -> (f64, f64, f64) {
        (
            peak(&self.angular_velocity),
            peak(&self.linear_velocity),
            peak(&self.total_energy),
        )
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_sampling::sample;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_matches_trajectory() {
        let trajectory = sample(6.0, 1.0, 30.0, 0.06);
        let series = PlotSeries::from_trajectory(&trajectory, 0.09, 50.0);

        assert_eq!(series.len(), trajectory.len());
        assert_eq!(series.time[0], 0.0);
        assert_eq!(series.total_energy[0], 0.0);

        let last = series.len() - 1;
        assert_relative_eq!(series.angular_velocity[last], 6.0, epsilon = 1e-12);
        assert_relative_eq!(series.rotational_energy[last], 1.62, epsilon = 1e-12);
        assert_relative_eq!(series.translational_energy[last], 3.24, epsilon = 1e-12);
        assert_relative_eq!(series.total_energy[last], 4.86, epsilon = 1e-12);
    }

    #[test]
    fn test_energy_columns_sum() {
        let trajectory = sample(2.0, 3.0, 30.0, 0.4);
        let series = PlotSeries::from_trajectory(&trajectory, 1.2, 15.0);
        for i in 0..series.len() {
            assert_relative_eq!(
                series.total_energy[i],
                series.rotational_energy[i] + series.translational_energy[i]
            );
        }
    }

    #[test]
    fn test_cursor_and_peaks() {
        let trajectory = sample(6.0, 1.0, 30.0, 0.06);
        let series = PlotSeries::from_trajectory(&trajectory, 0.09, 50.0);

        assert_eq!(series.cursor(0), Some(0.0));
        assert_eq!(series.cursor(29), Some(1.0));
        assert_eq!(series.cursor(500), Some(1.0));
        assert_eq!(PlotSeries::default().cursor(0), None);

        let (omega, v, e) = series.peaks();
        assert_relative_eq!(omega, 6.0, epsilon = 1e-12);
        assert_relative_eq!(v, 0.36, epsilon = 1e-12);
        assert_relative_eq!(e, 4.86, epsilon = 1e-12);
    }
}
