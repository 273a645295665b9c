use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Kinematic state of the cylinder at one replay frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSample {
    pub frame: usize,
    pub time: f64,             // s
    pub angle: f64,            // rad
    pub angular_velocity: f64, // rad/s
    pub linear_velocity: f64,  // m/s
    pub tangential_accel: f64, // m/s²
    pub unwound_length: f64,   // m
}

/// Closed-form trajectory of a uniformly accelerated rotation, sampled on an
/// evenly spaced time grid.
///
/// Samples are computed on demand; the trajectory holds no per-frame state,
/// so every call to [`Trajectory::iter`] starts again from frame 0 and yields
/// the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    angular_accel: f64,
    duration: f64,
    frame_rate: f64,
    radius: f64,
    frame_count: usize,
}

/// Sample the motion θ(t) = ½αt² from t = 0 to `duration` at `frame_rate`.
///
/// Produces max(1, ⌊duration · frame_rate⌋) frames spread evenly over
/// [0, duration], both ends included. A non-positive duration yields a
/// single frame at rest.
pub fn sample(angular_accel: f64, duration: f64, frame_rate: f64, radius: f64) -> Trajectory {
    let frame_count = frame_count(duration, frame_rate);

    log::debug!(
        "sampling trajectory: alpha={:.6} rad/s², t_f={:.6} s, {} frames at {} Hz",
        angular_accel,
        duration,
        frame_count,
        frame_rate
    );

    Trajectory {
        angular_accel,
        duration: if duration > 0.0 { duration } else { 0.0 },
        frame_rate,
        radius,
        frame_count,
    }
}

fn frame_count(duration: f64, frame_rate: f64) -> usize {
    let frames = (duration * frame_rate).floor();
    if frames.is_finite() && frames >= 1.0 {
        frames as usize
    } else {
        1
    }
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.frame_count
    }

    /// Always false: a trajectory has at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    pub fn angular_accel(&self) -> f64 {
        self.angular_accel
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Spacing of the time grid; zero for a single-frame trajectory.
    pub fn frame_interval(&self) -> f64 {
        if self.frame_count > 1 {
            self.duration / (self.frame_count - 1) as f64
        } else {
            0.0
        }
    }

    /// Time of frame `index` on the grid, clamped to [0, duration].
    pub fn time_at(&self, index: usize) -> f64 {
        if self.frame_count <= 1 {
            return 0.0;
        }
        let fraction = index as f64 / (self.frame_count - 1) as f64;
        (fraction * self.duration).clamp(0.0, self.duration)
    }

    pub fn get(&self, index: usize) -> Option<KinematicSample> {
        if index >= self.frame_count {
            return None;
        }
        Some(self.state_at(index, self.time_at(index)))
    }

    pub fn first(&self) -> Option<KinematicSample> {
        self.get(0)
    }

    pub fn last(&self) -> Option<KinematicSample> {
        self.frame_count.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> SampleIter {
        SampleIter {
            trajectory: *self,
            front: 0,
            back: self.frame_count,
        }
    }

    pub fn to_vec(&self) -> Vec<KinematicSample> {
        self.iter().collect()
    }

    fn state_at(&self, frame: usize, time: f64) -> KinematicSample {
        let alpha = self.angular_accel;
        let angle = 0.5 * alpha * time * time;
        let angular_velocity = alpha * time;

        KinematicSample {
            frame,
            time,
            angle,
            angular_velocity,
            linear_velocity: angular_velocity * self.radius,
            tangential_accel: alpha * self.radius,
            unwound_length: angle * self.radius,
        }
    }
}

impl IntoIterator for &Trajectory {
    type Item = KinematicSample;
    type IntoIter = SampleIter;

    fn into_iter(self) -> SampleIter {
        self.iter()
    }
}

/// Iterator over the frames of a [`Trajectory`]
#[derive(Debug, Clone)]
pub struct SampleIter {
    trajectory: Trajectory,
    front: usize,
    back: usize,
}

impl Iterator for SampleIter {
    type Item = KinematicSample;

    fn next(&mut self) -> Option<KinematicSample> {
        if self.front >= self.back {
            return None;
        }
        let sample = self.trajectory.get(self.front);
        self.front += 1;
        sample
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<KinematicSample> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for SampleIter {
    fn next_back(&mut self) -> Option<KinematicSample> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.trajectory.get(self.back)
    }
}

impl ExactSizeIterator for SampleIter {}

impl FusedIterator for SampleIter {}
