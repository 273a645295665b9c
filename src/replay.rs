//! Frame-by-frame replay of a sampled trajectory.
//!
//! A [`ReplaySession`] owns one trajectory and walks it once:
//! `NotStarted -> Playing(0) -> ... -> Playing(N-1) -> Finished`.
//! Each tick hands the current [`ReplayState`] and [`ReplayFrame`] to a
//! single rendering step, which moves the marker, the cord and the plot
//! cursors together.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::trajectory_sampling::{KinematicSample, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayState {
    NotStarted,
    Playing(usize),
    Finished,
}

/// Drawing geometry for one frame, in metres with the axis at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    pub sample: KinematicSample,
    /// Tip of the radial marker line drawn from the axis
    pub marker_tip: Point2<f64>,
    /// Point where the cord leaves the cylinder
    pub cord_start: Point2<f64>,
    /// Free end of the unwound cord
    pub cord_end: Point2<f64>,
    /// Radius of the hole drawn inside the body, if the shape has one
    pub hole_radius: Option<f64>,
}

impl ReplayFrame {
    pub fn new(sample: KinematicSample, radius: f64, hole_radius: Option<f64>) -> Self {
        let theta = sample.angle;
        // The cord leaves the left side of the rim and runs horizontally outward
        let cord_start = Point2::new(-radius, 0.0);
        let cord_end = Point2::new(-radius - sample.unwound_length, 0.0);

        Self {
            sample,
            marker_tip: Point2::new(radius * theta.cos(), radius * theta.sin()),
            cord_start,
            cord_end,
            hole_radius,
        }
    }

    /// Time at which the plot cursors are drawn for this frame.
    pub fn cursor_time(&self) -> f64 {
        self.sample.time
    }

    pub fn cord_length(&self) -> f64 {
        nalgebra::distance(&self.cord_start, &self.cord_end)
    }
}

/// Rendering step invoked once per replay tick.
///
/// Implementations own whatever drawing surface they use and must release it
/// on every exit path; the session keeps no reference to it between ticks.
pub trait FrameSink {
    type Error;

    fn render_frame(&mut self, state: &ReplayState, frame: &ReplayFrame) -> Result<(), Self::Error>;
}

impl<F, E> FrameSink for F
where
    F: FnMut(&ReplayState, &ReplayFrame) -> Result<(), E>,
{
    type Error = E;

    fn render_frame(&mut self, state: &ReplayState, frame: &ReplayFrame) -> Result<(), E> {
        self(state, frame)
    }
}

/// The single active replay
#[derive(Debug, Clone)]
pub struct ReplaySession {
    trajectory: Trajectory,
    hole_radius: Option<f64>,
    state: ReplayState,
}

impl ReplaySession {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            trajectory,
            hole_radius: None,
            state: ReplayState::NotStarted,
        }
    }

    /// Draw a hole of the given radius in every frame.
    pub fn with_hole_radius(mut self, hole_radius: Option<f64>) -> Self {
        self.hole_radius = hole_radius;
        self
    }

    pub fn hole_radius(&self) -> Option<f64> {
        self.hole_radius
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn is_finished(&self) -> bool {
        self.state == ReplayState::Finished
    }

    /// Replace the trajectory after a parameter change. Progress is discarded.
    pub fn reset(&mut self, trajectory: Trajectory, hole_radius: Option<f64>) {
        log::debug!("replay reset with {} frames", trajectory.len());
        self.trajectory = trajectory;
        self.hole_radius = hole_radius;
        self.state = ReplayState::NotStarted;
    }

    /// Frame for the current state, if playing.
    pub fn current_frame(&self) -> Option<ReplayFrame> {
        match self.state {
            ReplayState::Playing(index) => self
                .trajectory
                .get(index)
                .map(|sample| ReplayFrame::new(sample, self.trajectory.radius(), self.hole_radius)),
            ReplayState::NotStarted | ReplayState::Finished => None,
        }
    }

    /// NotStarted -> Playing(0). Has no effect in any other state.
    pub fn start(&mut self) -> Option<ReplayFrame> {
        if self.state == ReplayState::NotStarted {
            self.state = ReplayState::Playing(0);
        }
        self.current_frame()
    }

    /// Advance one frame. Playing(N-1) moves to Finished; Finished is terminal.
    pub fn tick(&mut self) -> Option<ReplayFrame> {
        self.state = match self.state {
            ReplayState::Playing(index) if index + 1 < self.trajectory.len() => {
                ReplayState::Playing(index + 1)
            }
            ReplayState::Playing(_) => ReplayState::Finished,
            other => other,
        };
        self.current_frame()
    }

    /// Play from the current position to the end, rendering every frame.
    ///
    /// Returns the number of frames rendered. A sink error stops the replay
    /// at the failing frame and is returned to the caller.
    pub fn play<S: FrameSink>(&mut self, sink: &mut S) -> Result<usize, S::Error> {
        let mut rendered = 0;
        let mut frame = match self.state {
            ReplayState::NotStarted => self.start(),
            _ => self.current_frame(),
        };

        while let Some(current) = frame {
            sink.render_frame(&self.state, &current)?;
            rendered += 1;
            frame = self.tick();
        }

        log::debug!("replay finished after {} frames", rendered);
        Ok(rendered)
    }
}
