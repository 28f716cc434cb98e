//! Animated camera transition between two globe orientations.
//!
//! A transition is an explicit two-state machine:
//!
//! ```text
//! Idle --run()--> Animating --tick() reaches t=1--> Idle
//!                     |
//!                     +--run() again / handle.cancel()--> superseded, no side effects
//! ```
//!
//! While animating, each [`ViewTransition::tick`] rewrites the projection
//! rotation and asks the renderer for a full redraw. Only the final tick
//! places the marker and then commits the orientation, so the orientation
//! is written exactly once per run.

use super::{Easing, GlobeRenderer, LongitudePath, RotationInterpolator};
use crate::error::Result;
use crate::geo::{GeoCoordinate, ProjectionState};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Wall-clock length of one transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Parameters captured by a run when it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
    pub longitude_path: LongitudePath,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            longitude_path: LongitudePath::default(),
        }
    }
}

/// Cancellation handle for a single run.
///
/// Cloned handles share the same flag. Cancelling suppresses all remaining
/// frames and the completion side effects of that run.
#[derive(Debug, Clone)]
pub struct TransitionHandle {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl TransitionHandle {
    fn new(id: u64) -> Self {
        Self {
            id,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Debug)]
struct ActiveRun {
    handle: TransitionHandle,
    target: GeoCoordinate,
    interpolator: RotationInterpolator,
    /// Clock time (seconds) the run started at
    started_at: f64,
    duration: Duration,
    easing: Easing,
}

impl ActiveRun {
    /// Linear progress in [0, 1].
    fn progress(&self, now: f64) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs <= 0.0 {
            return 1.0;
        }
        // max() also maps a NaN clock reading to zero elapsed time.
        let elapsed = (now - self.started_at).max(0.0);
        (elapsed / secs).min(1.0)
    }
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Animating(ActiveRun),
}

/// Result of advancing the transition by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing running; no redraw was requested.
    Idle,
    /// An intermediate frame was drawn at linear `progress`.
    Frame { id: u64, progress: f64 },
    /// The final frame was drawn, the marker placed and the orientation committed.
    Completed { id: u64, target: GeoCoordinate },
    /// The run was cancelled through its handle; nothing was drawn.
    Cancelled { id: u64 },
}

/// Drives the camera from the current orientation to a target coordinate.
#[derive(Debug, Default)]
pub struct ViewTransition {
    phase: Phase,
    config: TransitionConfig,
    next_id: u64,
}

impl ViewTransition {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Replaces the configuration. A run already in flight keeps its own.
    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// Target of the run in flight.
    pub fn target(&self) -> Option<GeoCoordinate> {
        match &self.phase {
            Phase::Animating(run) => Some(run.target),
            Phase::Idle => None,
        }
    }

    /// Interpolator of the run in flight.
    #[cfg(test)]
    pub fn interpolator(&self) -> Option<&RotationInterpolator> {
        match &self.phase {
            Phase::Animating(run) => Some(&run.interpolator),
            Phase::Idle => None,
        }
    }

    /// Linear progress of the run in flight at clock time `now`.
    pub fn progress(&self, now: f64) -> Option<f64> {
        match &self.phase {
            Phase::Animating(run) => Some(run.progress(now)),
            Phase::Idle => None,
        }
    }

    /// Starts a transition towards `target` at clock time `now` (seconds).
    ///
    /// A malformed target is rejected without touching any state. Otherwise
    /// the run in flight, if any, is cancelled first, and the new run
    /// interpolates from the projection's settled orientation.
    pub fn run(
        &mut self,
        target: GeoCoordinate,
        projection: &ProjectionState,
        now: f64,
    ) -> Result<TransitionHandle> {
        let target = target.validate()?;

        if let Phase::Animating(previous) = &self.phase {
            previous.handle.cancel();
            log::debug!("Superseding transition #{}", previous.handle.id());
        }

        let origin = projection.orientation();
        let interpolator = RotationInterpolator::new(
            origin.to_rotation(),
            target.to_rotation(),
            self.config.longitude_path,
        );

        let handle = TransitionHandle::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        log::info!(
            "Transition #{}: ({:.3}, {:.3}) -> ({:.3}, {:.3}) over {} ms",
            handle.id(),
            origin.latitude,
            origin.longitude,
            target.latitude,
            target.longitude,
            self.config.duration.as_millis()
        );

        self.phase = Phase::Animating(ActiveRun {
            handle: handle.clone(),
            target,
            interpolator,
            started_at: now,
            duration: self.config.duration,
            easing: self.config.easing,
        });

        Ok(handle)
    }

    /// Cancels the run in flight. Returns false when idle.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::Animating(run) => {
                run.handle.cancel();
                log::debug!("Cancelled transition #{}", run.handle.id());
                true
            }
            Phase::Idle => false,
        }
    }

    /// Advances the run in flight to clock time `now`.
    ///
    /// Call once per rendered frame.
    pub fn tick<R>(
        &mut self,
        now: f64,
        projection: &mut ProjectionState,
        renderer: &mut R,
    ) -> TickOutcome
    where
        R: GlobeRenderer + ?Sized,
    {
        let run = match std::mem::take(&mut self.phase) {
            Phase::Idle => return TickOutcome::Idle,
            Phase::Animating(run) => run,
        };
        let id = run.handle.id();

        if run.handle.is_cancelled() {
            log::debug!("Dropping cancelled transition #{}", id);
            return TickOutcome::Cancelled { id };
        }

        let progress = run.progress(now);
        projection.set_rotation(run.interpolator.at(run.easing.apply(progress)));
        renderer.redraw_all(projection);

        if progress < 1.0 {
            self.phase = Phase::Animating(run);
            return TickOutcome::Frame { id, progress };
        }

        // Final frame: the rotation now equals the target's exactly.
        let point = projection.project(run.target);
        renderer.place_marker(run.target, point);
        projection.set_orientation(run.target);

        log::info!(
            "Transition #{} settled at ({:.3}, {:.3})",
            id,
            run.target.latitude,
            run.target.longitude
        );

        TickOutcome::Completed {
            id,
            target: run.target,
        }
    }
}
