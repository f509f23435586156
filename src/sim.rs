//! Simulation driver: advances the drive angle over wall-clock time and
//! maintains the bounded trace and metric buffers.
use crate::geom::Point;
use crate::mech::{MechKind, MechState};
use crate::metric::MetricPoint;
use std::collections::VecDeque;
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// Capacity of the tracked-point trace buffer.
pub const TRACE_CAP: usize = 400;
/// Capacity of the derived-metric history buffer.
pub const HISTORY_CAP: usize = 200;

/// Drive-angle advance per millisecond at unit speed.
const ANGLE_RATE: f64 = 2e-3;

/// Playback state of the driver.
///
/// Transitions happen only through [`Driver::set_playing`]; no internal
/// condition pauses the simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    /// Ticks advance the drive angle.
    #[default]
    Running,
    /// The angle is frozen; the solver still runs every tick.
    Paused,
}

impl PlayState {
    /// Return true while ticks advance the angle.
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// A fixed-capacity FIFO that discards the oldest element on overflow.
#[derive(Clone, Debug)]
pub struct Ring<T> {
    buf: VecDeque<T>,
    cap: usize,
}

impl<T> Ring<T> {
    /// Create an empty ring of capacity `cap`.
    pub fn new(cap: usize) -> Self {
        Self { buf: VecDeque::with_capacity(cap), cap }
    }

    /// Append a value, dropping the oldest when full.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drop all stored values.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// The newest value, if any.
    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }
}

/// Error for a parameter edit the active schema does not declare.
#[derive(Debug, thiserror::Error)]
#[error("unknown parameter id {id:?} for mechanism {kind}")]
pub struct ParamError {
    /// The rejected parameter id.
    pub id: String,
    /// The active mechanism.
    pub kind: MechKind,
}

/// Tick-driven simulation of one mechanism.
///
/// The driver owns all mutable simulation state: the drive angle, the
/// parameter values, the trace ring and the metric history. Instances are
/// independent; run one per displayed mechanism.
#[derive(Debug)]
pub struct Driver {
    kind: MechKind,
    values: Vec<f64>,
    angle: f64,
    speed: f64,
    play: PlayState,
    trace: Ring<Point>,
    history: Ring<MetricPoint>,
}

impl Driver {
    /// Create a running driver at angle zero with the schema defaults.
    pub fn new(kind: MechKind) -> Self {
        Self {
            kind,
            values: kind.default_values(),
            angle: 0.,
            speed: 1.,
            play: PlayState::Running,
            trace: Ring::new(TRACE_CAP),
            history: Ring::new(HISTORY_CAP),
        }
    }

    /// The active mechanism.
    pub fn kind(&self) -> MechKind {
        self.kind
    }

    /// Current drive angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current playback state.
    pub fn play_state(&self) -> PlayState {
        self.play
    }

    /// Current parameter values, aligned with the active schema.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Tracked-point path, oldest to newest.
    pub fn trace(&self) -> &Ring<Point> {
        &self.trace
    }

    /// Derived-metric history, oldest to newest.
    pub fn history(&self) -> &Ring<MetricPoint> {
        &self.history
    }

    /// Advance by `dt_ms` wall-clock milliseconds and solve.
    ///
    /// While running, the angle advances by `speed * dt_ms` at the fixed
    /// rate constant, modulo 2π. While paused, the angle is frozen but the
    /// solver still runs so parameter edits show up at the frozen angle.
    /// Valid states feed the trace and metric buffers only while running;
    /// an infeasible state leaves both buffers untouched.
    pub fn advance(&mut self, dt_ms: f64) -> MechState {
        if self.play.is_running() {
            self.angle = (self.angle + self.speed * dt_ms * ANGLE_RATE).rem_euclid(TAU);
        }
        let state = self.kind.solve(self.angle, &self.values);
        if !state.is_valid {
            trace!(kind = %self.kind, angle = self.angle, "infeasible configuration");
        } else if self.play.is_running() {
            for p in &state.trace {
                self.trace.push(*p);
            }
            if let Some(value) = self.kind.metric(&state) {
                self.history.push(MetricPoint { angle: self.angle, value });
            }
        }
        state
    }

    /// Switch between [`PlayState::Running`] and [`PlayState::Paused`].
    pub fn set_playing(&mut self, playing: bool) {
        self.play = if playing { PlayState::Running } else { PlayState::Paused };
    }

    /// Set the playback speed multiplier.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Edit one parameter by schema id, clamped to its declared interval.
    ///
    /// Any accepted edit resets the drive angle and clears the trace, since
    /// a path drawn under different link lengths is stale geometry. The
    /// metric history survives parameter edits.
    pub fn on_param_change(&mut self, id: &str, value: f64) -> Result<(), ParamError> {
        let Some(i) = self.kind.params().iter().position(|p| p.id == id) else {
            return Err(ParamError { id: id.to_string(), kind: self.kind });
        };
        let clamped = self.kind.params()[i].clamp(value);
        debug!(kind = %self.kind, id, value = clamped, "parameter changed");
        self.values[i] = clamped;
        self.reset_motion();
        Ok(())
    }

    /// Switch the active mechanism, restoring its schema defaults.
    ///
    /// Clears the angle, the trace and the metric history.
    pub fn on_mechanism_change(&mut self, kind: MechKind) {
        debug!(from = %self.kind, to = %kind, "mechanism changed");
        self.kind = kind;
        self.values = kind.default_values();
        self.reset_motion();
        self.history.clear();
    }

    fn reset_motion(&mut self) {
        self.angle = 0.;
        self.trace.clear();
    }
}
