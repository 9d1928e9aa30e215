use nalgebra::Vector3;

use super::state::State;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Craft entered the arrival radius around the target.
    Arrival,
    /// Craft slowed below the settle speed inside the arrival radius.
    Settled,
    Custom(String),
}

/// A discrete event observed during a simulated flight.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Fires once when the distance to `target` drops inside `radius`.
pub struct ArrivalDetector {
    pub target: Vector3<f64>,
    pub radius: f64,
    fired: bool,
}

impl ArrivalDetector {
    pub fn new(target: Vector3<f64>, radius: f64) -> Self {
        Self { target, radius, fired: false }
    }
}

impl EventDetector for ArrivalDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let was_out = (prev.pos - self.target).norm() > self.radius;
        let is_in = (current.pos - self.target).norm() <= self.radius;
        if was_out && is_in {
            self.fired = true;
            Some(EventKind::Arrival)
        } else {
            None
        }
    }
}

/// Fires once when speed drops below `speed` within `radius` of `target`.
pub struct SettleDetector {
    pub target: Vector3<f64>,
    pub radius: f64,
    pub speed: f64,
    fired: bool,
}

impl SettleDetector {
    pub fn new(target: Vector3<f64>, radius: f64, speed: f64) -> Self {
        Self { target, radius, speed, fired: false }
    }
}

impl EventDetector for SettleDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let slowed = prev.vel.norm() >= self.speed && current.vel.norm() < self.speed;
        let near = (current.pos - self.target).norm() <= self.radius;
        if slowed && near {
            self.fired = true;
            Some(EventKind::Settled)
        } else {
            None
        }
    }
}
