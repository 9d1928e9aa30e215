pub mod autopilot;
pub mod law;

pub use autopilot::{Autopilot, CycleOutcome};
pub use law::{thrust_fraction, BRAKING_THRESHOLD, MAX_APPROACH_SPEED, SETTLE_GAIN};
