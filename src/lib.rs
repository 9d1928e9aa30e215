pub mod actuator;
pub mod direction;
pub mod errors;
pub mod frame;
mod gnc_mod;
pub mod io;
pub mod sim;
pub mod telemetry;

// The gnc module: expose gnc_mod as `gnc` publicly
pub mod gnc {
    pub use crate::gnc_mod::*;
}

// Convenience re-exports of the core surface
pub use actuator::{ThrustCapability, Thruster, ThrusterBank, ThrusterGroup};
pub use direction::Direction;
pub use errors::{Gone, Unavailable};
pub use gnc::{Autopilot, CycleOutcome};
pub use telemetry::{ShipController, Snapshot, TelemetrySource};
