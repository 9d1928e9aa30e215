pub mod snapshot;
pub mod source;

pub use snapshot::Snapshot;
pub use source::{ShipController, TelemetrySource};
