use nalgebra::{UnitQuaternion, Vector3};

use super::snapshot::Snapshot;
use crate::errors::{Gone, Unavailable};

// ---------------------------------------------------------------------------
// Ship controller contract
// ---------------------------------------------------------------------------

/// Host-provided handle to a ship controller block (cockpit, remote pad —
/// anything that can report the craft's physical state).
///
/// Same existence semantics as thruster handles: any call may return
/// [`Gone`], at any time, independently per handle.
pub trait ShipController {
    fn position(&self) -> Result<Vector3<f64>, Gone>;

    fn linear_velocity(&self) -> Result<Vector3<f64>, Gone>;

    /// Ambient gravity acceleration at the craft, world frame.
    fn natural_gravity(&self) -> Result<Vector3<f64>, Gone>;

    fn total_mass(&self) -> Result<f64, Gone>;

    /// Craft attitude as a body-to-world rotation.
    fn orientation(&self) -> Result<UnitQuaternion<f64>, Gone>;
}

// ---------------------------------------------------------------------------
// Telemetry source with controller failover
// ---------------------------------------------------------------------------

/// Keeps a pool of candidate controllers in case one breaks mid-flight.
///
/// The active controller is the last candidate; one that fails any read is
/// dropped and the next is tried within the same cycle.
pub struct TelemetrySource<C> {
    candidates: Vec<C>,
}

impl<C: ShipController> TelemetrySource<C> {
    pub fn new(candidates: Vec<C>) -> Self {
        Self { candidates }
    }

    /// Add a controller discovered by the host.
    pub fn push_candidate(&mut self, controller: C) {
        self.candidates.push(controller);
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// One consistent snapshot, or `Unavailable` when no candidate answers.
    ///
    /// All five reads come from the same controller; a `Gone` on any of them
    /// discards that controller permanently and retries with the next
    /// candidate, still within the same cycle.
    pub fn snapshot(&mut self) -> Result<Snapshot, Unavailable> {
        while let Some(controller) = self.candidates.last() {
            match Self::read(controller) {
                Ok(snapshot) => return Ok(snapshot),
                Err(Gone) => {
                    tracing::debug!("ship controller vanished, failing over");
                    self.candidates.pop();
                }
            }
        }
        tracing::warn!("no ship controllers available");
        Err(Unavailable)
    }

    fn read(controller: &C) -> Result<Snapshot, Gone> {
        Ok(Snapshot {
            position: controller.position()?,
            velocity: controller.linear_velocity()?,
            gravity: controller.natural_gravity()?,
            mass: controller.total_mass()?,
            orientation: controller.orientation()?,
        })
    }
}
