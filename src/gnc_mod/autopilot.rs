use nalgebra::Vector3;

use super::law;
use crate::actuator::{Thruster, ThrusterBank};
use crate::direction::Direction;
use crate::errors::Unavailable;
use crate::frame;
use crate::telemetry::{ShipController, Snapshot, TelemetrySource};

// ---------------------------------------------------------------------------
// Autopilot: six independent direction commands per cycle
// ---------------------------------------------------------------------------

/// Outcome of one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No target set; nothing was commanded.
    Idle,
    /// No controller answered; previous thrust commands stay in effect.
    NoTelemetry,
    /// Thrust fractions were issued (directions without usable thrusters
    /// were skipped).
    Commanded,
}

/// Drives the craft toward a target point by commanding per-direction
/// thrust output fractions.
///
/// Stateless between cycles apart from its hardware references: every cycle
/// re-derives everything from a fresh snapshot and fresh capabilities.
pub struct Autopilot<C, T> {
    telemetry: TelemetrySource<C>,
    bank: ThrusterBank<T>,
}

impl<C: ShipController, T: Thruster> Autopilot<C, T> {
    pub fn new(telemetry: TelemetrySource<C>, bank: ThrusterBank<T>) -> Self {
        Self { telemetry, bank }
    }

    pub fn bank(&self) -> &ThrusterBank<T> {
        &self.bank
    }

    /// For hosts that discover controllers after startup.
    pub fn telemetry_mut(&mut self) -> &mut TelemetrySource<C> {
        &mut self.telemetry
    }

    /// Run one control cycle.
    ///
    /// A `None` target means idle: nothing is commanded and whatever
    /// fractions the actuators last received stay in effect on the hardware.
    /// A telemetry failure aborts the whole cycle the same way; a single
    /// direction without usable thrusters only disables that direction.
    pub fn run_cycle(&mut self, target: Option<Vector3<f64>>) -> CycleOutcome {
        let Some(target) = target else {
            return CycleOutcome::Idle;
        };
        let snapshot = match self.telemetry.snapshot() {
            Ok(s) => s,
            Err(Unavailable) => return CycleOutcome::NoTelemetry,
        };

        let displacement = target - snapshot.position;
        for direction in Direction::ALL {
            self.command_direction(direction, &displacement, &snapshot);
        }
        CycleOutcome::Commanded
    }

    fn command_direction(
        &mut self,
        direction: Direction,
        displacement: &Vector3<f64>,
        snapshot: &Snapshot,
    ) {
        let Some(capability) = self.bank.capability(direction) else {
            return; // nothing mounted this way
        };
        // The mounted axis points where the nozzles face; the craft is
        // pushed the other way. Projections happen in the world frame.
        let thrust_dir = -frame::to_world(&capability.forward_axis, &snapshot.orientation);
        let Some(fraction) = law::thrust_fraction(
            &thrust_dir,
            displacement,
            &snapshot.velocity,
            &snapshot.gravity,
            snapshot.mass,
            capability.total_force,
        ) else {
            return; // group present but cannot push at all
        };
        tracing::trace!(?direction, fraction, "thrust command");
        self.bank.set_output_fraction(direction, fraction);
    }
}
