use nalgebra::Vector3;

use crate::errors::Gone;

// ---------------------------------------------------------------------------
// Thruster handle contract
// ---------------------------------------------------------------------------

/// Host-provided handle to a single thruster block.
///
/// Every method may fail with [`Gone`] at any call, independently per handle
/// — blocks can be destroyed between cycles. Callers treat `Gone` as "remove
/// this handle and move on", never as an error to surface.
pub trait Thruster {
    /// Whether the block is currently able to produce thrust.
    fn is_operational(&self) -> Result<bool, Gone>;

    /// Rated maximum effective force, N.
    fn rated_force(&self) -> Result<f64, Gone>;

    /// Mounted forward axis in the craft body frame (unit vector).
    fn forward_axis(&self) -> Result<Vector3<f64>, Gone>;

    /// Apply an output fraction in [0, 1]. Callers clamp before calling.
    fn set_output_fraction(&mut self, fraction: f64) -> Result<(), Gone>;
}

// ---------------------------------------------------------------------------
// Aggregate capability
// ---------------------------------------------------------------------------

/// Aggregate capability of one thruster group, derived fresh per query.
///
/// Never cache this across cycles — thrusters fail between cycles.
#[derive(Debug, Clone, Copy)]
pub struct ThrustCapability {
    /// Mounted facing of the group's thrusters, body frame. The craft is
    /// propelled along the negated axis.
    pub forward_axis: Vector3<f64>,
    /// Summed rated force of operational members, N. Zero is valid and means
    /// the group exists but cannot currently push.
    pub total_force: f64,
}
