use nalgebra::{UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// Telemetry snapshot
// ---------------------------------------------------------------------------

/// One consistent reading of the craft state, captured at the start of a
/// control cycle and owned by it. All vectors are world frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub position: Vector3<f64>,           // m
    pub velocity: Vector3<f64>,           // m/s
    /// Ambient gravity acceleration at the craft, m/s^2. Zero in free space.
    pub gravity: Vector3<f64>,
    pub mass: f64,                        // kg
    /// Craft attitude as a body-to-world rotation.
    pub orientation: UnitQuaternion<f64>,
}
