use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Point-mass plant state
// ---------------------------------------------------------------------------

/// Plant state at a single point in time, world frame.
#[derive(Debug, Clone)]
pub struct State {
    pub time: f64,            // s
    pub pos: Vector3<f64>,    // m
    pub vel: Vector3<f64>,    // m/s
    pub mass: f64,            // kg
}

impl State {
    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
            mass: self.mass,
        }
    }
}

/// State derivative (dp/dt, dv/dt).
#[derive(Debug, Clone)]
pub struct Deriv {
    pub dpos: Vector3<f64>,   // velocity
    pub dvel: Vector3<f64>,   // acceleration
}
