use nalgebra::Vector3;

use super::state::{Deriv, State};

// ---------------------------------------------------------------------------
// RK4 integrator with constant acceleration over the step
// ---------------------------------------------------------------------------

/// Single RK4 step under an acceleration held constant over the step
/// (thrust commands only change on control-cycle boundaries).
pub fn rk4_step(state: &State, accel: &Vector3<f64>, dt: f64) -> State {
    let deriv = |s: &State| Deriv {
        dpos: s.vel,
        dvel: *accel,
    };
    let k1 = deriv(state);
    let k2 = deriv(&state.apply(&k1, dt * 0.5));
    let k3 = deriv(&state.apply(&k2, dt * 0.5));
    let k4 = deriv(&state.apply(&k3, dt));

    State {
        time: state.time + dt,
        pos: state.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        vel: state.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
        mass: state.mass,
    }
}
