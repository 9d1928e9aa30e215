use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Control-law constants
// ---------------------------------------------------------------------------

/// Fraction of available force at which the law commits to braking —
/// slightly before force saturation rather than exactly at it.
pub const BRAKING_THRESHOLD: f64 = 0.9;

/// Approach speed cap, m/s.
pub const MAX_APPROACH_SPEED: f64 = 100.0;

/// Velocity-error gain, 1/s. Derived from the control cadence: a 60 tick/s
/// clock sampled every 10th tick gives a control period of 1/6 s, and the
/// law aims to settle within one period. Changing the cadence without
/// changing this gain breaks that guarantee.
pub const SETTLE_GAIN: f64 = 6.0;

// ---------------------------------------------------------------------------
// Per-direction thrust law
// ---------------------------------------------------------------------------

/// Desired approach velocity: the displacement, capped to
/// [`MAX_APPROACH_SPEED`] by uniform rescaling.
pub fn approach_velocity(displacement: &Vector3<f64>) -> Vector3<f64> {
    displacement.cap_magnitude(MAX_APPROACH_SPEED)
}

/// Output fraction for one thruster group.
///
/// `thrust_dir` is the world-frame direction the group propels the craft;
/// `displacement`, `velocity` and `gravity` are world frame. Returns `None`
/// when the group has no usable force at all (callers skip the direction),
/// otherwise `Some(f)` with `f` in [0, 1].
pub fn thrust_fraction(
    thrust_dir: &Vector3<f64>,
    displacement: &Vector3<f64>,
    velocity: &Vector3<f64>,
    gravity: &Vector3<f64>,
    mass: f64,
    total_force: f64,
) -> Option<f64> {
    if total_force <= 0.0 {
        return None;
    }

    let s_disp = displacement.dot(thrust_dir);
    let s_vel = velocity.dot(thrust_dir);
    let s_grav = gravity.dot(thrust_dir);

    // Deceleration needed to stand still exactly on arrival under constant
    // deceleration: a = v^2 / (2|x|), with the gravity component added or
    // subtracted depending on whether it rides with or against the current
    // velocity. At zero remaining distance, cancel the velocity within one
    // control period instead.
    let needed_decel = if s_disp == 0.0 {
        SETTLE_GAIN * s_vel
    } else {
        0.5 * s_vel * s_vel / s_disp.abs() + sign(s_vel) * s_grav
    };
    let decel_fraction = needed_decel * mass / total_force;

    let fraction = if decel_fraction > BRAKING_THRESHOLD {
        // Braking. Commit only if this group actually opposes the velocity;
        // the aligned group would push the wrong way and commands zero.
        if s_vel < 0.0 {
            decel_fraction.min(1.0)
        } else {
            0.0
        }
    } else {
        // Still room to accelerate toward the capped approach velocity.
        let s_desired = approach_velocity(displacement).dot(thrust_dir);
        let desired_accel = SETTLE_GAIN * (s_desired - s_vel) - s_grav;
        if desired_accel > 0.0 {
            (desired_accel * mass / total_force).min(1.0)
        } else {
            0.0
        }
    };

    Some(fraction)
}

/// Three-way sign: 0.0 stays 0.0, unlike `f64::signum`.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_axis() -> Vector3<f64> {
        Vector3::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn direct_approach_saturates() {
        // 50 m out, at rest, no gravity: desired velocity 50 m/s, desired
        // acceleration 300 m/s^2 — far beyond authority, clamps to 1.0.
        let f = thrust_fraction(
            &x_axis(),
            &Vector3::new(50.0, 0.0, 0.0),
            &Vector3::zeros(),
            &Vector3::zeros(),
            10.0,
            100.0,
        )
        .unwrap();
        assert!((f - 1.0).abs() < 1e-12);
    }

    #[test]
    fn deceleration_closed_form_triggers_braking() {
        // v^2/(2|x|) = 100/20 = 5 m/s^2 needed; fraction 5 > threshold, and
        // the group opposes the velocity, so it commands full force.
        let f = thrust_fraction(
            &x_axis(),
            &Vector3::new(10.0, 0.0, 0.0),
            &Vector3::new(-10.0, 0.0, 0.0),
            &Vector3::zeros(),
            1.0,
            1.0,
        )
        .unwrap();
        assert!((f - 1.0).abs() < 1e-12);
    }

    #[test]
    fn braking_gated_on_velocity_sign() {
        // Zero displacement, moving along +X fast: the +X group must stay
        // silent, the -X group must counter the motion.
        let velocity = Vector3::new(20.0, 0.0, 0.0);
        let aligned = thrust_fraction(
            &x_axis(),
            &Vector3::zeros(),
            &velocity,
            &Vector3::zeros(),
            1000.0,
            1000.0,
        )
        .unwrap();
        assert_eq!(aligned, 0.0);

        let opposing = thrust_fraction(
            &-x_axis(),
            &Vector3::zeros(),
            &velocity,
            &Vector3::zeros(),
            1000.0,
            1000.0,
        )
        .unwrap();
        assert!(opposing > 0.0);
    }

    #[test]
    fn approach_velocity_caps_at_max_speed() {
        let long = Vector3::new(300.0, 400.0, 0.0);
        let capped = approach_velocity(&long);
        assert!((capped.norm() - MAX_APPROACH_SPEED).abs() < 1e-9);
        assert!((capped.normalize() - long.normalize()).norm() < 1e-12);

        let short = Vector3::new(30.0, -40.0, 0.0);
        assert!((approach_velocity(&short) - short).norm() < 1e-12);
    }

    #[test]
    fn degenerate_force_skips_direction() {
        let f = thrust_fraction(
            &x_axis(),
            &Vector3::new(10.0, 0.0, 0.0),
            &Vector3::zeros(),
            &Vector3::zeros(),
            1.0,
            0.0,
        );
        assert!(f.is_none());
    }

    #[test]
    fn hover_fraction_balances_gravity() {
        // At the target, at rest, gravity pulling -X: the +X group carries
        // exactly the craft weight.
        let f = thrust_fraction(
            &x_axis(),
            &Vector3::zeros(),
            &Vector3::zeros(),
            &Vector3::new(-9.81, 0.0, 0.0),
            2000.0,
            40_000.0,
        )
        .unwrap();
        assert!((f - 9.81 * 2000.0 / 40_000.0).abs() < 1e-12);

        // The opposing group has nothing to add.
        let opposite = thrust_fraction(
            &-x_axis(),
            &Vector3::zeros(),
            &Vector3::zeros(),
            &Vector3::new(-9.81, 0.0, 0.0),
            2000.0,
            40_000.0,
        )
        .unwrap();
        assert_eq!(opposite, 0.0);
    }

    #[test]
    fn receding_group_stays_silent() {
        // Target behind this group's push direction and craft at rest: the
        // desired velocity points the other way.
        let f = thrust_fraction(
            &-x_axis(),
            &Vector3::new(50.0, 0.0, 0.0),
            &Vector3::zeros(),
            &Vector3::zeros(),
            10.0,
            100.0,
        )
        .unwrap();
        assert_eq!(f, 0.0);
    }

    #[test]
    fn zero_velocity_contributes_no_gravity_to_deceleration() {
        // s_vel = 0 with nonzero displacement: the closed form must not pick
        // up a gravity term through the sign function. A sign(0) = 1 bug
        // would push this case over the braking threshold (50 * 1 / 50 = 1)
        // and command zero; the correct law accelerates.
        let f = thrust_fraction(
            &x_axis(),
            &Vector3::new(10.0, 0.0, 0.0),
            &Vector3::zeros(),
            &Vector3::new(50.0, 0.0, 0.0),
            1.0,
            50.0,
        )
        .unwrap();
        // Acceleration branch: 6 * 10 - 50 = 10 m/s^2 -> fraction 0.2.
        assert!((f - 0.2).abs() < 1e-12);
    }
}
