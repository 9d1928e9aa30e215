use nalgebra::Vector3;

use super::craft::{SimController, SimCraft, SimThruster};
use super::event::{EventDetector, SimEvent};
use super::integrator::rk4_step;
use super::state::State;
use crate::gnc::Autopilot;

// ---------------------------------------------------------------------------
// Runner configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Plant integration ticks per second.
    pub tick_rate: f64,
    /// Plant ticks between control cycles. The law's SETTLE_GAIN constant is
    /// derived from tick_rate / control_period = 6 cycles/s; change them
    /// together or not at all.
    pub control_period: u32,
    /// Hard stop, s.
    pub max_time: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,    // the host clock the law is tuned for
            control_period: 10, // autopilot runs every 10th tick
            max_time: 300.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Closed-loop flight
// ---------------------------------------------------------------------------

/// Fly the craft toward `target` with a caller-supplied autopilot, feeding
/// every consecutive state pair through `detectors`.
///
/// The plant integrates at `tick_rate`; the autopilot issues commands every
/// `control_period` ticks and holds them constant in between, exactly like
/// the host scheduler it stands in for.
pub fn fly_to_with(
    craft: &mut SimCraft,
    autopilot: &mut Autopilot<SimController, SimThruster>,
    target: Vector3<f64>,
    config: &SimConfig,
    detectors: &mut [&mut dyn EventDetector],
) -> (Vec<State>, Vec<SimEvent>) {
    let dt = 1.0 / config.tick_rate;
    let mut state = State {
        time: 0.0,
        pos: craft.position(),
        vel: craft.velocity(),
        mass: craft.mass(),
    };

    let capacity = ((config.max_time * config.tick_rate) as usize + 1).min(200_000);
    let mut trajectory = Vec::with_capacity(capacity);
    let mut events = Vec::new();
    trajectory.push(state.clone());

    let mut tick: u64 = 0;
    while state.time < config.max_time {
        if tick % u64::from(config.control_period) == 0 {
            autopilot.run_cycle(Some(target));
        }

        let accel = craft.acceleration();
        let next = rk4_step(&state, &accel, dt);
        craft.set_kinematics(next.pos, next.vel);

        for detector in detectors.iter_mut() {
            if let Some(kind) = detector.check(&state, &next) {
                events.push(SimEvent {
                    time: next.time,
                    kind,
                    state: next.clone(),
                });
            }
        }

        state = next;
        trajectory.push(state.clone());
        tick += 1;
    }

    (trajectory, events)
}

/// Fly with a fresh autopilot over the craft's own handles (convenience).
pub fn fly_to(craft: &mut SimCraft, target: Vector3<f64>, config: &SimConfig) -> Vec<State> {
    let mut autopilot = Autopilot::new(craft.telemetry(), craft.bank());
    let (trajectory, _) = fly_to_with(craft, &mut autopilot, target, config, &mut []);
    trajectory
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::craft::CraftBuilder;
    use crate::sim::event::{ArrivalDetector, EventKind};

    fn skiff() -> SimCraft {
        // 10 t craft, 200 kN per direction: 20 m/s^2 of authority.
        CraftBuilder::new("skiff")
            .mass(10_000.0)
            .symmetric_thrusters(2, 100_000.0)
            .build()
    }

    #[test]
    fn flies_to_target_in_free_space() {
        let mut craft = skiff();
        let target = Vector3::new(0.0, 0.0, 400.0);
        let config = SimConfig { max_time: 60.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let last = trajectory.last().unwrap();
        let distance = (last.pos - target).norm();
        assert!(distance < 10.0, "should close to target, ended {distance:.1} m away");
        assert!(last.vel.norm() < 2.0, "should be nearly at rest, {:.2} m/s", last.vel.norm());
    }

    #[test]
    fn approach_speed_stays_capped() {
        let mut craft = skiff();
        let target = Vector3::new(5_000.0, 0.0, 0.0);
        let config = SimConfig { max_time: 30.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let max_speed = trajectory.iter().map(|s| s.vel.norm()).fold(0.0_f64, f64::max);
        // One control period of full thrust above the cap is the worst case.
        assert!(max_speed < 105.0, "speed cap violated: {max_speed:.1} m/s");
    }

    #[test]
    fn hover_holds_position_under_gravity() {
        let mut craft = CraftBuilder::new("hover")
            .mass(10_000.0)
            .position(Vector3::new(0.0, 50.0, 0.0))
            .gravity(Vector3::new(0.0, -9.81, 0.0))
            .symmetric_thrusters(2, 100_000.0)
            .build();
        let target = Vector3::new(0.0, 50.0, 0.0);
        let config = SimConfig { max_time: 10.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let last = trajectory.last().unwrap();
        assert!((last.pos - target).norm() < 1.0, "hover drifted to {:?}", last.pos);
        assert!(last.vel.norm() < 0.5);
    }

    #[test]
    fn gravity_approach_reaches_target() {
        // Climb 200 m against gravity and settle there.
        let mut craft = CraftBuilder::new("climber")
            .mass(10_000.0)
            .gravity(Vector3::new(0.0, -9.81, 0.0))
            .symmetric_thrusters(2, 100_000.0)
            .build();
        let target = Vector3::new(0.0, 200.0, 0.0);
        let config = SimConfig { max_time: 90.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let last = trajectory.last().unwrap();
        assert!((last.pos - target).norm() < 10.0);
        assert!(last.vel.norm() < 2.0);
    }

    #[test]
    fn arrival_event_fires() {
        let mut craft = skiff();
        let target = Vector3::new(0.0, 0.0, 400.0);
        let config = SimConfig { max_time: 60.0, ..SimConfig::default() };
        let mut autopilot = Autopilot::new(craft.telemetry(), craft.bank());
        let mut arrival = ArrivalDetector::new(target, 25.0);
        let mut detectors: [&mut dyn EventDetector; 1] = [&mut arrival];

        let (_, events) = fly_to_with(&mut craft, &mut autopilot, target, &config, &mut detectors);
        assert!(events.iter().any(|e| e.kind == EventKind::Arrival));
    }

    #[test]
    fn controller_loss_fails_over_in_flight() {
        let mut craft = CraftBuilder::new("redundant")
            .mass(10_000.0)
            .controllers(2)
            .symmetric_thrusters(2, 100_000.0)
            .build();
        // Kill the active (last) controller before takeoff: every cycle must
        // fail over to the survivor and the flight still happens.
        craft.destroy_controller(1);

        let target = Vector3::new(0.0, 0.0, 300.0);
        let config = SimConfig { max_time: 10.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let last = trajectory.last().unwrap();
        assert!(last.pos.z > 50.0, "craft never moved: {:?}", last.pos);
    }

    #[test]
    fn total_telemetry_loss_leaves_craft_coasting() {
        let mut craft = CraftBuilder::new("blinded")
            .mass(10_000.0)
            .symmetric_thrusters(2, 100_000.0)
            .build();
        craft.destroy_controller(0);

        let target = Vector3::new(0.0, 0.0, 300.0);
        let config = SimConfig { max_time: 5.0, ..SimConfig::default() };
        let trajectory = fly_to(&mut craft, target, &config);

        let last = trajectory.last().unwrap();
        assert!(last.pos.norm() < 1e-9, "no commands should ever be issued");
        assert!(last.vel.norm() < 1e-9);
    }
}
