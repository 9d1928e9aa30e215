use nalgebra::Vector3;

use omni_pilot::gnc::{Autopilot, MAX_APPROACH_SPEED};
use omni_pilot::io::json::ApproachSummary;
use omni_pilot::sim::{
    fly_to_with, ArrivalDetector, CraftBuilder, EventDetector, EventKind, SettleDetector,
    SimConfig, State,
};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_logging();

    // -----------------------------------------------------------------------
    // Craft: "Skiff-1" utility hauler
    // -----------------------------------------------------------------------
    // 25 t, three 120 kN thrusters per direction: 14.4 m/s^2 of authority,
    // enough to hover at 0.68 throttle in 1 g.
    let mut craft = CraftBuilder::new("Skiff-1")
        .mass(25_000.0)
        .gravity(Vector3::new(0.0, -9.81, 0.0))
        .controllers(2)
        .symmetric_thrusters(3, 120_000.0)
        .build();

    let target = Vector3::new(800.0, 120.0, -600.0);
    let config = SimConfig {
        max_time: 120.0,
        ..SimConfig::default()
    };

    // -----------------------------------------------------------------------
    // Fly
    // -----------------------------------------------------------------------
    let mut autopilot = Autopilot::new(craft.telemetry(), craft.bank());
    let mut arrival = ArrivalDetector::new(target, 25.0);
    let mut settle = SettleDetector::new(target, 25.0, 1.0);
    let mut detectors: [&mut dyn EventDetector; 2] = [&mut arrival, &mut settle];

    let (trajectory, events) = fly_to_with(
        &mut craft,
        &mut autopilot,
        target,
        &config,
        &mut detectors,
    );

    let summary = ApproachSummary::from_trajectory(&trajectory, &target);
    let initial_distance = (trajectory[0].pos - target).norm();

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  APPROACH FLIGHT — {}", craft.name);
    println!("====================================================================");
    println!();
    println!("  Craft Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.0} kg    Thrusters:    {:>8}",
        craft.mass(),
        craft.thruster_count()
    );
    println!(
        "  Per direction: {:>8.0} kN    Authority:    {:>8.1} m/s^2",
        360.0,
        360_000.0 / craft.mass()
    );
    println!(
        "  Gravity:       {:>8.2} m/s^2 Speed cap:    {:>8.0} m/s",
        craft.gravity().norm(),
        MAX_APPROACH_SPEED
    );
    println!("  Target range:  {:>8.0} m", initial_distance);
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &events {
        let label = match &event.kind {
            EventKind::Arrival => "ARRIVAL",
            EventKind::Settled => "SETTLED",
            EventKind::Custom(name) => name.as_str(),
        };
        println!(
            "  {label:<9} t={:>6.1}s   dist={:>7.1}m   vel={:>6.1}m/s",
            event.time,
            (event.state.pos - target).norm(),
            event.state.vel.norm()
        );
    }
    if events.is_empty() {
        println!("  (none)");
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Closest approach: {:>8.2} m at t={:.1} s",
        summary.closest_distance, summary.closest_time
    );
    println!("  Max speed:        {:>8.1} m/s", summary.max_speed);
    println!("  Max accel:        {:>8.1} m/s^2", max_acceleration(&trajectory));
    println!(
        "  Final:            {:>8.2} m from target at {:.1} m/s",
        summary.final_distance, summary.final_speed
    );
    println!("  Flight time:      {:>8.1} s", summary.flight_time);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>8}  {:>7}",
        "t (s)", "dist (m)", "vel (m/s)", "alt (m)", "phase"
    );
    println!("  {}", "─".repeat(48));

    let sample_interval = (trajectory.len() / 30).max(1);
    for (i, s) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        let dist = (s.pos - target).norm();
        let speed = s.vel.norm();
        let phase = if dist <= 25.0 {
            "HOLD"
        } else if speed > 0.95 * MAX_APPROACH_SPEED {
            "CRUISE"
        } else if s.vel.dot(&(target - s.pos)) > 0.0 {
            "APPR"
        } else {
            "BRAKE"
        };
        println!(
            "  {:>7.2}  {:>9.1}  {:>9.1}  {:>8.1}  {:>7}",
            s.time, dist, speed, s.pos.y, phase
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, {:.0} Hz plant, control every {} ticks",
        trajectory.len(),
        config.tick_rate,
        config.control_period
    );
    println!("====================================================================");
    println!();
}

/// Estimate peak acceleration from trajectory (finite differences).
fn max_acceleration(traj: &[State]) -> f64 {
    let mut max_a = 0.0_f64;
    for pair in traj.windows(2) {
        let dt = pair[1].time - pair[0].time;
        if dt > 0.0 {
            let dv = (pair[1].vel - pair[0].vel).norm();
            max_a = max_a.max(dv / dt);
        }
    }
    max_a
}
