use nalgebra::Vector3;

use omni_pilot::io::csv;
use omni_pilot::io::json::{self, ApproachSummary};
use omni_pilot::sim::{fly_to, CraftBuilder, SimConfig};

fn main() {
    let mut craft = CraftBuilder::new("Courier")
        .mass(8_000.0)
        .symmetric_thrusters(2, 80_000.0)
        .build();
    let target = Vector3::new(1_200.0, 0.0, -350.0);
    let config = SimConfig {
        max_time: 90.0,
        ..SimConfig::default()
    };

    println!("Flying {} ...", craft.name);
    let trajectory = fly_to(&mut craft, target, &config);

    let summary = ApproachSummary::from_trajectory(&trajectory, &target);
    println!("Closest approach: {:.1} m at t={:.1} s", summary.closest_distance, summary.closest_time);
    println!("Max speed: {:.1} m/s", summary.max_speed);
    println!("Final: {:.1} m from target at {:.1} m/s", summary.final_distance, summary.final_speed);

    csv::write_trajectory_file("courier_trajectory.csv", &trajectory)
        .expect("Failed to write CSV");
    json::write_summary_file("courier_summary.json", &craft.name, &summary)
        .expect("Failed to write JSON");

    println!("Exported: courier_trajectory.csv, courier_summary.json");
}
