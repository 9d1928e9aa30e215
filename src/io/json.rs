use std::io::{self, Write};

use nalgebra::Vector3;

use crate::sim::State;

/// Summary statistics computed from an approach trajectory.
#[derive(Debug, Clone)]
pub struct ApproachSummary {
    pub closest_distance: f64,
    pub closest_time: f64,
    pub max_speed: f64,
    pub final_distance: f64,
    pub final_speed: f64,
    pub flight_time: f64,
}

impl ApproachSummary {
    /// Compute summary from trajectory data. Trajectories are never empty —
    /// the runner always records the initial state.
    pub fn from_trajectory(trajectory: &[State], target: &Vector3<f64>) -> Self {
        let closest = trajectory
            .iter()
            .min_by(|a, b| {
                let da = (a.pos - target).norm();
                let db = (b.pos - target).norm();
                da.partial_cmp(&db).unwrap()
            })
            .unwrap();

        let max_speed = trajectory
            .iter()
            .map(|s| s.vel.norm())
            .fold(0.0_f64, f64::max);

        let last = trajectory.last().unwrap();

        ApproachSummary {
            closest_distance: (closest.pos - target).norm(),
            closest_time: closest.time,
            max_speed,
            final_distance: (last.pos - target).norm(),
            final_speed: last.vel.norm(),
            flight_time: last.time,
        }
    }
}

/// Write an approach summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    craft_name: &str,
    summary: &ApproachSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"craft\": \"{}\",", craft_name)?;
    writeln!(writer, "  \"approach\": {{")?;
    writeln!(writer, "    \"closest_distance_m\": {:.2},", summary.closest_distance)?;
    writeln!(writer, "    \"closest_time_s\": {:.2},", summary.closest_time)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"final_distance_m\": {:.2},", summary.final_distance)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"flight_time_s\": {:.2}", summary.flight_time)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write an approach summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    craft_name: &str,
    summary: &ApproachSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, craft_name, summary)
}
