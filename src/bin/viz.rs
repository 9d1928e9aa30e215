use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use nalgebra::Vector3;

use omni_pilot::sim::{fly_to, CraftBuilder, SimConfig, State};

fn main() -> eframe::Result {
    let mut craft = CraftBuilder::new("Skiff-1")
        .mass(25_000.0)
        .gravity(Vector3::new(0.0, -9.81, 0.0))
        .symmetric_thrusters(3, 120_000.0)
        .build();
    let target = Vector3::new(800.0, 120.0, -600.0);
    let config = SimConfig {
        max_time: 120.0,
        ..SimConfig::default()
    };
    let trajectory = fly_to(&mut craft, target, &config);

    let app = ApproachViz {
        trajectory,
        target,
        craft_name: craft.name.clone(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Omni-Pilot Approach", options, Box::new(|_| Ok(Box::new(app))))
}

struct ApproachViz {
    trajectory: Vec<State>,
    target: Vector3<f64>,
    craft_name: String,
}

impl eframe::App for ApproachViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&State> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Craft: {}", self.craft_name));
            let closest = self
                .trajectory
                .iter()
                .map(|s| (s.pos - self.target).norm())
                .fold(f64::INFINITY, f64::min);
            let max_v = self
                .trajectory
                .iter()
                .map(|s| s.vel.norm())
                .fold(0.0_f64, f64::max);
            ui.label(format!(
                "Closest approach: {:.1} m  |  Max speed: {:.1} m/s  |  Flight: {:.0} s",
                closest,
                max_v,
                self.trajectory.last().map_or(0.0, |s| s.time),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Distance to target vs Time
                ui.vertical(|ui| {
                    ui.label("Distance to target (m)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, (s.pos - self.target).norm()])
                        .collect();
                    Plot::new("distance")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Distance", points));
                        });
                });

                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.vel.norm()])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Altitude vs Time
                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.pos.y])
                        .collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });

                // Ground track
                ui.vertical(|ui| {
                    ui.label("Ground track (m)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.pos.x, s.pos.z])
                        .collect();
                    Plot::new("track")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("East (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Track", points));
                        });
                });
            });
        });
    }
}
