use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use artillery_sim::sim::{self, Flight};
use artillery_sim::{Shell, SimConfig};

fn main() -> eframe::Result {
    let app = ShotViz::new(Shell::m795(), SimConfig::default(), 45.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Artillery Trajectory", options, Box::new(|_| Ok(Box::new(app))))
}

struct ShotViz {
    shell: Shell,
    config: SimConfig,
    angle: f64,
    flight: Option<Flight>,
    error: Option<String>,
}

impl ShotViz {
    fn new(shell: Shell, config: SimConfig, angle: f64) -> Self {
        let mut app = Self { shell, config, angle, flight: None, error: None };
        app.refire();
        app
    }

    fn refire(&mut self) {
        match sim::simulate_traced(&self.shell, &self.config, self.angle) {
            Ok(flight) => {
                self.flight = Some(flight);
                self.error = None;
            }
            Err(e) => {
                self.flight = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for ShotViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Shell: {}", self.shell.name));
            let changed = ui
                .add(egui::Slider::new(&mut self.angle, 0.0..=90.0).text("Angle from vertical (deg)"))
                .changed();
            if changed {
                self.refire();
            }

            match (&self.flight, &self.error) {
                (Some(f), _) => {
                    ui.label(format!(
                        "Range: {:.2} m  |  Hang time: {:.2} s  |  Apogee: {:.1} km  |  Max Mach {:.2}",
                        f.result.range,
                        f.result.hang_time,
                        f.apogee() / 1000.0,
                        f.max_mach(),
                    ));
                }
                (None, Some(err)) => {
                    ui.colored_label(egui::Color32::RED, err);
                }
                (None, None) => {}
            }
        });

        let Some(flight) = &self.flight else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            // Altitude vs Range
            ui.label("Trajectory Profile (km)");
            let profile: PlotPoints = flight
                .trace
                .iter()
                .map(|s| [s.pos.x / 1000.0, s.pos.y.max(0.0) / 1000.0])
                .collect();
            Plot::new("profile")
                .width(available.x)
                .height(half_h)
                .x_axis_label("Range (km)")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Trajectory", profile));
                });

            ui.horizontal(|ui| {
                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = flight
                        .trace
                        .iter()
                        .map(|s| [s.time, s.forces.speed])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });

                // Mach vs Time
                ui.vertical(|ui| {
                    ui.label("Mach / Drag coefficient");
                    let mach: PlotPoints = flight
                        .trace
                        .iter()
                        .map(|s| [s.time, s.forces.mach])
                        .collect();
                    let cd: PlotPoints = flight
                        .trace
                        .iter()
                        .map(|s| [s.time, s.forces.cd])
                        .collect();
                    Plot::new("mach")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Mach", mach));
                            plot_ui.line(Line::new("Cd", cd));
                        });
                });
            });
        });
    }
}
