// src/display/gui/distance_app.rs
//! Distance calculator window

use crate::{
    config::FontSettings,
    export::{export_points, KML_EXTENSION},
    geo::{measure, validate_points, DistanceReport, PointInput, MAX_POINTS},
};
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};

use super::{
    notice::NoticeHost,
    panels,
    settings::{apply_fonts, SettingsWindow},
};

pub struct DistanceApp {
    inputs: Vec<PointInput>,
    report: Option<DistanceReport>,
    settings: FontSettings,
    settings_window: SettingsWindow,
    notice: NoticeHost,
}

impl DistanceApp {
    pub fn new(settings: FontSettings, settings_path: PathBuf) -> Self {
        Self {
            inputs: vec![PointInput::default(); MAX_POINTS],
            report: None,
            settings_window: SettingsWindow::new(settings.clone(), settings_path),
            settings,
            notice: NoticeHost::default(),
        }
    }

    /// Leaves the previous result on screen when the input is rejected
    fn calculate(&mut self) {
        match measure(&self.inputs) {
            Ok(report) => {
                info!(meters = report.meters(), "distance calculated");
                self.report = Some(report);
            }
            Err(e) => self.notice.error("Invalid input", e.to_string()),
        }
    }

    fn export(&mut self) {
        // Reject bad input before bothering the user with a file prompt
        if let Err(e) = validate_points(&self.inputs) {
            self.notice.error("Invalid input", e.to_string());
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("KML", &[KML_EXTENSION])
            .set_file_name("points.kml")
            .save_file()
        else {
            return;
        };

        match export_points(&self.inputs, &path) {
            Ok(written) => {
                self.notice.info(
                    "Export complete",
                    format!("Points exported to {}", written.display()),
                );
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "KML export failed");
                self.notice.error("Export failed", format!("Failed to export KML: {}", e));
            }
        }
    }

    fn clear(&mut self) {
        self.inputs.iter_mut().for_each(PointInput::clear);
        self.report = None;
    }
}

impl eframe::App for DistanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.notice.is_open();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.heading("🌍 Geodesic Distance");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⚙ Settings").clicked() {
                            self.settings_window.open_with(&self.settings);
                        }
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.group(|ui| {
                    panels::render_point_rows(ui, &mut self.inputs);
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("📏 Calculate").clicked() {
                        self.calculate();
                    }
                    if ui.button("💾 Export KML").clicked() {
                        self.export();
                    }
                    if ui.button("🗑 Clear").clicked() {
                        self.clear();
                    }
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    panels::render_results(ui, self.report.as_ref());
                });
            });
        });

        if !blocked {
            if let Some(settings) = self.settings_window.show(ctx, &mut self.notice) {
                apply_fonts(ctx, &settings);
                self.settings = settings;
            }
        }

        self.notice.show(ctx);
    }
}
