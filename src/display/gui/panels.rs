// src/display/gui/panels.rs
//! Coordinate entry and result panels

use crate::geo::{DistanceReport, DistanceUnit, PointInput};
use eframe::egui;

const MANDATORY_ROWS: usize = 2;

pub fn render_point_rows(ui: &mut egui::Ui, inputs: &mut [PointInput]) {
    ui.strong("📍 Points");
    ui.separator();

    egui::Grid::new("point_grid")
        .num_columns(3)
        .spacing([10.0, 8.0])
        .show(ui, |ui| {
            ui.label("");
            ui.label("Latitude");
            ui.label("Longitude");
            ui.end_row();

            for (index, input) in inputs.iter_mut().enumerate() {
                if index < MANDATORY_ROWS {
                    ui.label(format!("Point {} *", index + 1));
                } else {
                    ui.label(format!("Point {}", index + 1));
                }
                coordinate_field(ui, &mut input.latitude, "e.g. 51.5074");
                coordinate_field(ui, &mut input.longitude, "e.g. -0.1278");
                ui.end_row();
            }
        });

    ui.small("* required. Optional points need both values or none.");
}

fn coordinate_field(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(value)
            .font(egui::TextStyle::Monospace)
            .hint_text(hint)
            .desired_width(150.0),
    );
}

pub fn render_results(ui: &mut egui::Ui, report: Option<&DistanceReport>) {
    ui.strong("📏 Total Distance");
    ui.separator();

    egui::Grid::new("result_grid")
        .num_columns(2)
        .spacing([10.0, 8.0])
        .show(ui, |ui| {
            for unit in DistanceUnit::ALL {
                ui.label(format!("{}:", unit.display_name()));
                match report {
                    Some(report) => ui.monospace(report.format(unit)),
                    None => ui.weak("—"),
                };
                ui.end_row();
            }
        });
}
