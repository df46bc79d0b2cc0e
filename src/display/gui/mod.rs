// src/display/gui/mod.rs
//! GUI display module - window setup for both utilities

mod clock_app;
mod distance_app;
mod notice;
mod panels;
mod settings;

pub use clock_app::ClockApp;
pub use distance_app::DistanceApp;
pub use settings::apply_fonts;

use crate::{config::FontSettings, error::Result};
use eframe::egui;
use std::path::PathBuf;

/// Open the clock/countdown widget and block until it is closed
pub fn run_clock() -> Result<()> {
    let options = fixed_window("Clock", [360.0, 460.0]);

    eframe::run_native(
        "Clock",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ClockApp::new()))
        }),
    )?;

    Ok(())
}

/// Open the distance calculator and block until it is closed
pub fn run_distance(settings: FontSettings, settings_path: PathBuf) -> Result<()> {
    let options = fixed_window("Geodesic Distance", [520.0, 520.0]);

    eframe::run_native(
        "Geodesic Distance",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            apply_fonts(&cc.egui_ctx, &settings);
            Ok(Box::new(DistanceApp::new(settings, settings_path)))
        }),
    )?;

    Ok(())
}

fn fixed_window(title: &str, size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_title(title)
            .with_resizable(false),
        ..Default::default()
    }
}
