// src/display/gui/settings.rs
//! Settings UI for font family and size

use super::notice::NoticeHost;
use crate::config::{FontSettings, MAX_FONT_SIZE, MIN_FONT_SIZE};
use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::path::PathBuf;

pub const FONT_CHOICES: &[&str] = &[
    "Andale Mono",
    "Courier New",
    "Menlo",
    "Helvetica",
    "Arial",
    "Verdana",
];

/// egui only ships a proportional and a monospace family, so named families
/// are mapped onto whichever of the two they resemble.
pub fn font_family_for(style: &str) -> FontFamily {
    let style = style.to_lowercase();
    if ["mono", "courier", "consol", "menlo"]
        .iter()
        .any(|hint| style.contains(hint))
    {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// System fonts drive labels and buttons; content fonts drive the monospace
/// style used for coordinate fields and results.
pub fn apply_fonts(ctx: &egui::Context, settings: &FontSettings) {
    let system_family = font_family_for(&settings.system_font_style);
    let system_size = settings.system_font_size as f32;
    let content_family = font_family_for(&settings.content_font_style);
    let content_size = settings.content_font_size as f32;

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(system_size * 1.5, system_family.clone())),
        (TextStyle::Body, FontId::new(system_size, system_family.clone())),
        (TextStyle::Button, FontId::new(system_size, system_family.clone())),
        (TextStyle::Small, FontId::new(system_size * 0.8, system_family)),
        (TextStyle::Monospace, FontId::new(content_size, content_family)),
    ]
    .into();
    ctx.set_style(style);
}

pub struct SettingsWindow {
    pub open: bool,
    path: PathBuf,
    draft: FontSettings,
}

impl SettingsWindow {
    pub fn new(settings: FontSettings, path: PathBuf) -> Self {
        Self {
            open: false,
            path,
            draft: settings,
        }
    }

    /// Reopen the window with the settings currently in use
    pub fn open_with(&mut self, current: &FontSettings) {
        self.draft = current.clone();
        self.open = true;
    }

    /// Returns the new settings once they have been saved to disk. Rejected
    /// or failed saves are posted to `notice` and leave the window open.
    pub fn show(&mut self, ctx: &egui::Context, notice: &mut NoticeHost) -> Option<FontSettings> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        egui::Window::new("⚙ Settings")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Fonts");
                ui.separator();

                egui::Grid::new("font_settings")
                    .num_columns(3)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("System:");
                        font_combo(ui, "system_font", &mut self.draft.system_font_style);
                        ui.add(
                            egui::DragValue::new(&mut self.draft.system_font_size)
                                .clamp_range(MIN_FONT_SIZE..=MAX_FONT_SIZE)
                                .suffix(" pt"),
                        );
                        ui.end_row();

                        ui.label("Content:");
                        font_combo(ui, "content_font", &mut self.draft.content_font_style);
                        ui.add(
                            egui::DragValue::new(&mut self.draft.content_font_size)
                                .clamp_range(MIN_FONT_SIZE..=MAX_FONT_SIZE)
                                .suffix(" pt"),
                        );
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        saved = self.validate_and_save(notice);
                    }

                    if ui.button("❌ Cancel").clicked() {
                        self.open = false;
                    }
                });

                ui.add_space(5.0);
                ui.small(format!("Stored in {}", self.path.display()));
            });

        saved
    }

    fn validate_and_save(&mut self, notice: &mut NoticeHost) -> Option<FontSettings> {
        if let Err(msg) = self.draft.validate() {
            notice.error("Settings", msg);
            return None;
        }

        match self.draft.save_to(&self.path) {
            Ok(()) => {
                self.open = false;
                Some(self.draft.clone())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save settings");
                notice.error("Settings", format!("Failed to save settings: {}", e));
                None
            }
        }
    }
}

fn font_combo(ui: &mut egui::Ui, id: &str, value: &mut String) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for choice in FONT_CHOICES {
                ui.selectable_value(value, choice.to_string(), *choice);
            }
        });
}
