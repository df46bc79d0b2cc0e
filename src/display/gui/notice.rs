// src/display/gui/notice.rs
//! Blocking message box

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Notice {
    kind: NoticeKind,
    title: String,
    message: String,
}

/// Holds at most one pending notice. While a notice is open the caller is
/// expected to disable the rest of the window.
#[derive(Default)]
pub struct NoticeHost {
    current: Option<Notice>,
}

impl NoticeHost {
    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.post(NoticeKind::Info, title.into(), message.into());
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.post(NoticeKind::Error, title.into(), message.into());
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    fn post(&mut self, kind: NoticeKind, title: String, message: String) {
        self.current = Some(Notice {
            kind,
            title,
            message,
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.current else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let (icon, color) = match notice.kind {
                    NoticeKind::Info => ("ℹ", egui::Color32::LIGHT_BLUE),
                    NoticeKind::Error => ("⚠", egui::Color32::from_rgb(255, 100, 100)),
                };
                ui.horizontal(|ui| {
                    ui.colored_label(color, icon);
                    ui.label(&notice.message);
                });
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.current = None;
        }
    }
}
