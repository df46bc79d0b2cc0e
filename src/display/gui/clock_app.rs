// src/display/gui/clock_app.rs
//! Clock, countdown and alarm widget

use crate::clock::{
    parse_alarm_time, ClockState, CountdownDuration, MetricsSampler, SystemMetrics, Tick, Ticker,
    Transition,
};
use chrono::{DateTime, Local};
use eframe::egui;
use std::time::Instant;
use tracing::info;

use super::notice::NoticeHost;

const ALARM_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);

pub struct ClockApp {
    state: ClockState,
    wall_ticker: Ticker,
    countdown_ticker: Ticker,
    metrics: MetricsSampler,
    last_metrics: SystemMetrics,
    now: DateTime<Local>,
    hours_input: String,
    minutes_input: String,
    seconds_input: String,
    alarm_input: String,
    notice: NoticeHost,
}

impl ClockApp {
    pub fn new() -> Self {
        let started = Instant::now();
        let mut metrics = MetricsSampler::new();
        let last_metrics = metrics.sample();

        Self {
            state: ClockState::new(),
            wall_ticker: Ticker::every_second(started),
            countdown_ticker: Ticker::every_second(started),
            metrics,
            last_metrics,
            now: Local::now(),
            hours_input: "0".to_string(),
            minutes_input: "0".to_string(),
            seconds_input: "0".to_string(),
            alarm_input: String::new(),
            notice: NoticeHost::default(),
        }
    }

    /// Drain due ticks from both sources into the state machine
    fn pump_ticks(&mut self, instant: Instant) {
        // Only the latest wall time matters, however many seconds were missed
        if self.wall_ticker.poll(instant) > 0 {
            self.now = Local::now();
            self.last_metrics = self.metrics.sample();
            let transition = self.state.on_tick(Tick::WallClock(self.now.naive_local()));
            log_transition(transition);
        }

        if self.state.is_running() {
            for _ in 0..self.countdown_ticker.poll(instant) {
                let transition = self.state.on_tick(Tick::Countdown);
                log_transition(transition);
            }
        }
    }

    fn start_countdown(&mut self) {
        let started = CountdownDuration::parse(&self.hours_input, &self.minutes_input, &self.seconds_input)
            .and_then(|duration| self.state.start_countdown(duration));

        match started {
            Ok(()) => self.countdown_ticker.reset(Instant::now()),
            Err(e) => self.notice.error("Countdown", e.to_string()),
        }
    }

    fn set_alarm(&mut self) {
        match parse_alarm_time(&self.alarm_input) {
            Ok(time) => {
                self.state.set_alarm(time, Local::now().naive_local());
            }
            Err(e) => self.notice.error("Alarm", e.to_string()),
        }
    }

    fn render_clock(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.now.format("%H:%M:%S").to_string())
                    .size(40.0)
                    .monospace(),
            );
            ui.label(self.now.format("%A, %d %B %Y").to_string());
            ui.weak(self.last_metrics.summary());
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = egui::RichText::new(self.state.display_text())
            .size(48.0)
            .monospace()
            .strong();

        ui.vertical_centered(|ui| {
            if self.state.is_alarming() {
                egui::Frame::none()
                    .fill(ALARM_COLOR)
                    .rounding(6.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(text.color(egui::Color32::WHITE));
                    });
            } else {
                ui.label(text);
            }
        });
    }

    fn render_countdown_controls(&mut self, ui: &mut egui::Ui) {
        ui.strong("⏱ Countdown");
        ui.separator();

        let idle = self.state.can_start();
        ui.add_enabled_ui(idle, |ui| {
            ui.horizontal(|ui| {
                duration_field(ui, &mut self.hours_input);
                ui.label("h");
                duration_field(ui, &mut self.minutes_input);
                ui.label("m");
                duration_field(ui, &mut self.seconds_input);
                ui.label("s");
            });
        });

        ui.horizontal(|ui| {
            if ui.add_enabled(idle, egui::Button::new("▶ Start")).clicked() {
                self.start_countdown();
            }
            if ui
                .add_enabled(self.state.is_running(), egui::Button::new("⏹ Cancel"))
                .clicked()
            {
                log_transition(self.state.cancel());
            }
            if ui
                .add_enabled(self.state.is_alarming(), egui::Button::new("🔕 Dismiss"))
                .clicked()
            {
                log_transition(self.state.dismiss());
            }
        });
    }

    fn render_alarm_controls(&mut self, ui: &mut egui::Ui) {
        ui.strong("⏰ Alarm");
        ui.separator();

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.alarm_input)
                    .hint_text("HH:MM")
                    .desired_width(80.0),
            );
            if ui.button("Set").clicked() {
                self.set_alarm();
            }
            if ui.button("Clear").clicked() {
                self.state.clear_alarm();
            }
        });

        match self.state.alarm_at() {
            Some(target) => ui.label(format!("Armed for {}", target.format("%a %H:%M:%S"))),
            None => ui.weak("No alarm set"),
        };
    }
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let instant = Instant::now();
        self.pump_ticks(instant);

        let mut next = self.wall_ticker.until_next(instant);
        if self.state.is_running() {
            next = next.min(self.countdown_ticker.until_next(instant));
        }
        ctx.request_repaint_after(next);

        let blocked = self.notice.is_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.render_clock(ui);
                ui.add_space(10.0);
                self.render_status(ui);
                ui.add_space(10.0);

                ui.group(|ui| {
                    self.render_countdown_controls(ui);
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    self.render_alarm_controls(ui);
                });
            });
        });

        self.notice.show(ctx);
    }
}

fn duration_field(ui: &mut egui::Ui, value: &mut String) {
    ui.add(egui::TextEdit::singleline(value).desired_width(40.0));
}

fn log_transition(transition: Option<Transition>) {
    if let Some(t) = transition {
        info!(from = ?t.from, to = ?t.to, "clock state changed");
    }
}
