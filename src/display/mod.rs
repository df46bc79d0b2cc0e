// src/display/mod.rs
//! Display front-ends

#[cfg(feature = "gui")]
pub mod gui;

/// Check if a graphical session is available
#[cfg(unix)]
pub fn should_use_gui() -> bool {
    std::env::var("DISPLAY").is_ok() || std::env::var("WAYLAND_DISPLAY").is_ok()
}

#[cfg(not(unix))]
pub fn should_use_gui() -> bool {
    true
}
