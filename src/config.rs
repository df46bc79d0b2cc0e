// src/config.rs
//! Font settings persisted as a small JSON file

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_FONT_STYLE: &str = "Andale Mono";
pub const DEFAULT_FONT_SIZE: u32 = 12;
pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 48;

/// Font family and size for the two UI categories: `system` covers labels and
/// buttons, `content` covers text fields and results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSettings {
    pub system_font_style: String,
    pub system_font_size: u32,
    pub content_font_style: String,
    pub content_font_size: u32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            system_font_style: DEFAULT_FONT_STYLE.to_string(),
            system_font_size: DEFAULT_FONT_SIZE,
            content_font_style: DEFAULT_FONT_STYLE.to_string(),
            content_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontSettings {
    /// A missing file yields the defaults; an unreadable or malformed one is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;

        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Overwrite the file wholesale, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// `$HOME/.config/desk-utils/settings.json`
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("desk-utils")
            .join("settings.json"))
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        for (label, style, size) in [
            ("System", &self.system_font_style, self.system_font_size),
            ("Content", &self.content_font_style, self.content_font_size),
        ] {
            if style.trim().is_empty() {
                return Err(format!("{} font family cannot be empty", label));
            }
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(format!(
                    "{} font size must be between {} and {}",
                    label, MIN_FONT_SIZE, MAX_FONT_SIZE
                ));
            }
        }
        Ok(())
    }
}
