// src/error.rs
//! Error types for the desktop utilities

use crate::clock::ClockError;
use crate::geo::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User input rejected before any computation ran
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Clock(#[from] ClockError),

    #[cfg(feature = "gui")]
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),

    #[error("Error: {0}")]
    Other(String),
}

impl From<tempfile::PersistError> for AppError {
    fn from(error: tempfile::PersistError) -> Self {
        AppError::Io(error.error)
    }
}
