// src/main.rs
//! Desktop utilities launcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "desk-utils", version, about = "Clock widget and geodesic distance calculator")]
struct Cli {
    #[command(subcommand)]
    app: AppKind,
}

#[derive(Subcommand, Debug)]
enum AppKind {
    /// Wall clock with countdown timer, alarm and CPU/RAM readout
    Clock,
    /// Distance between up to five points, with KML export
    Distance {
        /// Settings file to use instead of ~/.config/desk-utils/settings.json
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "desk_utils=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    eprintln!("Error: This application requires the 'gui' feature.");
    eprintln!("Build with: cargo build --features gui");
    std::process::exit(1);
}

#[cfg(feature = "gui")]
fn main() -> desk_utils::Result<()> {
    use desk_utils::{config::FontSettings, display};

    init_logging();
    let cli = Cli::parse();

    if !display::should_use_gui() {
        tracing::warn!("no DISPLAY or WAYLAND_DISPLAY set, the window may fail to open");
    }

    match cli.app {
        AppKind::Clock => {
            tracing::info!("starting clock widget");
            display::gui::run_clock()?;
        }
        AppKind::Distance { settings } => {
            let path = match settings {
                Some(path) => path,
                None => FontSettings::default_path()?,
            };

            let settings = FontSettings::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.display(), "unusable settings file, using defaults");
                FontSettings::default()
            });

            tracing::info!("starting distance calculator");
            display::gui::run_distance(settings, path)?;
        }
    }

    Ok(())
}
