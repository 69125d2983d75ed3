//! Hex GUI
//!
//! A graphical interface for playing Hex against a random opponent or
//! another player.

use std::path::Path;

use hex::config::DEFAULT_CONFIG_PATH;
use hex::ui::HexApp;
use hex::GameConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH)).unwrap_or_else(|err| {
        tracing::error!(%err, "invalid configuration, using defaults");
        GameConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Hex"),
        ..Default::default()
    };

    eframe::run_native(
        "Hex",
        options,
        Box::new(move |cc| Ok(Box::new(HexApp::new(cc, config)))),
    )
}
