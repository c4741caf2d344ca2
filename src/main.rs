//! Customer Desk entry point.
//!
//! Sets up logging, reads the optional settings file and opens the
//! "Customer Management" window. The data file lives in the working
//! directory unless the settings say otherwise.

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use customer_desk::{CustomerApp, config, logging};
use eframe::egui;

fn main() -> eframe::Result {
    match logging::init() {
        Ok(dir) => tracing::info!(log_dir = %dir.display(), "Logging initialized"),
        Err(e) => {
            // Fall back to plain stderr logging through the `log` facade.
            env_logger::try_init().ok();
            log::warn!("File logging unavailable: {e:#}");
        }
    }

    let settings = config::load_settings();
    tracing::info!(
        data_file = %settings.data_file.display(),
        batch_size = settings.batch_size,
        rating_threshold = settings.rating_threshold,
        "Starting Customer Desk"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Customer Management")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([560.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Management",
        native_options,
        Box::new(|cc| Ok(Box::new(CustomerApp::new(cc, settings)))),
    )
}
