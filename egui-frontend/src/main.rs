use eframe::egui;
use log::{error, info};

mod data;
mod ui;

use ui::app::EcoTraceApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting EcoTrace egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])  // Room for the form plus the calendar popover
            .with_min_inner_size([800.0, 600.0])   // Minimum usable size
            .with_title("EcoTrace - Mon empreinte carbone")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "EcoTrace",
        options,
        Box::new(|cc| {
            // Persistence only stores window geometry; app state is rebuilt each run
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match EcoTraceApp::new() {
                Ok(app) => {
                    info!("Successfully initialized EcoTrace app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
