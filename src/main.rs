// Month Calendar Application
// Main entry point

use anyhow::{anyhow, Result};
use month_calendar::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings_service = SettingsService::from_project_dirs();
    log::info!("Using settings file {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, &settings)))),
    )
    .map_err(|e| anyhow!("Failed to run the calendar window: {}", e))
}
