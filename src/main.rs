// Calendar Picker demo
// Main entry point

use calendar_picker::services::settings::SettingsService;
use calendar_picker::ui_egui::DemoApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Picker demo");

    let settings_service = SettingsService::with_default_path();
    let settings = settings_service.load_or_default();
    // Optional JSON file of event markers as the first argument
    let events_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 620.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Picker",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, settings, events_path)))),
    )
}
