// Event Planner Application
// Main entry point

use anyhow::anyhow;
use event_planner::ui_egui::PlannerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Event Planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Planner")
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Planner",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)?))),
    )
    .map_err(|err| anyhow!("Event Planner exited with an error: {err}"))
}
