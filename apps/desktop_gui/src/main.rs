//! Desktop event-registration client entrypoint.

mod backend_bridge;
mod controller;
mod ui;

use crossbeam_channel::bounded;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::spawn_submission_worker;
use controller::events::UiEvent;
use ui::app::RegistrationApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_submission_worker(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tech Amigos Event Registration")
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([560.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tech Amigos Event Registration",
        options,
        Box::new(|_cc| Ok(Box::new(RegistrationApp::new(cmd_tx, ui_rx)))),
    )
}
