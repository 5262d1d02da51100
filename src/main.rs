//! Connect Four GUI
//!
//! Play against the streak heuristic, or hotseat with hints from it.
//! Set `RUST_LOG=connect_four_streaks=debug` to trace every ranked candidate.

use connect_four_streaks::ui::ConnectFourApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([700.0, 480.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(ConnectFourApp::new(cc)))),
    )
}
