use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::StickerFinderApp;

#[derive(Debug, Parser)]
#[command(
    name = "sticker-finder",
    about = "Desktop client for the sticker combination service"
)]
struct Cli {
    /// Base URL of the sticker combination service.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let server_url = cli.server_url;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Combo Finder")
            .with_inner_size([920.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sticker Combo Finder",
        options,
        Box::new(move |_cc| Ok(Box::new(StickerFinderApp::new(server_url, cmd_tx, ui_rx)))),
    )
}
