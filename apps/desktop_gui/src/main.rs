mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use clap::Parser;
use client_core::{intake_from_url, AddressIntake, DisabledIntake};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::AddressBookApp;

#[derive(Parser, Debug)]
#[command(name = "address-book-gui")]
struct Args {
    /// Base url of the intake server; submissions are forwarded when set.
    #[arg(long, env = "ADDRESS_INTAKE_URL")]
    intake_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let intake: Arc<dyn AddressIntake> = match intake_from_url(args.intake_url.as_deref()) {
        Ok(intake) => intake,
        Err(err) => {
            tracing::error!(error = %err, "ignoring intake url; forwarding disabled");
            Arc::new(DisabledIntake)
        }
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, intake);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Address Book")
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Address Book",
        options,
        Box::new(|_cc| Ok(Box::new(AddressBookApp::new(cmd_tx, ui_rx)))),
    )
}
