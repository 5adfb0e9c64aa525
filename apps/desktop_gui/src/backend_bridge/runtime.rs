//! Runtime bridge between the UI command queue and the sticker service.
//!
//! One dedicated thread owns a tokio runtime and drains commands
//! sequentially, so at most one request is ever in flight.

use std::thread;

use client_core::StickerApiClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Every command must produce exactly one outcome event, otherwise the UI
/// stays in its loading state with submit disabled. Blocking here is safe:
/// the worker has nothing else to do until the UI drains the queue.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::warn!("ui event channel closed; dropping generate outcome");
    }
}

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                deliver(
                    &ui_tx,
                    UiEvent::GenerateFailed(format!("backend worker startup failure: {err}")),
                );
                return;
            }
        };

        runtime.block_on(async move {
            let client = StickerApiClient::new(server_url);
            tracing::info!(server_url = client.server_url(), "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Generate { input } => {
                        tracing::info!(name = input.name(), "backend: generate");
                        match client.generate(&input).await {
                            Ok(combos) => {
                                deliver(&ui_tx, UiEvent::CombosGenerated { input, combos });
                            }
                            Err(err) => {
                                tracing::error!(
                                    name = input.name(),
                                    "backend: generate failed: {err}"
                                );
                                deliver(&ui_tx, UiEvent::GenerateFailed(err.to_string()));
                            }
                        }
                    }
                }
            }
        });
    });
}
