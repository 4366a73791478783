//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{AddressIntake, IntakeError};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. Forwards run as detached tasks on the
/// worker's runtime; the UI only ever hears about them through `ui_tx`.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    intake: Arc<dyn AddressIntake>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::ForwardFailed {
                    reason: format!("backend worker startup failure: {err}"),
                });
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::ForwardAddress { address } => {
                    let intake = Arc::clone(&intake);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        match intake.forward(&address).await {
                            Ok(ack) => {
                                tracing::debug!(message = %ack.message, "address forwarded");
                                let _ = ui_tx.try_send(UiEvent::AddressForwarded { address });
                            }
                            Err(IntakeError::Disabled) => {}
                            Err(err) => {
                                tracing::warn!(error = %err, "failed to forward address");
                                let _ = ui_tx.try_send(UiEvent::ForwardFailed {
                                    reason: err.to_string(),
                                });
                            }
                        }
                    });
                }
            }
        }
        tracing::debug!("ui command queue closed; backend worker exiting");
    });
}
