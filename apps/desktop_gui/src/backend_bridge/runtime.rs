//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use dex_client::PokemonLookup;
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    lookup: Arc<dyn PokemonLookup>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_worker(cmd_rx, ui_tx, lookup))
}

fn run_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    lookup: Arc<dyn PokemonLookup>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to build lookup runtime: {err}");
            let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                "lookup worker startup failure: {err}"
            )));
            return;
        }
    };

    runtime.block_on(async move {
        info!("lookup worker ready");
        while let Ok(cmd) = cmd_rx.recv() {
            let cmd = latest_pending(cmd, &cmd_rx);
            match cmd {
                BackendCommand::Lookup { request_id, query } => {
                    let outcome = lookup.fetch(&query).await;
                    if let Err(err) = &outcome {
                        warn!(request_id, kind = ?err.kind(), "lookup failed: {err}");
                    }
                    if ui_tx
                        .send(UiEvent::LookupFinished {
                            request_id,
                            outcome,
                        })
                        .is_err()
                    {
                        debug!("ui event queue closed; stopping lookup worker");
                        break;
                    }
                }
            }
        }
    });
}

/// Skips commands already superseded by a newer one in the queue.
fn latest_pending(mut cmd: BackendCommand, cmd_rx: &Receiver<BackendCommand>) -> BackendCommand {
    while let Ok(newer) = cmd_rx.try_recv() {
        debug!(command = cmd.name(), "superseded by newer ui->backend command");
        cmd = newer;
    }
    cmd
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
