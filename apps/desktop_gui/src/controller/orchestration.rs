//! Command orchestration helpers from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues one command for the worker. Returns false when nothing was
/// queued, in which case no answering [`UiEvent`] will ever arrive and
/// the caller must unwind any in-flight UI state itself.
///
/// [`UiEvent`]: crate::controller::events::UiEvent
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::Submit { .. } => "submit",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->worker command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Submission queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Submission worker disconnected (possible startup failure); restart the app"
                    .to_string();
            false
        }
    }
}
