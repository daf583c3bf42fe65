//! Submission worker: a dedicated thread owning the tokio runtime and the
//! HTTP client, fed by the UI command queue.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use registration_core::{RegistrationClient, RegistrationEndpoints, RegistrationSubmitter};
use tracing::{error, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn spawn_submission_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::SubmissionFailed {
                    message: format!("Submission worker failed to start: {err}"),
                });
                error!("failed to build submission worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = RegistrationClient::new(RegistrationEndpoints::default());
            run_command_loop(&client, cmd_rx, ui_tx).await;
        });
    });
}

/// Processes commands serially until the UI side hangs up. The UI keeps
/// at most one submission in flight (submit is disabled while loading),
/// so there is no intra-worker concurrency beyond the dual dispatch
/// inside a single submit.
async fn run_command_loop(
    submitter: &dyn RegistrationSubmitter,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::Info("Submission worker ready".to_string()));
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Submit { form } => match submitter.submit(&form).await {
                Ok(ticket) => {
                    let _ = ui_tx.try_send(UiEvent::SubmissionAccepted(ticket));
                }
                Err(err) => {
                    warn!("submission attempt failed: {err}");
                    let _ = ui_tx.try_send(UiEvent::SubmissionFailed {
                        message: err.user_message().to_string(),
                    });
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use registration_core::SubmitError;
    use shared::{RegistrationForm, TicketId, TicketRecord};
    use std::time::Duration;

    struct MockSubmitter {
        fail: bool,
    }

    #[async_trait]
    impl RegistrationSubmitter for MockSubmitter {
        async fn submit(&self, form: &RegistrationForm) -> Result<TicketRecord, SubmitError> {
            if self.fail {
                return Err(SubmitError::MissingEvent);
            }
            Ok(TicketRecord::issue(&form.event, TicketId::from_raw(7)))
        }
    }

    fn run_loop_on_thread(
        submitter: MockSubmitter,
        cmd_rx: Receiver<BackendCommand>,
        ui_tx: Sender<UiEvent>,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            runtime.block_on(run_command_loop(&submitter, cmd_rx, ui_tx));
        })
    }

    fn recv(ui_rx: &Receiver<UiEvent>) -> UiEvent {
        ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("ui event")
    }

    #[test]
    fn worker_reports_accepted_submissions() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let handle = run_loop_on_thread(MockSubmitter { fail: false }, cmd_rx, ui_tx);

        let mut form = RegistrationForm::new();
        form.event = "Generative AI".to_string();
        cmd_tx.send(BackendCommand::Submit { form }).expect("send");

        assert!(matches!(recv(&ui_rx), UiEvent::Info(_)));
        match recv(&ui_rx) {
            UiEvent::SubmissionAccepted(ticket) => {
                assert_eq!(ticket.event_name, "Generative AI");
                assert_eq!(ticket.id.as_str(), "TAC-000007");
            }
            _ => panic!("expected accepted submission"),
        }

        drop(cmd_tx);
        handle.join().expect("worker thread");
    }

    #[test]
    fn worker_reports_failures_with_the_user_message() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let handle = run_loop_on_thread(MockSubmitter { fail: true }, cmd_rx, ui_tx);

        cmd_tx
            .send(BackendCommand::Submit {
                form: RegistrationForm::new(),
            })
            .expect("send");

        assert!(matches!(recv(&ui_rx), UiEvent::Info(_)));
        match recv(&ui_rx) {
            UiEvent::SubmissionFailed { message } => {
                assert_eq!(message, "Please select an event to proceed.");
            }
            _ => panic!("expected failed submission"),
        }

        drop(cmd_tx);
        handle.join().expect("worker thread");
    }
}
