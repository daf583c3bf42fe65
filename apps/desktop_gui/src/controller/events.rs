//! Events flowing from the submission worker back to the UI.

use shared::TicketRecord;

pub enum UiEvent {
    Info(String),
    SubmissionAccepted(TicketRecord),
    SubmissionFailed { message: String },
}
