//! Commands queued from the UI to the submission worker.

use shared::RegistrationForm;

pub enum BackendCommand {
    Submit { form: RegistrationForm },
}
