use thiserror::Error;

/// Failure surface of a submission attempt. Only two outcomes are
/// distinguishable: the local validation gate and a transport-level
/// failure from either endpoint. A destination silently dropping an
/// accepted request is not observable here.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no event selected")]
    MissingEvent,
    #[error("transport failure while submitting registration: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Message shown verbatim in the form's error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::MissingEvent => "Please select an event to proceed.",
            SubmitError::Transport(_) => "Something went wrong. Please check your connection.",
        }
    }
}
