use std::time::{Duration, Instant};

/// How long the copy button stays in the acknowledged ("Copied!") state.
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Transient feedback state for the copy-ticket-id button. Time is passed
/// in by the caller so the revert window is testable without sleeping.
#[derive(Debug, Default)]
pub struct CopyAcknowledgment {
    armed_at: Option<Instant>,
}

impl CopyAcknowledgment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the acknowledged state as of `now`.
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    /// Reports whether the acknowledgment is still showing, reverting
    /// automatically once the window has elapsed.
    pub fn is_acknowledged(&mut self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed_at) if now.saturating_duration_since(armed_at) < COPY_ACK_WINDOW => true,
            Some(_) => {
                self.armed_at = None;
                false
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.armed_at = None;
    }
}
