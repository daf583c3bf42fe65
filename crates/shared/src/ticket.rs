use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Label shown on the ticket stub when no event label is available.
pub const FALLBACK_EVENT_NAME: &str = "Event Pass";

const RAW_ID_SPACE: u32 = 0xFF_FFFF;

/// Registration identifier: `TAC-` followed by six uppercase hex digits,
/// zero padded, drawn from `[0, 0xFFFFFF)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(String);

impl TicketId {
    pub const PREFIX: &'static str = "TAC-";

    /// Formats a raw draw; the input is masked to 24 bits.
    pub fn from_raw(raw: u32) -> Self {
        Self(format!("{}{:06X}", Self::PREFIX, raw & RAW_ID_SPACE))
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_raw(rng.gen_range(0..RAW_ID_SPACE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ticket handed to the user after a successful submission. Held only
/// in view state; discarded on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: TicketId,
    pub event_name: String,
}

impl TicketRecord {
    pub fn issue(event_label: &str, id: TicketId) -> Self {
        let event_name = if event_label.is_empty() {
            FALLBACK_EVENT_NAME.to_string()
        } else {
            event_label.to_string()
        };
        Self { id, event_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_well_formed(id: &TicketId) {
        let text = id.as_str();
        assert!(text.starts_with("TAC-"), "bad prefix: {text}");
        let digits = &text[4..];
        assert_eq!(digits.len(), 6, "bad length: {text}");
        assert!(
            digits
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()),
            "bad digits: {text}"
        );
    }

    #[test]
    fn zero_draw_is_fully_padded() {
        assert_eq!(TicketId::from_raw(0).as_str(), "TAC-000000");
    }

    #[test]
    fn top_of_range_draw_formats_without_truncation() {
        assert_eq!(TicketId::from_raw(0xFF_FFFE).as_str(), "TAC-FFFFFE");
    }

    #[test]
    fn raw_values_are_masked_to_24_bits() {
        assert_eq!(
            TicketId::from_raw(0xFF00_0001).as_str(),
            TicketId::from_raw(0x0000_0001).as_str()
        );
    }

    #[test]
    fn generated_ids_are_always_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_well_formed(&TicketId::generate(&mut rng));
        }
    }

    #[test]
    fn ticket_uses_selected_event_label() {
        let record = TicketRecord::issue("Generative AI", TicketId::from_raw(1));
        assert_eq!(record.event_name, "Generative AI");
    }

    #[test]
    fn ticket_falls_back_to_event_pass_for_empty_label() {
        let record = TicketRecord::issue("", TicketId::from_raw(1));
        assert_eq!(record.event_name, "Event Pass");
    }
}
