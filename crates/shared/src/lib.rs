//! Domain model shared between the submission core and the desktop UI.

pub mod domain;
pub mod ticket;

pub use domain::{
    label_for, FormField, OptionItem, RegistrationForm, COLLEGE_OPTIONS, EVENT_OPTIONS,
    YEAR_OPTIONS,
};
pub use ticket::{TicketId, TicketRecord};
