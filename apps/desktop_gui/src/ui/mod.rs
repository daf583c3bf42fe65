//! UI layer: app shell, custom option picker, and the confetti burst.

pub mod app;
pub mod confetti;
pub mod option_picker;
