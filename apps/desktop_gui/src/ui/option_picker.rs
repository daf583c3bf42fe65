//! Custom dropdown for the enumerated form fields (event, college, year).
//!
//! The trigger shows the current selection's label or a placeholder; the
//! option list opens in a foreground area below it. Choosing an option is
//! reported to the caller as a plain value and closes the list, and any
//! pointer interaction outside the widget while open dismisses it without
//! touching the selection.

use egui::{Align2, Button, RichText};
use shared::{label_for, OptionItem};

/// Open/closed state of one picker. Initial state is closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    open: bool,
}

impl PickerState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Trigger activation flips the list.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// An option was chosen; the list always closes.
    pub fn close_after_choice(&mut self) {
        self.open = false;
    }

    /// Outside interaction while open.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

pub struct OptionPicker<'a> {
    id_salt: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'a [OptionItem],
    selected: &'a str,
}

impl<'a> OptionPicker<'a> {
    pub fn new(
        id_salt: &'static str,
        label: &'static str,
        options: &'a [OptionItem],
        selected: &'a str,
    ) -> Self {
        Self {
            id_salt,
            label,
            placeholder: "Select",
            options,
            selected,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Renders the picker and returns the newly chosen value, if any.
    pub fn show(self, ui: &mut egui::Ui, state: &mut PickerState) -> Option<&'static str> {
        ui.label(self.label);

        let fallback = if self.selected.is_empty() {
            self.placeholder
        } else {
            self.selected
        };
        let selected_label = label_for(self.options, self.selected).unwrap_or(fallback);
        let arrow = if state.is_open() { "⏶" } else { "⏷" };
        let trigger = ui.add_sized(
            [ui.available_width(), 32.0],
            Button::new(format!("{selected_label}  {arrow}")),
        );
        if trigger.clicked() {
            state.toggle();
        }

        if !state.is_open() {
            return None;
        }

        let mut chosen = None;
        let area = egui::Area::new(egui::Id::new(self.id_salt))
            .order(egui::Order::Foreground)
            .pivot(Align2::LEFT_TOP)
            .fixed_pos(trigger.rect.left_bottom() + egui::vec2(0.0, 4.0))
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(trigger.rect.width());
                    for option in self.options {
                        let is_selected = option.value == self.selected;
                        let text = if is_selected {
                            RichText::new(format!("{}  ✔", option.label)).strong()
                        } else {
                            RichText::new(option.label)
                        };
                        if ui.selectable_label(is_selected, text).clicked() {
                            chosen = Some(option.value);
                        }
                    }
                });
            });

        if let Some(value) = chosen {
            state.close_after_choice();
            return Some(value);
        }
        // A click on the trigger itself is already handled by the toggle
        // above; the conjunction keeps it from double-firing here.
        if area.response.clicked_elsewhere() && trigger.clicked_elsewhere() {
            state.dismiss();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!PickerState::default().is_open());
    }

    #[test]
    fn trigger_toggles_open_and_closed() {
        let mut state = PickerState::default();
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn choosing_an_option_closes_the_list() {
        let mut state = PickerState::default();
        state.toggle();
        state.close_after_choice();
        assert!(!state.is_open());
    }

    #[test]
    fn outside_interaction_dismisses_without_reopening() {
        let mut state = PickerState::default();
        state.toggle();
        state.dismiss();
        assert!(!state.is_open());
        // Dismissing a closed picker stays closed.
        state.dismiss();
        assert!(!state.is_open());
    }
}
