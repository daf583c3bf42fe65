//! Application shell: entry form, success ticket view, and worker event
//! intake.

use std::time::{Duration, Instant};

use chrono::Datelike;
use crossbeam_channel::{Receiver, Sender};
use egui::{Color32, RichText};
use rand::thread_rng;
use registration_core::CopyAcknowledgment;
use shared::{
    label_for, FormField, RegistrationForm, TicketRecord, COLLEGE_OPTIONS, EVENT_OPTIONS,
    YEAR_OPTIONS,
};
use tracing::info;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::confetti::ConfettiBurst;
use crate::ui::option_picker::{OptionPicker, PickerState};

const ERROR_MISSING_EVENT: &str = "Please select an event to proceed.";
const CONTENT_MAX_WIDTH: f32 = 560.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppViewState {
    Entry,
    Success,
}

pub struct RegistrationApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    form: RegistrationForm,
    view_state: AppViewState,
    is_loading: bool,
    error: Option<String>,
    ticket: Option<TicketRecord>,

    event_picker: PickerState,
    college_picker: PickerState,
    year_picker: PickerState,

    copy_ack: CopyAcknowledgment,
    confetti: Option<ConfettiBurst>,
    celebrate: bool,
    scroll_to_top: bool,

    status: String,
    footer_year: i32,
}

impl RegistrationApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: RegistrationForm::new(),
            view_state: AppViewState::Entry,
            is_loading: false,
            error: None,
            ticket: None,
            event_picker: PickerState::default(),
            college_picker: PickerState::default(),
            year_picker: PickerState::default(),
            copy_ack: CopyAcknowledgment::new(),
            confetti: None,
            celebrate: false,
            scroll_to_top: false,
            status: String::new(),
            footer_year: chrono::Local::now().year(),
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::SubmissionAccepted(ticket) => {
                info!(ticket_id = %ticket.id, event = %ticket.event_name, "submission accepted");
                self.ticket = Some(ticket);
                self.view_state = AppViewState::Success;
                self.is_loading = false;
                self.error = None;
                self.scroll_to_top = true;
                self.celebrate = true;
            }
            UiEvent::SubmissionFailed { message } => {
                self.is_loading = false;
                self.error = Some(message);
            }
        }
    }

    fn handle_submit(&mut self) {
        self.error = None;
        if self.form.event.is_empty() {
            self.error = Some(ERROR_MISSING_EVENT.to_string());
            return;
        }
        // Parity with the native required-input gating of the web form;
        // the core re-checks the event precondition regardless.
        if let Some(field) = self.form.first_missing_required() {
            self.error = Some(format!("{} is required.", field.label()));
            return;
        }
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Submit {
                form: self.form.clone(),
            },
            &mut self.status,
        );
        // No worker answer will arrive for a command that never queued,
        // so the loading flag must not be left set.
        self.is_loading = queued;
        if !queued {
            self.error = Some("Something went wrong. Please check your connection.".to_string());
        }
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.view_state = AppViewState::Entry;
        self.error = None;
        self.ticket = None;
        self.copy_ack.clear();
        self.scroll_to_top = true;
    }

    fn copy_ticket_id(&mut self) {
        let Some(ticket) = &self.ticket else {
            return;
        };
        let copy_result = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(ticket.id.to_string()));
        match copy_result {
            Ok(()) => self.copy_ack.arm(Instant::now()),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.status = "Could not access the clipboard.".to_string();
            }
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        let title =
            label_for(&EVENT_OPTIONS, &self.form.event).unwrap_or("Event Registration");
        ui.heading(RichText::new(title).size(30.0).strong());
        ui.label("Registrations Open, Limited Seats Available");
        ui.label(RichText::new("Secure your spot now.").strong());
    }

    fn show_entry_form(&mut self, ui: &mut egui::Ui) {
        if let Some(value) = OptionPicker::new(
            "event_picker",
            "Event Name",
            &EVENT_OPTIONS,
            &self.form.event,
        )
        .placeholder("Select Event")
        .show(ui, &mut self.event_picker)
        {
            self.form.set(FormField::Event, value);
        }
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            text_field(&mut columns[0], "Full Name", &mut self.form.name, "Name");
            text_field(
                &mut columns[1],
                "Roll No.",
                &mut self.form.roll_number,
                "2xxxxx",
            );
        });
        ui.columns(2, |columns| {
            text_field(
                &mut columns[0],
                "Email",
                &mut self.form.email,
                "student@cgc.edu.in",
            );
            // 10 digit mobile number expected, hint only.
            text_field(
                &mut columns[1],
                "Phone",
                &mut self.form.mobile_number,
                "98765 43210",
            );
        });
        ui.columns(3, |columns| {
            text_field(&mut columns[0], "Branch", &mut self.form.branch, "AIML");
            if let Some(value) = OptionPicker::new(
                "college_picker",
                "College",
                &COLLEGE_OPTIONS,
                &self.form.college,
            )
            .show(&mut columns[1], &mut self.college_picker)
            {
                self.form.set(FormField::College, value);
            }
            if let Some(value) =
                OptionPicker::new("year_picker", "Year", &YEAR_OPTIONS, &self.form.year)
                    .show(&mut columns[2], &mut self.year_picker)
            {
                self.form.set(FormField::Year, value);
            }
        });
        ui.add_space(10.0);

        ui.label("Questions (Optional)");
        ui.add(
            egui::TextEdit::multiline(&mut self.form.message)
                .hint_text("Any specific requirements?")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(14.0);

        let submit_label = if self.is_loading {
            "Registering..."
        } else {
            "Confirm Registration"
        };
        let submit = ui.add_enabled(
            !self.is_loading,
            egui::Button::new(RichText::new(submit_label).strong())
                .min_size(egui::vec2(ui.available_width(), 40.0)),
        );
        if self.is_loading {
            ui.add(egui::Spinner::new());
        }
        if submit.clicked() {
            self.handle_submit();
        }

        if let Some(message) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(
                Color32::from_rgb(0xef, 0x44, 0x44),
                format!("⚠ {message}"),
            );
        }
    }

    fn show_success_view(&mut self, ui: &mut egui::Ui) {
        let Some(ticket) = self.ticket.clone() else {
            // Success view without a ticket cannot happen through the
            // normal flow; fall back to the entry view.
            self.view_state = AppViewState::Entry;
            return;
        };

        ui.heading(RichText::new("You're In!").size(34.0).strong());
        ui.label("Please save your ticket below.");
        ui.add_space(12.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_width(CONTENT_MAX_WIDTH - 80.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("TECH AMIGOS").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&ticket.event_name).weak());
                    });
                });
                ui.separator();
                ui.label(RichText::new("Registration ID").small().weak());
                ui.label(RichText::new(ticket.id.as_str()).monospace().size(26.0));
                ui.add_space(8.0);

                let copied = self.copy_ack.is_acknowledged(Instant::now());
                let copy_label = if copied {
                    RichText::new("✔ Copied!").color(Color32::from_rgb(0x10, 0xb9, 0x81))
                } else {
                    RichText::new("Copy ID")
                };
                if ui.button(copy_label).clicked() {
                    self.copy_ticket_id();
                }
                if copied {
                    // Keep repainting so the acknowledgment reverts on time.
                    ui.ctx().request_repaint_after(Duration::from_millis(100));
                }
            });

        ui.add_space(12.0);
        if ui
            .add(egui::Button::new("Register Another Student").min_size(egui::vec2(260.0, 36.0)))
            .clicked()
        {
            self.reset_form();
        }
    }
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
}

impl eframe::App for RegistrationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }

        if self.celebrate {
            self.celebrate = false;
            let rect = ctx.screen_rect();
            let origin = egui::pos2(rect.center().x, rect.height() * 0.6);
            self.confetti = Some(ConfettiBurst::new(origin, &mut thread_rng()));
        }

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Tech Amigos").strong().size(18.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("v1.0").weak());
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("© {} Tech Amigos Club", self.footer_year)).weak(),
                );
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).small().weak());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical();
            if self.scroll_to_top {
                scroll = scroll.vertical_scroll_offset(0.0);
                self.scroll_to_top = false;
            }
            scroll.show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(16.0);
                    self.show_header(ui);
                    ui.add_space(16.0);
                    match self.view_state {
                        AppViewState::Entry => self.show_entry_form(ui),
                        AppViewState::Success => self.show_success_view(ui),
                    }
                    ui.add_space(24.0);
                });
            });
        });

        if let Some(confetti) = &mut self.confetti {
            if !confetti.animate(ctx) {
                self.confetti = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::TicketId;

    fn app_with_channels() -> (
        RegistrationApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        (RegistrationApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            event: "Generative AI".to_string(),
            name: "Asha Verma".to_string(),
            roll_number: "2191234".to_string(),
            email: "asha@cgc.edu.in".to_string(),
            mobile_number: "9876543210".to_string(),
            branch: "AIML".to_string(),
            college: "CEC".to_string(),
            year: "2nd Year".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn submit_without_event_shows_error_and_dispatches_nothing() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        app.form.event.clear();

        app.handle_submit();

        assert_eq!(app.error.as_deref(), Some(ERROR_MISSING_EVENT));
        assert!(!app.is_loading);
        assert!(cmd_rx.try_recv().is_err(), "no command may be queued");
        // Entered fields survive the refused attempt.
        assert_eq!(app.form.name, "Asha Verma");
    }

    #[test]
    fn submit_with_missing_required_field_is_refused_locally() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        app.form.roll_number.clear();

        app.handle_submit();

        assert_eq!(app.error.as_deref(), Some("Roll No. is required."));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn valid_submit_queues_the_form_and_enters_loading() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();

        app.handle_submit();

        assert!(app.is_loading);
        assert!(app.error.is_none());
        let BackendCommand::Submit { form } = cmd_rx.try_recv().expect("queued command");
        assert_eq!(form, filled_form());
    }

    #[test]
    fn submit_with_dead_worker_clears_loading_and_shows_the_error() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        // Worker gone (e.g. its runtime failed to build); nothing will
        // ever answer, so the attempt must unwind immediately.
        drop(cmd_rx);

        app.handle_submit();

        assert!(!app.is_loading);
        assert_eq!(
            app.error.as_deref(),
            Some("Something went wrong. Please check your connection.")
        );
        assert!(app.status.contains("disconnected"));
        assert_eq!(app.form, filled_form());
    }

    #[test]
    fn accepted_submission_switches_to_the_success_view() {
        let (mut app, _cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        app.is_loading = true;

        let ticket = TicketRecord::issue("Generative AI", TicketId::from_raw(0xABC));
        app.apply_event(UiEvent::SubmissionAccepted(ticket));

        assert_eq!(app.view_state, AppViewState::Success);
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert!(app.scroll_to_top);
        assert!(app.celebrate);
        let ticket = app.ticket.expect("ticket");
        assert_eq!(ticket.event_name, "Generative AI");
        assert_eq!(ticket.id.as_str(), "TAC-000ABC");
    }

    #[test]
    fn failed_submission_keeps_the_form_and_clears_loading() {
        let (mut app, _cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        app.is_loading = true;

        app.apply_event(UiEvent::SubmissionFailed {
            message: "Something went wrong. Please check your connection.".to_string(),
        });

        assert_eq!(app.view_state, AppViewState::Entry);
        assert!(!app.is_loading);
        assert_eq!(
            app.error.as_deref(),
            Some("Something went wrong. Please check your connection.")
        );
        assert_eq!(app.form, filled_form());
    }

    #[test]
    fn reset_clears_every_field_and_returns_to_entry() {
        let (mut app, _cmd_rx, _ui_tx) = app_with_channels();
        app.form = filled_form();
        app.view_state = AppViewState::Success;
        app.error = Some("stale".to_string());
        app.ticket = Some(TicketRecord::issue("Generative AI", TicketId::from_raw(1)));

        app.reset_form();

        assert_eq!(app.view_state, AppViewState::Entry);
        assert_eq!(app.form, RegistrationForm::new());
        assert!(app.error.is_none());
        assert!(app.ticket.is_none());
        assert!(app.scroll_to_top);
    }
}
