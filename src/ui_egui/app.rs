mod header;
mod lifecycle;

use chrono::Local;

use crate::models::settings::ViewMode;
use crate::services::database::Database;
use crate::services::planner::{Planner, PlannerError, SubmitOutcome};
use crate::ui_egui::dialogs::event_details::render_event_details;
use crate::ui_egui::event_form::{render_event_form, FormAction};
use crate::ui_egui::theme::PlannerTheme;
use crate::ui_egui::views::calendar_view::CalendarView;
use crate::ui_egui::views::list_view::ListView;
use crate::ui_egui::views::PlannerAction;

pub struct PlannerApp {
    /// Event collection, form, search and modal state backed by SQLite
    planner: Planner<Database>,
    /// Currently applied theme colors
    theme: PlannerTheme,
    /// Message from the last rejected form submission
    form_error: Option<String>,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.planner.tick(Local::now());

        self.render_header(ctx);

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form_row(ui);
            ui.add_space(12.0);

            action = match self.planner.view() {
                ViewMode::List => ListView::show(
                    ui,
                    &self.planner.visible_events(),
                    self.planner.now(),
                    self.planner.editing(),
                    &self.theme,
                ),
                ViewMode::Calendar => CalendarView::show(ui, &self.planner.calendar(), &self.theme),
            };
        });

        if let Some(action) = action {
            self.apply_action(action);
        }

        if render_event_details(ctx, self.planner.modal(), self.planner.now(), &self.theme) {
            self.planner.close_modal();
        }
    }
}

impl PlannerApp {
    fn render_form_row(&mut self, ui: &mut egui::Ui) {
        let editing = self.planner.editing().is_some();
        let form_action = render_event_form(ui, self.planner.form_mut(), editing, &self.theme);

        match form_action {
            FormAction::Submit => self.submit_form(),
            FormAction::Cancel => {
                self.planner.cancel_edit();
                self.form_error = None;
            }
            FormAction::None => {}
        }

        if let Some(message) = &self.form_error {
            ui.label(egui::RichText::new(message).color(self.theme.error));
        }
    }

    fn submit_form(&mut self) {
        match self.planner.submit(Local::now()) {
            Ok(SubmitOutcome::Added(id)) => {
                log::info!("Added event {}", id);
                self.form_error = None;
            }
            Ok(SubmitOutcome::Updated(id)) => {
                log::info!("Updated event {}", id);
                self.form_error = None;
            }
            Err(err @ PlannerError::Incomplete) => {
                self.form_error = Some(err.to_string());
            }
            Err(err) => {
                log::warn!("Rejected event form: {}", err);
                self.form_error = Some(err.to_string());
            }
        }
    }

    fn apply_action(&mut self, action: PlannerAction) {
        match action {
            PlannerAction::Edit(id) => {
                if self.planner.begin_edit(id) {
                    self.form_error = None;
                }
            }
            PlannerAction::Delete(id) => {
                if self.planner.delete(id) {
                    log::info!("Deleted event {}", id);
                }
            }
            PlannerAction::OpenDay(date) => self.planner.open_day(date),
        }
    }
}
