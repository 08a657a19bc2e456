//! Add/edit form row: event name, start and end inputs.

use chrono::{Local, NaiveDate, NaiveTime};
use egui::RichText;
use egui_extras::DatePickerButton;

use crate::services::planner::EventForm;
use crate::ui_egui::theme::PlannerTheme;
use crate::utils::date::{parse_input, INPUT_FORMAT};

/// Time of day used when a date is picked for an empty field.
fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub enum FormAction {
    None,
    Submit,
    Cancel,
}

pub fn render_event_form(
    ui: &mut egui::Ui,
    form: &mut EventForm,
    editing: bool,
    theme: &PlannerTheme,
) -> FormAction {
    let mut action = FormAction::None;

    ui.horizontal_wrapped(|ui| {
        let name_response = ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Event Name")
                .desired_width(200.0),
        );
        if name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = FormAction::Submit;
        }

        ui.label("Start:");
        datetime_input(ui, &mut form.start, "form_start");
        ui.label("End:");
        datetime_input(ui, &mut form.end, "form_end");

        let (label, color) = if editing {
            ("✏ Update", theme.warning)
        } else {
            ("➕ Add", theme.today_background)
        };
        if ui.button(RichText::new(label).color(color)).clicked() {
            action = FormAction::Submit;
        }

        if editing && ui.button("Cancel").clicked() {
            action = FormAction::Cancel;
        }
    });

    action
}

/// Text field in `YYYY-MM-DDTHH:MM` form with a date picker beside it.
fn datetime_input(ui: &mut egui::Ui, text: &mut String, id: &str) {
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text("YYYY-MM-DDTHH:MM")
            .desired_width(140.0),
    );

    let mut date = parse_input(text)
        .map(|dt| dt.date_naive())
        .unwrap_or_else(|| Local::now().date_naive());
    if ui
        .add(DatePickerButton::new(&mut date).id_source(id))
        .changed()
    {
        *text = with_date(text, date);
    }
}

/// Replace the date part of a form value, keeping its time when parseable.
fn with_date(text: &str, date: NaiveDate) -> String {
    let time = parse_input(text)
        .map(|dt| dt.time())
        .unwrap_or_else(default_time);

    date.and_time(time).format(INPUT_FORMAT).to_string()
}
