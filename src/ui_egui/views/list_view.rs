//! Searchable list of upcoming events with inline edit/delete buttons.

use chrono::{DateTime, Local};
use egui::{Margin, RichText, Stroke};

use super::PlannerAction;
use crate::models::event::Event;
use crate::ui_egui::theme::PlannerTheme;
use crate::utils::date::{format_list_timestamp, remaining_time};

pub struct ListView;

impl ListView {
    pub fn show(
        ui: &mut egui::Ui,
        events: &[&Event],
        now: DateTime<Local>,
        editing: Option<i64>,
        theme: &PlannerTheme,
    ) -> Option<PlannerAction> {
        let mut action = None;

        if events.is_empty() {
            ui.label(RichText::new("No upcoming events").italics());
            return None;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in events {
                    if let Some(clicked) = Self::render_item(ui, event, now, editing, theme) {
                        action = Some(clicked);
                    }
                    ui.add_space(8.0);
                }
            });

        action
    }

    fn render_item(
        ui: &mut egui::Ui,
        event: &Event,
        now: DateTime<Local>,
        editing: Option<i64>,
        theme: &PlannerTheme,
    ) -> Option<PlannerAction> {
        let mut action = None;
        let border = if editing == Some(event.id) {
            theme.warning
        } else {
            theme.day_border
        };

        egui::Frame::none()
            .fill(theme.day_background)
            .rounding(egui::Rounding::same(8.0))
            .stroke(Stroke::new(1.0, border))
            .inner_margin(Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&event.name).size(17.0).strong());
                        ui.label(
                            RichText::new(format!(
                                "{} - {}",
                                format_list_timestamp(event.start),
                                format_list_timestamp(event.end)
                            ))
                            .small()
                            .color(theme.text_secondary),
                        );
                        ui.label(
                            RichText::new(remaining_time(event.start, now))
                                .small()
                                .color(theme.text_secondary),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("🗑").color(theme.error))
                            .on_hover_text("Delete")
                            .clicked()
                        {
                            action = Some(PlannerAction::Delete(event.id));
                        }
                        if ui
                            .button(RichText::new("✏").color(theme.warning))
                            .on_hover_text("Edit")
                            .clicked()
                        {
                            action = Some(PlannerAction::Edit(event.id));
                        }
                    });
                });
            });

        action
    }
}
