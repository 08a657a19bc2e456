//! Day detail window listing the clicked day's events with live countdowns.

use chrono::{DateTime, Local};
use egui::{Margin, RichText, Stroke};
use std::time::Duration as StdDuration;

use crate::services::calendar::DetailModal;
use crate::ui_egui::theme::PlannerTheme;
use crate::utils::date::format_list_timestamp;

/// Render the detail window. Returns true when the user asked to close it.
pub fn render_event_details(
    ctx: &egui::Context,
    modal: &DetailModal,
    now: DateTime<Local>,
    theme: &PlannerTheme,
) -> bool {
    let Some(date) = modal.date() else {
        return false;
    };

    // Countdowns advance once per second only while the window is open
    ctx.request_repaint_after(StdDuration::from_secs(1));

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new("Event Details")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(date.format("%A, %-d %B %Y").to_string())
                    .color(theme.text_secondary),
            );
            ui.add_space(8.0);

            if modal.entries().is_empty() {
                ui.label(RichText::new("No events on this day").italics());
            }

            for entry in modal.entries() {
                egui::Frame::none()
                    .fill(theme.day_background)
                    .rounding(egui::Rounding::same(8.0))
                    .stroke(Stroke::new(1.0, theme.day_border))
                    .inner_margin(Margin::same(10.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&entry.name).size(16.0).strong());
                        ui.label(
                            RichText::new(format!("Time: {}", format_list_timestamp(entry.start)))
                                .small()
                                .color(theme.text_secondary),
                        );
                        ui.label(
                            RichText::new(format!("Time Left: {}", entry.remaining(now)))
                                .small()
                                .color(theme.text_secondary),
                        );
                    });
                ui.add_space(6.0);
            }

            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    close_clicked || !open
}
