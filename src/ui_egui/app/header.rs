use super::PlannerApp;
use crate::models::settings::ViewMode;
use crate::utils::date::{format_header_date, format_header_time};
use egui::RichText;
use std::time::Duration as StdDuration;

impl PlannerApp {
    /// Title, live clock, search box and the list/calendar toggle.
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        // Keeps the clock and list countdowns ticking
        ctx.request_repaint_after(StdDuration::from_secs(1));

        let now = self.planner.now();

        egui::TopBottomPanel::top("planner_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Event Planner").size(30.0).strong());
                ui.label(RichText::new(format_header_date(now)).size(16.0));
                ui.label(RichText::new(format_header_time(now)).size(16.0));
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if self.planner.view() == ViewMode::List {
                    let mut term = self.planner.search_term().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut term)
                            .hint_text("Search date or name")
                            .desired_width(240.0),
                    );
                    if response.changed() {
                        self.planner.set_search(term);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match self.planner.view() {
                        ViewMode::List => "📅 Calendar",
                        ViewMode::Calendar => "☰ List",
                    };
                    if ui.button(label).clicked() {
                        self.planner.toggle_view();
                    }
                });
            });
            ui.add_space(6.0);
        });
    }
}
