use egui::{Margin, RichText, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::PlannerAction;
use crate::services::calendar::{MonthGrid, WEEKDAY_NAMES};
use crate::ui_egui::theme::PlannerTheme;

pub(super) const CELL_HEIGHT: f32 = 64.0;
const SPACING: f32 = 4.0;

/// All months of the current year, stacked vertically.
pub struct CalendarView;

impl CalendarView {
    pub fn show(
        ui: &mut egui::Ui,
        months: &[MonthGrid],
        theme: &PlannerTheme,
    ) -> Option<PlannerAction> {
        let palette = CalendarCellPalette::from_theme(theme);
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for month in months {
                    if let Some(clicked) = Self::render_month(ui, month, palette) {
                        action = Some(clicked);
                    }
                    ui.add_space(16.0);
                }
            });

        action
    }

    fn render_month(
        ui: &mut egui::Ui,
        month: &MonthGrid,
        palette: CalendarCellPalette,
    ) -> Option<PlannerAction> {
        let mut action = None;
        let col_width = ((ui.available_width() - SPACING * 6.0) / 7.0).max(24.0);

        ui.label(RichText::new(month.name).size(22.0).strong());
        ui.add_space(6.0);

        egui::Grid::new(("month_grid", month.month))
            .spacing([SPACING, SPACING])
            .min_col_width(col_width)
            .max_col_width(col_width)
            .show(ui, |ui| {
                for name in WEEKDAY_NAMES {
                    egui::Frame::none()
                        .inner_margin(Margin::symmetric(0.0, 4.0))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(name).strong());
                            });
                        });
                }
                ui.end_row();

                let mut column: usize = 0;
                for _ in 0..month.leading_blanks {
                    Self::render_blank_cell(ui, palette, col_width);
                    column += 1;
                }

                for cell in &month.days {
                    if Self::render_day_cell(ui, cell, palette, col_width) {
                        action = Some(PlannerAction::OpenDay(cell.date));
                    }
                    column += 1;
                    if column % 7 == 0 {
                        ui.end_row();
                    }
                }

                // Pad the last week so every month keeps a rectangular grid
                let cells = month.week_rows() * 7;
                if column < cells {
                    for _ in column..cells {
                        Self::render_blank_cell(ui, palette, col_width);
                    }
                    ui.end_row();
                }
            });

        action
    }

    fn render_blank_cell(ui: &mut egui::Ui, palette: CalendarCellPalette, col_width: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
        ui.painter().rect_filled(rect, 6.0, palette.empty_bg);
        ui.painter()
            .rect_stroke(rect, 6.0, Stroke::new(1.0, palette.border));
    }
}
