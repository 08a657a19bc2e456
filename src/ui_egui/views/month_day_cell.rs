//! Day cell rendering for the calendar view.

use egui::{Pos2, Sense, Stroke, Vec2};

use super::calendar_view::{CalendarView, CELL_HEIGHT};
use super::palette::CalendarCellPalette;
use crate::services::calendar::{DayCell, DayHighlight};

impl CalendarView {
    /// Paint one day and report whether it was clicked.
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        palette: CalendarCellPalette,
        col_width: f32,
    ) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::click());
        let colors = palette.colors_for(cell.highlight());

        ui.painter().rect_filled(rect, 6.0, colors.fill);
        ui.painter()
            .rect_stroke(rect, 6.0, Stroke::new(1.0, palette.border));

        if response.hovered() {
            ui.painter().rect_filled(rect, 6.0, palette.hover_overlay);
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        ui.painter().text(
            Pos2::new(rect.left() + 6.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            cell.day().to_string(),
            egui::FontId::proportional(16.0),
            colors.text,
        );

        let weekday_color = if cell.highlight() == DayHighlight::Default {
            palette.weekday_text
        } else {
            colors.text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 6.0, rect.top() + 24.0),
            egui::Align2::LEFT_TOP,
            cell.weekday,
            egui::FontId::proportional(11.0),
            weekday_color,
        );

        if cell.is_today {
            ui.painter().text(
                Pos2::new(rect.left() + 6.0, rect.bottom() - 4.0),
                egui::Align2::LEFT_BOTTOM,
                "Today",
                egui::FontId::proportional(11.0),
                palette.highlight_text,
            );
        }

        if cell.is_start_on_day {
            ui.painter().text(
                Pos2::new(rect.right() - 6.0, rect.bottom() - 4.0),
                egui::Align2::RIGHT_BOTTOM,
                cell.event_count.to_string(),
                egui::FontId::proportional(12.0),
                palette.count_text,
            );
        }

        let label = format!("{} {}", cell.weekday, cell.date.format("%-d %B %Y"));
        response.on_hover_text(label).clicked()
    }
}
