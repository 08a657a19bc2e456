use crate::services::calendar::DayHighlight;
use crate::ui_egui::theme::PlannerTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Fill and text colours for a day cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CellColors {
    pub fill: Color32,
    pub text: Color32,
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub default_bg: Color32,
    pub today_bg: Color32,
    pub span_bg: Color32,
    pub start_bg: Color32,
    pub empty_bg: Color32,
    pub border: Color32,
    pub text: Color32,
    pub weekday_text: Color32,
    pub highlight_text: Color32,
    pub count_text: Color32,
    pub hover_overlay: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &PlannerTheme) -> Self {
        Self {
            default_bg: theme.day_background,
            today_bg: theme.today_background,
            span_bg: theme.span_background,
            start_bg: theme.start_background,
            empty_bg: theme.calendar_background,
            border: theme.day_border,
            text: theme.text_primary,
            weekday_text: theme.text_secondary,
            highlight_text: theme.highlight_text,
            count_text: theme.count_text,
            hover_overlay: with_alpha(theme.text_secondary, if theme.is_dark { 50 } else { 30 }),
        }
    }

    pub fn colors_for(&self, highlight: DayHighlight) -> CellColors {
        match highlight {
            DayHighlight::Today => CellColors {
                fill: self.today_bg,
                text: self.highlight_text,
            },
            DayHighlight::WithinSpan => CellColors {
                fill: self.span_bg,
                text: self.highlight_text,
            },
            DayHighlight::StartsHere => CellColors {
                fill: self.start_bg,
                text: self.highlight_text,
            },
            DayHighlight::Default => CellColors {
                fill: self.default_bg,
                text: self.text,
            },
        }
    }
}
