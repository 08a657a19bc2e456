//! Theme module for the egui planner
//!
//! Defines the PlannerTheme structure holding every colour the views use,
//! including the day-cell highlight colours of the calendar.

use egui::Color32;

use crate::models::settings::ThemeMode;

/// A planner theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of blank leading cells in a month grid
    pub calendar_background: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell and list card border color
    pub day_border: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Background of days inside a multi-day span
    pub span_background: Color32,

    /// Background of days on which an event starts
    pub start_background: Color32,

    /// Text drawn on top of a highlighted cell
    pub highlight_text: Color32,

    /// Event count shown on highlighted cells
    pub count_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (secondary info)
    pub text_secondary: Color32,

    /// Edit button accent
    pub warning: Color32,

    /// Delete button and form error accent
    pub error: Color32,
}

impl PlannerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(243, 244, 246),
            day_background: Color32::from_rgb(243, 244, 246),
            day_border: Color32::from_rgb(220, 220, 220),
            today_background: Color32::from_rgb(34, 197, 94),
            span_background: Color32::from_rgb(245, 158, 11),
            start_background: Color32::from_rgb(180, 83, 9),
            highlight_text: Color32::WHITE,
            count_text: Color32::from_rgb(253, 230, 138),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(107, 114, 128),
            warning: Color32::from_rgb(251, 189, 35),
            error: Color32::from_rgb(248, 114, 114),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            day_background: Color32::from_rgb(48, 48, 48),
            day_border: Color32::from_rgb(60, 60, 60),
            today_background: Color32::from_rgb(22, 163, 74),
            span_background: Color32::from_rgb(217, 119, 6),
            start_background: Color32::from_rgb(146, 64, 14),
            highlight_text: Color32::WHITE,
            count_text: Color32::from_rgb(253, 230, 138),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            warning: Color32::from_rgb(202, 138, 4),
            error: Color32::from_rgb(220, 38, 38),
        }
    }

    /// Resolve the configured mode, asking the OS when set to `System`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = PlannerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = PlannerTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_for_mode_explicit() {
        assert_eq!(PlannerTheme::for_mode(ThemeMode::Light), PlannerTheme::light());
        assert_eq!(PlannerTheme::for_mode(ThemeMode::Dark), PlannerTheme::dark());
    }

    #[test]
    fn test_highlight_colours_are_distinct() {
        for theme in [PlannerTheme::light(), PlannerTheme::dark()] {
            assert_ne!(theme.today_background, theme.span_background);
            assert_ne!(theme.span_background, theme.start_background);
            assert_ne!(theme.start_background, theme.day_background);
        }
    }
}
