//! Theme module for the egui calendar
//!
//! Light and dark color sets for the month grid, plus the mapping from the
//! event palette to egui colors.

use egui::Color32;

use crate::models::event::EventColor;
use crate::models::settings::Settings;

/// Colors used to paint the calendar
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    /// Background of leading placeholder cells
    pub empty_background: Color32,
    pub day_background: Color32,
    pub day_border: Color32,
    pub today_background: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub busy_indicator: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub header_background: Color32,
    pub header_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            empty_background: Color32::from_rgb(236, 236, 240),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_border: Color32::from_rgb(246, 80, 30),
            busy_indicator: Color32::from_rgb(230, 150, 0),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            header_background: Color32::from_rgb(230, 232, 238),
            header_text: Color32::from_rgb(50, 55, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            empty_background: Color32::from_rgb(34, 34, 36),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_border: Color32::from_rgb(255, 120, 70),
            busy_indicator: Color32::from_rgb(255, 200, 80),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            header_background: Color32::from_rgb(50, 52, 58),
            header_text: Color32::from_rgb(220, 220, 225),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        if settings.is_dark() {
            Self::dark()
        } else {
            Self::light()
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
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Fill color for an event chip
    pub fn event_color(color: EventColor) -> Color32 {
        let (r, g, b) = color.rgb();
        Color32::from_rgb(r, g, b)
    }

    /// Readable text color on top of an event chip
    pub fn event_text_color(color: EventColor) -> Color32 {
        let (r, g, b) = color.rgb();
        let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        if luminance > 150.0 {
            Color32::from_rgb(30, 30, 30)
        } else {
            Color32::WHITE
        }
    }
}
