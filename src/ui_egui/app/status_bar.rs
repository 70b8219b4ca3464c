//! Stats bar under the grid: total events, today's events, busy days.

use egui::{Margin, RichText, Stroke};

use crate::services::event::CalendarStats;
use crate::ui_egui::theme::CalendarTheme;

pub(super) fn render_stats(ui: &mut egui::Ui, stats: &CalendarStats, theme: &CalendarTheme) {
    ui.add_space(6.0);
    ui.columns(3, |columns| {
        for (column, (value, label)) in columns.iter_mut().zip(stats.entries()) {
            egui::Frame::none()
                .fill(theme.header_background)
                .rounding(egui::Rounding::same(6.0))
                .stroke(Stroke::new(1.0, theme.day_border))
                .inner_margin(Margin::symmetric(8.0, 6.0))
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(value.to_string())
                                .size(22.0)
                                .strong()
                                .color(theme.header_text),
                        );
                        ui.label(RichText::new(label).size(12.0).color(theme.text_secondary));
                    });
                });
        }
    });
    ui.add_space(6.0);
}
