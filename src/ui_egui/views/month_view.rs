use egui::{Margin, Sense, Stroke, Vec2};

use crate::controller::{CalendarAction, CalendarView, GridCell};
use crate::ui_egui::theme::CalendarTheme;

/// Height of a day cell in points
pub(super) const CELL_HEIGHT: f32 = 96.0;
const HEADER_HEIGHT: f32 = 30.0;
const SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    /// Draw the weekday header and the day grid. Clicks are reported as
    /// actions; nothing is mutated here.
    pub fn show(
        ui: &mut egui::Ui,
        view: &CalendarView,
        theme: &CalendarTheme,
        actions: &mut Vec<CalendarAction>,
    ) {
        let total_spacing = SPACING * 6.0; // 6 gaps between 7 columns
        let col_width = ((ui.available_width() - total_spacing) / 7.0).max(40.0);

        egui::Grid::new("month_header_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for day in view.weekday_labels {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(theme.header_background)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, theme.day_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(day)
                                            .size(14.0)
                                            .color(theme.header_text)
                                            .strong(),
                                    );
                                });
                        },
                    );
                }
            });

        ui.add_space(5.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("month_grid")
                    .spacing([SPACING, SPACING])
                    .show(ui, |ui| {
                        for row in view.grid.rows() {
                            for cell in row {
                                match cell {
                                    GridCell::Empty => {
                                        let (rect, _response) = ui.allocate_exact_size(
                                            Vec2::new(col_width, CELL_HEIGHT),
                                            Sense::hover(),
                                        );
                                        ui.painter().rect_filled(rect, 2.0, theme.empty_background);
                                    }
                                    GridCell::Day(day) => {
                                        if let Some(action) =
                                            Self::render_day_cell(ui, day, theme, col_width)
                                        {
                                            actions.push(action);
                                        }
                                    }
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
