//! Day cell rendering for the month view.
//!
//! Paints the day number, busy marker, up to two event chips and the
//! "+N more" / add hints, then maps pointer input to a single action.

use egui::{Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, CELL_HEIGHT};
use crate::controller::{CalendarAction, DayCell};
use crate::models::event::EventId;
use crate::ui_egui::theme::CalendarTheme;

const CHIP_HEIGHT: f32 = 18.0;
const CHIP_TOP: f32 = 24.0;

impl MonthView {
    /// Shorten `text` with a trailing "…" so it fits into `max_width`.
    pub(super) fn fit_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &FontId,
        max_width: f32,
    ) -> String {
        let measure = |candidate: &str| {
            ui.fonts(|f| {
                f.layout_no_wrap(candidate.to_string(), font_id.clone(), Color32::WHITE)
                    .size()
                    .x
            })
        };

        if max_width <= 0.0 {
            return String::new();
        }
        if measure(text) <= max_width {
            return text.to_string();
        }

        let boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        // Largest prefix whose ellipsised form still fits
        let (mut low, mut high) = (0usize, boundaries.len());
        while low < high {
            let mid = (low + high + 1) / 2;
            let end = boundaries.get(mid).copied().unwrap_or(text.len());
            if measure(&format!("{}…", &text[..end])) <= max_width {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        let end = boundaries.get(low).copied().unwrap_or(text.len());
        format!("{}…", &text[..end])
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        theme: &CalendarTheme,
        col_width: f32,
    ) -> Option<CalendarAction> {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::click());
        let painter = ui.painter();

        let bg_color = if cell.is_today {
            theme.today_background
        } else {
            theme.day_background
        };
        painter.rect_filled(rect, 4.0, bg_color);

        let border = if cell.is_selected {
            Stroke::new(2.0, theme.selected_border)
        } else if cell.is_today {
            Stroke::new(1.5, theme.today_border)
        } else {
            Stroke::new(1.0, theme.day_border)
        };
        painter.rect_stroke(rect, 4.0, border);

        if response.hovered() {
            painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(100, 150, 200, 24));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        painter.text(
            Pos2::new(rect.left() + 6.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            cell.day.to_string(),
            FontId::proportional(14.0),
            theme.text_primary,
        );

        if cell.is_busy {
            painter.text(
                Pos2::new(rect.right() - 6.0, rect.top() + 4.0),
                egui::Align2::RIGHT_TOP,
                "⚡",
                FontId::proportional(14.0),
                theme.busy_indicator,
            );
        }

        let chip_font = FontId::proportional(11.5);
        let mut hitboxes: Vec<(Rect, EventId)> = Vec::with_capacity(cell.visible_events.len());
        let mut y = rect.top() + CHIP_TOP;

        for event in &cell.visible_events {
            let chip = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, y),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            painter.rect_filled(chip, 3.0, CalendarTheme::event_color(event.color));

            let label = format!("{} {}", event.start_label(), event.title.trim());
            let label = Self::fit_to_width(ui, &label, &chip_font, chip.width() - 8.0);
            painter.text(
                Pos2::new(chip.left() + 4.0, chip.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                chip_font.clone(),
                CalendarTheme::event_text_color(event.color),
            );

            hitboxes.push((chip, event.id));
            y += CHIP_HEIGHT + 2.0;
        }

        if let Some(more) = cell.more_label() {
            painter.text(
                Pos2::new(rect.left() + 6.0, y + 1.0),
                egui::Align2::LEFT_TOP,
                more,
                FontId::proportional(11.0),
                theme.text_secondary,
            );
        }

        if cell.show_add_hint() {
            let hint = Self::fit_to_width(
                ui,
                "Double click to add event",
                &FontId::proportional(10.5),
                rect.width() - 12.0,
            );
            painter.text(
                Pos2::new(rect.center().x, rect.bottom() - 8.0),
                egui::Align2::CENTER_BOTTOM,
                hint,
                FontId::proportional(10.5),
                theme.text_secondary.gamma_multiply(0.7),
            );
        }

        let hovered_event = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
            .and_then(|pos| {
                hitboxes
                    .iter()
                    .find(|(chip, _)| chip.contains(pos))
                    .map(|(_, id)| *id)
            });

        if let Some(id) = hovered_event {
            if let Some(event) = cell.visible_events.iter().find(|e| e.id == id) {
                response.clone().on_hover_text(format!(
                    "{}\n{}\nClick to delete",
                    event.title,
                    event.time_range_label()
                ));
            }

            // Clicks on a chip stop here and never reach the cell.
            if response.double_clicked() {
                return None;
            }
            if response.clicked() {
                return Some(CalendarAction::DeleteEvent(id));
            }
            return None;
        }

        // A double click also reports a click; check it first.
        if response.double_clicked() {
            return Some(CalendarAction::OpenForm(cell.date));
        }
        if response.clicked() {
            return Some(CalendarAction::SelectDate(cell.date));
        }

        None
    }
}
