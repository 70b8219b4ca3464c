use chrono::NaiveDate;

use crate::controller::CalendarAction;

/// Keyboard shortcuts available while the form is closed.
pub(super) fn collect(ctx: &egui::Context, selected: NaiveDate, actions: &mut Vec<CalendarAction>) {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp) {
            actions.push(CalendarAction::PreviousMonth);
        }

        if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown) {
            actions.push(CalendarAction::NextMonth);
        }

        if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
            actions.push(CalendarAction::GoToToday);
        }

        if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
            actions.push(CalendarAction::OpenForm(selected));
        }
    });
}
