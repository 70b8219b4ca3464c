use egui::RichText;

use crate::controller::CalendarAction;

/// "< Previous" | month title + "Today" | "Next >"
pub(super) fn render_header(ui: &mut egui::Ui, title: &str, actions: &mut Vec<CalendarAction>) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("< Previous").clicked() {
            actions.push(CalendarAction::PreviousMonth);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Next >").clicked() {
                actions.push(CalendarAction::NextMonth);
            }

            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                let remaining = ui.available_width();
                // Rough centering; egui has no "center between siblings" layout.
                ui.add_space((remaining / 2.0 - 110.0).max(0.0));
                ui.heading(RichText::new(title).strong());
                if ui
                    .button("Today")
                    .on_hover_text("Go to the current month (Ctrl+T)")
                    .clicked()
                {
                    actions.push(CalendarAction::GoToToday);
                }
            });
        });
    });
    ui.add_space(6.0);
}
