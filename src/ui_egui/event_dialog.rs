//! Add-event form window.
//!
//! Renders the current draft and reports every edit as a
//! [`CalendarAction`]; the controller owns the draft itself.

use chrono::{NaiveTime, Timelike};
use egui::{RichText, Stroke, Vec2};

use crate::controller::{CalendarAction, FormView};
use crate::ui_egui::theme::CalendarTheme;

const MINUTE_STEP: u32 = 5;

/// Hour and minute pickers. Returns the new time when it changed.
pub fn render_time_picker(ui: &mut egui::Ui, id: &str, time: NaiveTime) -> Option<NaiveTime> {
    let mut hour = time.hour();
    let mut minute = time.minute();

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source(format!("{}_hour", id))
            .width(56.0)
            .selected_text(format!("{:02}", hour))
            .show_ui(ui, |ui| {
                for h in 0..24 {
                    ui.selectable_value(&mut hour, h, format!("{:02}", h));
                }
            });

        ui.label(":");

        egui::ComboBox::from_id_source(format!("{}_minute", id))
            .width(56.0)
            .selected_text(format!("{:02}", minute))
            .show_ui(ui, |ui| {
                for m in (0..60).step_by(MINUTE_STEP as usize) {
                    ui.selectable_value(&mut minute, m, format!("{:02}", m));
                }
            });
    });

    NaiveTime::from_hms_opt(hour, minute, 0).filter(|new_time| *new_time != time)
}

/// Draw the form window for `form`, pushing user edits onto `actions`.
pub fn render_event_dialog(
    ctx: &egui::Context,
    form: &FormView,
    theme: &CalendarTheme,
    actions: &mut Vec<CalendarAction>,
) {
    let mut open = true;

    egui::Window::new(RichText::new(&form.heading).strong())
        .id(egui::Id::new("add_event_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            let mut title = form.draft.title.clone();
            let title_response = ui.add(
                egui::TextEdit::singleline(&mut title)
                    .hint_text("Event title")
                    .desired_width(f32::INFINITY),
            );
            if title_response.changed() {
                actions.push(CalendarAction::SetTitle(title));
            }
            let enter_pressed =
                title_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(8.0);
            egui::Grid::new("add_event_times")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Start Time:");
                    if let Some(time) = render_time_picker(ui, "start", form.draft.start_time) {
                        actions.push(CalendarAction::SetStartTime(time));
                    }
                    ui.end_row();

                    ui.label("End Time:");
                    if let Some(time) = render_time_picker(ui, "end", form.draft.end_time) {
                        actions.push(CalendarAction::SetEndTime(time));
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Color:");
                for color in form.palette {
                    let selected = form.draft.color == color;
                    let stroke = if selected {
                        Stroke::new(2.5, theme.text_primary)
                    } else {
                        Stroke::new(1.0, theme.day_border)
                    };
                    let swatch = egui::Button::new("")
                        .fill(CalendarTheme::event_color(color))
                        .stroke(stroke)
                        .rounding(egui::Rounding::same(11.0))
                        .min_size(Vec2::splat(22.0));
                    if ui.add(swatch).on_hover_text(color.hex()).clicked() && !selected {
                        actions.push(CalendarAction::SetColor(color));
                    }
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save Event").clicked() || enter_pressed {
                    actions.push(CalendarAction::SubmitForm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(CalendarAction::CloseForm);
                }
            });
        });

    if !open {
        actions.push(CalendarAction::CloseForm);
    }
}
