mod confirm;
mod header;
mod shortcuts;
mod status_bar;

pub use self::confirm::NativeConfirmPrompt;

use crate::controller::{CalendarAction, CalendarController};
use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::ui_egui::event_dialog::render_event_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::MonthView;
use crate::utils::date::{DateProvider, SystemDateProvider};

pub struct CalendarApp {
    /// Sole owner of the event collection
    store: EventStore,
    controller: CalendarController<SystemDateProvider>,
    prompt: NativeConfirmPrompt,
    active_theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.controller.view(&self.store);
        let mut actions: Vec<CalendarAction> = Vec::new();

        if view.form.is_none() {
            shortcuts::collect(ctx, self.controller.selected_date(), &mut actions);
        } else if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.push(CalendarAction::CloseForm);
        }

        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            header::render_header(ui, &view.title, &mut actions);
        });

        egui::TopBottomPanel::bottom("calendar_stats").show(ctx, |ui| {
            status_bar::render_stats(ui, &view.stats, &self.active_theme);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            MonthView::show(ui, &view, &self.active_theme, &mut actions);
        });

        if let Some(form) = &view.form {
            render_event_dialog(ctx, form, &self.active_theme, &mut actions);
        }

        if !actions.is_empty() {
            for action in actions {
                self.controller
                    .apply(action, &mut self.store, &mut self.prompt);
            }
            ctx.request_repaint();
        }
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let dates = SystemDateProvider;
        let store = if settings.seed_sample_events {
            EventStore::with_sample_events(dates.today())
        } else {
            EventStore::new()
        };
        log::info!(
            "Starting with {} event(s) on {} day(s)",
            store.total_count(),
            store.busy_day_count()
        );

        let active_theme = CalendarTheme::from_settings(settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            store,
            controller: CalendarController::new(dates),
            prompt: NativeConfirmPrompt::default(),
            active_theme,
        }
    }
}
