//! Read-only projection handed to the renderer.

use chrono::NaiveDate;

use super::{CalendarController, MonthGrid};
use crate::models::event::{EventColor, EventDraft};
use crate::services::event::{CalendarStats, EventStore};
use crate::utils::date::{format_day_heading, format_month_year, DateProvider};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub date: NaiveDate,
    /// "Add Event for Mar 10, 2024"
    pub heading: String,
    pub draft: EventDraft,
    pub palette: [EventColor; 7],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// "March 2024"
    pub title: String,
    pub weekday_labels: [&'static str; 7],
    pub grid: MonthGrid,
    pub stats: CalendarStats,
    pub form: Option<FormView>,
}

impl<D: DateProvider> CalendarController<D> {
    /// Everything needed to draw one frame
    pub fn view(&self, store: &EventStore) -> CalendarView {
        let today = self.dates.today();

        let form = self.form.is_open().then(|| FormView {
            date: self.selected_date,
            heading: format!("Add Event for {}", format_day_heading(self.selected_date)),
            draft: self.form.draft.clone(),
            palette: EventColor::ALL,
        });

        CalendarView {
            title: format_month_year(self.cursor.first_day()),
            weekday_labels: WEEKDAY_LABELS,
            grid: MonthGrid::build(self.cursor, store, today, self.selected_date),
            stats: store.stats(today),
            form,
        }
    }
}
