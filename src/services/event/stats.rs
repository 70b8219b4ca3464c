//! Aggregate counters shown under the grid.

use chrono::NaiveDate;

use super::EventStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarStats {
    pub total_events: usize,
    pub todays_events: usize,
    /// Distinct dates holding at least one event
    pub busy_days: usize,
}

impl CalendarStats {
    pub fn collect(store: &EventStore, today: NaiveDate) -> Self {
        Self {
            total_events: store.total_count(),
            todays_events: store.count_on_date(today),
            busy_days: store.busy_day_count(),
        }
    }

    /// (value, label) pairs in display order
    pub fn entries(&self) -> [(usize, &'static str); 3] {
        [
            (self.total_events, "Total Events"),
            (self.todays_events, "Today's Events"),
            (self.busy_days, "Busy Days"),
        ]
    }
}
