//! Per-date grouping derived from the event collection.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::event::Event;

/// Events grouped by day, each group ordered by start time.
///
/// Only ever built from a full event slice; there is no way to insert into
/// or remove from an index directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    by_date: BTreeMap<NaiveDate, Vec<Event>>,
}

impl EventIndex {
    /// Group `events` by date. Within a date, events are sorted by start
    /// time; equal start times keep their order in `events`.
    pub fn build(events: &[Event]) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event.clone());
        }

        for group in by_date.values_mut() {
            // sort_by_key is stable
            group.sort_by_key(|event| event.start_time);
        }

        Self { by_date }
    }

    /// Events on `date` in display order (empty when none)
    pub fn on(&self, date: NaiveDate) -> &[Event] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.on(date).len()
    }

    /// Number of dates holding at least one event
    pub fn busy_day_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Event])> + '_ {
        self.by_date
            .iter()
            .map(|(date, events)| (*date, events.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
