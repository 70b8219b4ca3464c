//! In-memory event store.
//! Owns the event collection and keeps the per-date index in step with it.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::event::{Event, EventColor, EventId, EventValidationError};

mod index;
mod stats;

pub use index::EventIndex;
pub use stats::CalendarStats;

/// Exclusive owner of all calendar events.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
    index: EventIndex,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            index: EventIndex::default(),
        }
    }

    /// Store pre-filled with three demo events relative to `today`
    pub fn with_sample_events(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let samples = [
            (0, "Daily Standup", (10, 0), (11, 30), EventColor::Amber),
            (2, "Weekly catchup", (14, 30), (15, 30), EventColor::Orange),
            (5, "Team Meeting", (16, 0), (17, 0), EventColor::Green),
        ];

        for (offset, title, start, end, color) in samples {
            let (Some(start), Some(end)) = (
                NaiveTime::from_hms_opt(start.0, start.1, 0),
                NaiveTime::from_hms_opt(end.0, end.1, 0),
            ) else {
                continue;
            };
            let date = today + Duration::days(offset);
            if let Err(e) = store.add_event(date, title, start, end, color) {
                log::warn!("Skipping sample event '{}': {}", title, e);
            }
        }

        store
    }

    /// Append a new event.
    ///
    /// Rejected without touching the store when the title is blank or the
    /// end time is not after the start time.
    pub fn add_event(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        color: EventColor,
    ) -> Result<EventId, EventValidationError> {
        let id = EventId(self.next_id);
        let event = Event::new(id, date, title, start_time, end_time, color)?;

        log::debug!("Adding event {} '{}' on {}", id, event.title, event.date_key());
        self.next_id += 1;
        self.events.push(event);
        self.reindex();
        Ok(id)
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;

        if removed {
            log::debug!("Deleted event {}", id);
            self.reindex();
        }
        removed
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn index_by_date(&self) -> &EventIndex {
        &self.index
    }

    /// Events on `date`, sorted by start time
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.index.on(date)
    }

    pub fn count_on_date(&self, date: NaiveDate) -> usize {
        self.index.count_on(date)
    }

    pub fn total_count(&self) -> usize {
        self.events.len()
    }

    pub fn busy_day_count(&self) -> usize {
        self.index.busy_day_count()
    }

    pub fn stats(&self, today: NaiveDate) -> CalendarStats {
        CalendarStats::collect(self, today)
    }

    fn reindex(&mut self) {
        self.index = EventIndex::build(&self.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_add_event() {
        let mut store = EventStore::new();
        let id = store
            .add_event(march(10), "Standup", hm(10, 0), hm(11, 30), EventColor::Amber)
            .unwrap();

        assert_eq!(store.total_count(), 1);
        assert_eq!(store.get(id).unwrap().title, "Standup");
        assert_eq!(store.events_on(march(10))[0].id, id);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut store = EventStore::new();
        let first = store
            .add_event(march(1), "a", hm(9, 0), hm(10, 0), EventColor::Amber)
            .unwrap();
        assert!(store.delete_event(first));
        let second = store
            .add_event(march(1), "b", hm(9, 0), hm(10, 0), EventColor::Amber)
            .unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_rejected_add_leaves_store_untouched() {
        let mut store = EventStore::new();
        store
            .add_event(march(1), "keep", hm(9, 0), hm(10, 0), EventColor::Amber)
            .unwrap();
        let before = store.index_by_date().clone();

        assert_eq!(
            store.add_event(march(1), "   ", hm(9, 0), hm(10, 0), EventColor::Amber),
            Err(EventValidationError::EmptyTitle)
        );
        assert_eq!(
            store.add_event(march(2), "late", hm(10, 0), hm(10, 0), EventColor::Amber),
            Err(EventValidationError::EndNotAfterStart)
        );

        assert_eq!(store.total_count(), 1);
        assert_eq!(store.index_by_date(), &before);
    }

    #[test]
    fn test_rejected_add_does_not_consume_an_id() {
        let mut store = EventStore::new();
        let _ = store.add_event(march(1), "", hm(9, 0), hm(10, 0), EventColor::Amber);
        let id = store
            .add_event(march(1), "ok", hm(9, 0), hm(10, 0), EventColor::Amber)
            .unwrap();
        assert_eq!(id, EventId(1));
    }

    #[test]
    fn test_raw_collection_is_not_sorted() {
        let mut store = EventStore::new();
        store
            .add_event(march(10), "late", hm(15, 0), hm(16, 0), EventColor::Amber)
            .unwrap();
        store
            .add_event(march(10), "early", hm(8, 0), hm(9, 0), EventColor::Amber)
            .unwrap();

        assert_eq!(store.events()[0].title, "late");
        assert_eq!(store.events_on(march(10))[0].title, "early");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = EventStore::new();
        let id = store
            .add_event(march(3), "x", hm(9, 0), hm(10, 0), EventColor::Amber)
            .unwrap();

        assert!(store.delete_event(id));
        assert!(!store.delete_event(id));
        assert_eq!(store.total_count(), 0);
        assert_eq!(store.busy_day_count(), 0);
        assert!(store.events_on(march(3)).is_empty());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = EventStore::new();
        assert!(!store.delete_event(EventId(42)));
    }

    #[test]
    fn test_busy_day_count() {
        let mut store = EventStore::new();
        for day in [1, 1, 2, 9] {
            store
                .add_event(march(day), "x", hm(9, 0), hm(10, 0), EventColor::Amber)
                .unwrap();
        }
        assert_eq!(store.busy_day_count(), 3);
        assert_eq!(store.count_on_date(march(1)), 2);
        assert_eq!(store.count_on_date(march(4)), 0);
    }

    #[test]
    fn test_sample_events() {
        let store = EventStore::with_sample_events(march(10));
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.events_on(march(10))[0].title, "Daily Standup");
        assert_eq!(store.events_on(march(12))[0].title, "Weekly catchup");
        assert_eq!(store.events_on(march(15))[0].color, EventColor::Green);
    }
}
