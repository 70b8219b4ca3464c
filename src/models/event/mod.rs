// Event module
// Calendar event model for the month grid

mod color;
mod draft;

pub use color::EventColor;
pub use draft::EventDraft;

use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use thiserror::Error;

/// Wall-clock format used for start/end times (`HH:MM`, 24-hour)
pub const TIME_FORMAT: &str = "%H:%M";

/// Date key format (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier assigned by the event store. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons an event is refused by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    EndNotAfterStart,
}

/// A titled time interval on a single calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub color: EventColor,
}

impl Event {
    /// Create a new event, validating title and time range.
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{Event, EventColor, EventId};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
    /// let event = Event::new(EventId(1), date, "Daily Standup", start, end, EventColor::Amber).unwrap();
    /// assert_eq!(event.time_range_label(), "10:00 - 11:30");
    /// ```
    pub fn new(
        id: EventId,
        date: NaiveDate,
        title: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        color: EventColor,
    ) -> Result<Self, EventValidationError> {
        let title = title.into();
        validate_fields(&title, start_time, end_time)?;

        Ok(Self {
            id,
            date,
            title,
            start_time,
            end_time,
            color,
        })
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }

    /// Start time as shown on event chips
    pub fn start_label(&self) -> String {
        self.start_time.format(TIME_FORMAT).to_string()
    }

    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT)
        )
    }

    /// `YYYY-MM-DD` key of the event's day
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Shared validation used by `Event::new` and the add-event form.
pub fn validate_fields(
    title: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<(), EventValidationError> {
    if title.trim().is_empty() {
        return Err(EventValidationError::EmptyTitle);
    }

    if end_time <= start_time {
        return Err(EventValidationError::EndNotAfterStart);
    }

    Ok(())
}

/// Parse an `HH:MM` wall-clock string
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new(EventId(7), date(), "Meeting", hm(9, 0), hm(10, 0), EventColor::Blue)
            .unwrap();

        assert_eq!(event.id, EventId(7));
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.date_key(), "2024-03-10");
        assert_eq!(event.start_label(), "09:00");
        assert_eq!(event.color, EventColor::Blue);
    }

    #[test]
    fn test_new_event_keeps_title_as_entered() {
        let event = Event::new(EventId(1), date(), "  Lunch ", hm(12, 0), hm(13, 0), EventColor::Amber)
            .unwrap();
        assert_eq!(event.title, "  Lunch ");
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new(EventId(1), date(), "", hm(9, 0), hm(10, 0), EventColor::Amber);
        assert_eq!(result.unwrap_err(), EventValidationError::EmptyTitle);
    }

    #[test]
    fn test_new_event_whitespace_title() {
        let result = Event::new(EventId(1), date(), " \t ", hm(9, 0), hm(10, 0), EventColor::Amber);
        assert_eq!(result.unwrap_err(), EventValidationError::EmptyTitle);
    }

    #[test]
    fn test_new_event_equal_times() {
        let result = Event::new(EventId(1), date(), "Meeting", hm(9, 0), hm(9, 0), EventColor::Amber);
        assert_eq!(result.unwrap_err(), EventValidationError::EndNotAfterStart);
    }

    #[test]
    fn test_new_event_end_before_start() {
        let result = Event::new(EventId(1), date(), "Meeting", hm(11, 0), hm(10, 59), EventColor::Amber);
        assert_eq!(result.unwrap_err(), EventValidationError::EndNotAfterStart);
    }

    #[test]
    fn test_duration() {
        let event = Event::new(EventId(1), date(), "Standup", hm(10, 0), hm(11, 30), EventColor::Amber)
            .unwrap();
        assert_eq!(event.duration(), chrono::Duration::minutes(90));
        assert_eq!(event.time_range_label(), "10:00 - 11:30");
    }

    #[test]
    fn test_time_order_matches_string_order() {
        let samples = ["00:00", "00:59", "09:00", "09:30", "10:00", "23:59"];
        for pair in samples.windows(2) {
            let (a, b) = (parse_time(pair[0]).unwrap(), parse_time(pair[1]).unwrap());
            assert_eq!(a < b, pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("7:05"), Some(hm(7, 5)));
    }
}
