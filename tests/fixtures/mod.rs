// Test fixtures - reusable test data
// Provides consistent dates, times and stores across test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use month_calendar::controller::CalendarController;
use month_calendar::models::event::EventColor;
use month_calendar::services::event::EventStore;
use month_calendar::utils::date::FixedDateProvider;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, March 10 2024 - "today" in most scenarios
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    pub fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    /// Thursday, Feb 29 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Tuesday, Dec 31 2024
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Controller whose "today" is `dates::today()`
pub fn controller() -> CalendarController<FixedDateProvider> {
    controller_on(dates::today())
}

pub fn controller_on(today: NaiveDate) -> CalendarController<FixedDateProvider> {
    CalendarController::new(FixedDateProvider(today))
}

/// Store holding a single "Daily Standup" on March 10, 10:00-11:30
pub fn standup_store() -> EventStore {
    let mut store = EventStore::new();
    store
        .add_event(
            dates::today(),
            "Daily Standup",
            hm(10, 0),
            hm(11, 30),
            EventColor::Amber,
        )
        .unwrap();
    store
}
