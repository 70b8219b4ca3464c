// UI models module
// Month cursor for the grid

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::utils::date::{days_in_month, shift_month};

/// Year + month shown by the grid. Day-of-month is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    pub fn shifted(self, delta_months: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, delta_months);
        Self { year, month }
    }

    pub fn first_day(&self) -> NaiveDate {
        // 1..=12 is enforced at construction; the fallback is unreachable for sane years.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Date for a day-of-month, `None` when out of range
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
