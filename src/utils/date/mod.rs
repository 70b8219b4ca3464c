// Date utility functions
// Calendar arithmetic and the injectable source of "today"

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current local date.
///
/// Everything else the calendar needs from a date library is pure
/// arithmetic below; only "today" depends on the wall clock, so only
/// that is injected.
#[cfg_attr(test, mockall::automock)]
pub trait DateProvider {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day. Used by tests and demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateProvider(pub NaiveDate);

impl DateProvider for FixedDateProvider {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: DateProvider + ?Sized> DateProvider for Box<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Number of days in the given month (1-based)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Move a (year, month) pair by `delta_months`, carrying across years
pub fn shift_month(year: i32, month: u32, delta_months: i32) -> (i32, u32) {
    let total_months = (year * 12) + (month as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    (new_year, new_month as u32)
}

/// Weekday index of `date` with Sunday = 0
pub fn weekday_from_sunday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// "March 2024"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Mar 10, 2024"
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
