//! Month grid generation.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::ui::MonthCursor;
use crate::services::event::EventStore;
use crate::utils::date::weekday_from_sunday;

/// Events listed inside a day cell before collapsing into "+N more"
pub const VISIBLE_EVENTS_PER_DAY: usize = 2;

/// A day with more events than this is flagged as busy
pub const BUSY_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_busy: bool,
    /// First events of the day in start-time order
    pub visible_events: Vec<Event>,
    /// Events not listed in the cell
    pub hidden_count: usize,
}

impl DayCell {
    pub fn event_count(&self) -> usize {
        self.visible_events.len() + self.hidden_count
    }

    /// "+N more" label, if anything is hidden
    pub fn more_label(&self) -> Option<String> {
        (self.hidden_count > 0).then(|| format!("+{} more", self.hidden_count))
    }

    pub fn show_add_hint(&self) -> bool {
        self.event_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Leading placeholder before day 1
    Empty,
    Day(DayCell),
}

/// Cells of one month, Sunday-first, row-major. No trailing placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn build(
        cursor: MonthCursor,
        store: &EventStore,
        today: NaiveDate,
        selected: NaiveDate,
    ) -> Self {
        let leading = weekday_from_sunday(cursor.first_day()) as usize;
        let days = cursor.days_in_month();

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat(GridCell::Empty).take(leading));

        for day in 1..=days {
            let Some(date) = cursor.day(day) else {
                continue;
            };
            let events = store.events_on(date);
            let visible = events.len().min(VISIBLE_EVENTS_PER_DAY);

            cells.push(GridCell::Day(DayCell {
                date,
                day,
                is_today: date == today,
                is_selected: date == selected,
                is_busy: events.len() > BUSY_THRESHOLD,
                visible_events: events[..visible].to_vec(),
                hidden_count: events.len() - visible,
            }));
        }

        Self { cursor, cells }
    }

    pub fn leading_placeholders(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Empty))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Empty => None,
        })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }

    /// Cells split into week rows; the last row may be short
    pub fn rows(&self) -> std::slice::Chunks<'_, GridCell> {
        self.cells.chunks(7)
    }
}
