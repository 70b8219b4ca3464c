//! Calendar view controller.
//!
//! Holds the transient UI state (displayed month, selected day, add-event
//! form) and turns user actions into store mutations. The event collection
//! itself stays in [`EventStore`]; every method that needs it borrows it.

mod form;
mod grid;
mod navigation;
mod view;

pub use form::{FormState, SubmitOutcome};
pub use grid::{DayCell, GridCell, MonthGrid, BUSY_THRESHOLD, VISIBLE_EVENTS_PER_DAY};
pub use view::{CalendarView, FormView, WEEKDAY_LABELS};

use chrono::NaiveDate;

use crate::models::event::{EventColor, EventId};
use crate::models::ui::MonthCursor;
use crate::services::event::EventStore;
use crate::services::prompt::{delete_event_message, ConfirmPrompt};
use crate::utils::date::DateProvider;

/// User input understood by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    GoToToday,
    /// Single click on a day cell
    SelectDate(NaiveDate),
    /// Double click on a day cell
    OpenForm(NaiveDate),
    CloseForm,
    SetTitle(String),
    SetStartTime(chrono::NaiveTime),
    SetEndTime(chrono::NaiveTime),
    SetColor(EventColor),
    SubmitForm,
    /// Click on an event entry inside a cell
    DeleteEvent(EventId),
}

/// Result of asking to delete an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

pub struct CalendarController<D: DateProvider> {
    dates: D,
    cursor: MonthCursor,
    selected_date: NaiveDate,
    form: FormState,
}

impl<D: DateProvider> CalendarController<D> {
    /// Start on the current month with today selected and the form closed
    pub fn new(dates: D) -> Self {
        let today = dates.today();
        Self {
            dates,
            cursor: MonthCursor::containing(today),
            selected_date: today,
            form: FormState::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.dates.today()
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Select a day. Any valid date is accepted, including ones outside the
    /// displayed month.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Delete `id` after the user confirms. Selection is left alone.
    pub fn delete_event(
        &self,
        store: &mut EventStore,
        id: EventId,
        prompt: &mut dyn ConfirmPrompt,
    ) -> DeleteOutcome {
        let Some(event) = store.get(id) else {
            return DeleteOutcome::NotFound;
        };

        if !prompt.confirm(&delete_event_message(&event.title)) {
            log::debug!("Deletion of event {} declined", id);
            return DeleteOutcome::Declined;
        }

        if store.delete_event(id) {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }

    /// Apply one user action.
    pub fn apply(
        &mut self,
        action: CalendarAction,
        store: &mut EventStore,
        prompt: &mut dyn ConfirmPrompt,
    ) {
        match action {
            CalendarAction::PreviousMonth => self.previous_month(),
            CalendarAction::NextMonth => self.next_month(),
            CalendarAction::GoToToday => self.go_to_today(),
            CalendarAction::SelectDate(date) => self.select_date(date),
            CalendarAction::OpenForm(date) => self.open_form(date),
            CalendarAction::CloseForm => self.close_form(),
            CalendarAction::SetTitle(title) => self.form.draft.title = title,
            CalendarAction::SetStartTime(time) => self.form.draft.start_time = time,
            CalendarAction::SetEndTime(time) => self.form.draft.end_time = time,
            CalendarAction::SetColor(color) => self.form.draft.color = color,
            CalendarAction::SubmitForm => {
                self.submit(store);
            }
            CalendarAction::DeleteEvent(id) => {
                self.delete_event(store, id, prompt);
            }
        }
    }
}
