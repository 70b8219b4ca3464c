use chrono::NaiveDate;

use super::CalendarController;
use crate::models::event::{EventDraft, EventId, EventValidationError};
use crate::services::event::EventStore;
use crate::utils::date::DateProvider;

/// Add-event form: visibility plus the draft being composed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    open: bool,
    pub draft: EventDraft,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EventId),
    /// Nothing was stored; the form stays open with the draft as it was
    Rejected(EventValidationError),
}

impl<D: DateProvider> CalendarController<D> {
    /// Open the form targeting `date`, which also becomes the selection.
    pub fn open_form(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.form.open = true;
    }

    /// Hide the form. The draft is kept for the next time it opens.
    pub fn close_form(&mut self) {
        self.form.open = false;
    }

    pub fn draft(&self) -> &EventDraft {
        &self.form.draft
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.form.draft
    }

    /// Commit the draft to the selected date.
    ///
    /// On success the draft resets to its defaults and the form closes.
    pub fn submit(&mut self, store: &mut EventStore) -> SubmitOutcome {
        let draft = &self.form.draft;
        match store.add_event(
            self.selected_date,
            draft.title.clone(),
            draft.start_time,
            draft.end_time,
            draft.color,
        ) {
            Ok(id) => {
                self.form.draft.reset();
                self.form.open = false;
                SubmitOutcome::Added(id)
            }
            Err(reason) => {
                log::debug!("Draft rejected: {}", reason);
                SubmitOutcome::Rejected(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventColor;
    use crate::utils::date::FixedDateProvider;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn controller() -> CalendarController<FixedDateProvider> {
        CalendarController::new(FixedDateProvider(march(10)))
    }

    #[test]
    fn test_open_form_selects_target_date() {
        let mut controller = controller();
        controller.open_form(march(21));

        assert!(controller.form().is_open());
        assert_eq!(controller.selected_date(), march(21));
        assert_eq!(controller.draft(), &EventDraft::default());
    }

    #[test]
    fn test_submit_success_resets_draft_and_closes() {
        let mut controller = controller();
        let mut store = EventStore::new();

        controller.open_form(march(11));
        controller.draft_mut().title = "Dentist".into();
        controller.draft_mut().color = EventColor::Red;

        let outcome = controller.submit(&mut store);
        let SubmitOutcome::Added(id) = outcome else {
            panic!("expected the draft to be accepted, got {:?}", outcome);
        };

        let event = store.get(id).unwrap();
        assert_eq!(event.date, march(11));
        assert_eq!(event.start_time, hm(9, 0));
        assert_eq!(event.end_time, hm(10, 0));
        assert_eq!(event.color, EventColor::Red);
        assert!(!controller.form().is_open());
        assert_eq!(controller.draft(), &EventDraft::default());
    }

    #[test]
    fn test_submit_blank_title_is_rejected_silently() {
        let mut controller = controller();
        let mut store = EventStore::new();

        controller.open_form(march(11));
        controller.draft_mut().title = "   ".into();
        let draft_before = controller.draft().clone();

        assert_eq!(
            controller.submit(&mut store),
            SubmitOutcome::Rejected(EventValidationError::EmptyTitle)
        );
        assert!(controller.form().is_open());
        assert_eq!(controller.draft(), &draft_before);
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn test_submit_inverted_times_is_rejected() {
        let mut controller = controller();
        let mut store = EventStore::new();

        controller.open_form(march(11));
        let draft = controller.draft_mut();
        draft.title = "Backwards".into();
        draft.start_time = hm(15, 0);
        draft.end_time = hm(14, 0);

        assert_eq!(
            controller.submit(&mut store),
            SubmitOutcome::Rejected(EventValidationError::EndNotAfterStart)
        );
        assert!(controller.form().is_open());
        assert_eq!(controller.draft().start_time, hm(15, 0));
    }

    #[test]
    fn test_close_keeps_draft() {
        let mut controller = controller();
        controller.open_form(march(11));
        controller.draft_mut().title = "Half typed".into();
        controller.close_form();

        assert!(!controller.form().is_open());
        assert_eq!(controller.draft().title, "Half typed");
    }
}
