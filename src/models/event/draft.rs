//! In-progress event composed in the add-event form.

use chrono::NaiveTime;

use super::{validate_fields, EventColor, EventValidationError};

/// Uncommitted event fields. The date comes from the form's target day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub color: EventColor,
}

impl EventDraft {
    pub fn default_start() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn default_end() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Check whether the store would accept this draft
    pub fn validate(&self) -> Result<(), EventValidationError> {
        validate_fields(&self.title, self.start_time, self.end_time)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            start_time: Self::default_start(),
            end_time: Self::default_end(),
            color: EventColor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = EventDraft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.start_time.format("%H:%M").to_string(), "09:00");
        assert_eq!(draft.end_time.format("%H:%M").to_string(), "10:00");
        assert_eq!(draft.color, EventColor::Amber);
    }

    #[test]
    fn test_default_draft_needs_a_title() {
        assert_eq!(
            EventDraft::default().validate(),
            Err(EventValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_reset() {
        let mut draft = EventDraft {
            title: "Gym".into(),
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            color: EventColor::Teal,
        };
        assert!(draft.validate().is_ok());

        draft.reset();
        assert_eq!(draft, EventDraft::default());
    }
}
