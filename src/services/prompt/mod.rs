//! Confirmation port gating destructive actions.

/// Asks the user a yes/no question and blocks until answered.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers every prompt with the same value.
///
/// Handy for scripted sessions where no user is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&mut self, message: &str) -> bool {
        log::debug!("Auto-answering '{}' with {}", message, self.0);
        self.0
    }
}

/// Message shown before deleting an event
pub fn delete_event_message(title: &str) -> String {
    format!("Delete \"{}\"?", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_event_message() {
        assert_eq!(delete_event_message("Daily Standup"), "Delete \"Daily Standup\"?");
    }

    #[test]
    fn test_fixed_answer() {
        assert!(FixedAnswer(true).confirm("?"));
        assert!(!FixedAnswer(false).confirm("?"));
    }
}
