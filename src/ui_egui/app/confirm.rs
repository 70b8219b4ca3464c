//! Native confirmation dialog for destructive actions.
//!
//! egui has no blocking modal, so the delete prompt goes through the
//! platform message box instead.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::services::prompt::ConfirmPrompt;

/// Blocking Yes/No dialog shown by the operating system
#[derive(Debug, Clone)]
pub struct NativeConfirmPrompt {
    title: String,
}

impl NativeConfirmPrompt {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for NativeConfirmPrompt {
    fn default() -> Self {
        Self::new("Delete Event")
    }
}

impl ConfirmPrompt for NativeConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&self.title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(result, MessageDialogResult::Yes | MessageDialogResult::Ok)
    }
}
