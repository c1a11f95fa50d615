use log::error;

use super::command::{Command, TimerFamily};
use super::error::LandingError;

/// "Copy e-mail" button with a short-lived confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactCopy {
    contact: String,
    copied: bool,
    feedback_ms: u32,
}

impl ContactCopy {
    pub fn new(contact: impl Into<String>, feedback_ms: u32) -> Self {
        Self {
            contact: contact.into(),
            copied: false,
            feedback_ms,
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn copy(&self) -> Vec<Command> {
        vec![Command::WriteClipboard(self.contact.clone())]
    }

    /// Applies the clipboard outcome. Failures are logged and otherwise
    /// leave the button untouched.
    pub fn on_result(&mut self, result: Result<(), String>) -> Vec<Command> {
        match result {
            Ok(()) => {
                self.copied = true;
                vec![Command::once(TimerFamily::CopyFeedback, self.feedback_ms)]
            }
            Err(reason) => {
                error!("Error copying contact email: {}", LandingError::Clipboard(reason));
                Vec::new()
            }
        }
    }

    pub fn clear_feedback(&mut self) {
        self.copied = false;
    }
}
