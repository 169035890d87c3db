//! User-visible notifications.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        })
    }
}

/// Shows alerts and asks yes/no questions.
///
/// Both calls block the flow that issues them, like a browser alert.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn notify(&self, level: Level, message: &str);

    /// Asks the user to confirm `message`.
    fn confirm(&self, message: &str) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, level: Level, message: &str) {
        (**self).notify(level, message);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// A notifier that records messages and answers every confirmation the
/// same way.
#[derive(Debug)]
pub struct RecordingNotifier {
    answer: bool,
    messages: Mutex<Vec<(Level, String)>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates a notifier that confirms every prompt.
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// Creates a notifier that declines every prompt.
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            messages: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns every notification, oldest first.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    pub fn last(&self) -> Option<(Level, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns every confirmation prompt shown.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::declining();
        notifier.notify(Level::Success, "saved");
        assert!(!notifier.confirm("Delete?"));

        assert_eq!(notifier.last(), Some((Level::Success, "saved".to_string())));
        assert_eq!(notifier.prompts(), ["Delete?"]);
        assert!(RecordingNotifier::accepting().confirm("Delete?"));
    }
}
