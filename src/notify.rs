//! Transient user-facing notices (toasts).
//!
//! Form flows report outcomes as `Notice`s to an injected `Notifier`; how and
//! where they are rendered is up to the presentation layer.

use serde::Serialize;
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Receives notices raised by the form flows.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Default => info!("Notice: {} - {}", notice.title, notice.description),
            NoticeVariant::Destructive => {
                warn!("Notice: {} - {}", notice.title, notice.description)
            }
        }
    }
}

/// Notifier that keeps every notice, for inspection by callers and tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }

    pub fn len(&self) -> usize {
        self.notices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_variant() {
        assert!(!Notice::info("a", "b").is_destructive());
        assert!(Notice::destructive("a", "b").is_destructive());
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        assert!(notifier.is_empty());

        notifier.notify(Notice::info("first", ""));
        notifier.notify(Notice::destructive("second", ""));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "first");
        assert_eq!(notifier.last().unwrap().title, "second");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(Notice::destructive("Error", "Oops")).unwrap();
        assert_eq!(json["variant"], "destructive");
        assert_eq!(json["title"], "Error");
    }

    #[test]
    fn test_tracing_notifier_accepts_both_variants() {
        let notifier: &dyn Notifier = &TracingNotifier;
        notifier.notify(Notice::info("Message sent!", "Thanks"));
        notifier.notify(Notice::destructive("Error", "Try again"));
    }
}
