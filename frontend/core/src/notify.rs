//! Notification Seam
//!
//! User-facing toasts, delivered by the front ends.
//!
//! Controllers emit notices through the [`Notifier`] trait and never know how
//! they are displayed. Delivery is fire-and-forget: no return value, no
//! ordering guarantee beyond the causal order of the emitting code.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A single notice shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// All notification sinks implement this trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable sink name for logging.
    fn name(&self) -> &str;

    /// Deliver a notice to the user.
    async fn notify(&self, kind: NoticeKind, message: &str);
}

/// In-memory sink. Feeds the TUI toast strip and the test assertions.
#[derive(Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// The most recent notice, if any.
    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    fn name(&self) -> &str {
        "memory"
    }

    async fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().push(Notice::new(kind, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_notifier_preserves_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(NoticeKind::Info, "Uploading file...").await;
        notifier.notify(NoticeKind::Success, "done").await;

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert_eq!(notices[0].message, "Uploading file...");
        assert_eq!(notices[1].kind, NoticeKind::Success);
        assert_eq!(notifier.last().unwrap().message, "done");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NoticeKind::Info.to_string(), "info");
        assert_eq!(NoticeKind::Success.to_string(), "success");
        assert_eq!(NoticeKind::Error.to_string(), "error");
    }
}
