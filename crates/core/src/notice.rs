//! User-facing notices
//!
//! Services report outcomes through the `Notifier` trait. The desktop UI
//! plugs in a `NoticeQueue` and drains it into its toast stack.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    /// Informational: the local list was corrected from the server
    Sync,
    Warning,
    Error,
}

impl NoticeLevel {
    /// How long the toast stays visible
    pub fn ttl(&self) -> Duration {
        match self {
            NoticeLevel::Success => Duration::from_millis(3000),
            NoticeLevel::Sync => Duration::from_millis(6000),
            NoticeLevel::Warning => Duration::from_millis(4000),
            NoticeLevel::Error => Duration::from_millis(5000),
        }
    }

    /// CSS modifier used by the toast stack
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast-success",
            NoticeLevel::Sync => "toast-info",
            NoticeLevel::Warning => "toast-warning",
            NoticeLevel::Error => "toast-error",
        }
    }
}

/// A single notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub text: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            text: text.into(),
            ttl: level.ttl(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn sync(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Sync, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

/// Sink for user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// Shared FIFO of pending notices
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    inner: Arc<Mutex<VecDeque<Notice>>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notice: Notice) {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.push_back(notice);
    }

    /// Take every pending notice, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeQueue {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = ?notice.level, text = %notice.text, "Notice");
        self.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_per_level() {
        assert_eq!(Notice::sync("x").ttl, Duration::from_millis(6000));
        assert_eq!(Notice::warning("x").ttl, Duration::from_millis(4000));
        assert_eq!(Notice::error("x").ttl, Duration::from_millis(5000));
        assert_eq!(Notice::success("x").ttl, Duration::from_millis(3000));
    }

    #[test]
    fn test_queue_drains_in_order() {
        let queue = NoticeQueue::new();
        let handle = queue.clone();
        handle.notify(Notice::success("first"));
        handle.notify(Notice::error("second"));
        assert_eq!(queue.len(), 2);

        let texts: Vec<_> = queue.drain().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_is_shared_across_threads() {
        let queue = NoticeQueue::new();
        let worker = queue.clone();
        std::thread::spawn(move || worker.notify(Notice::warning("from thread")))
            .join()
            .unwrap();
        assert_eq!(queue.drain()[0].level, NoticeLevel::Warning);
    }
}
