//! # Toast Stack
//!
//! Polls the shared `NoticeQueue` and shows each notice until its display
//! time runs out. Clicking a toast dismisses it early.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use uuid::Uuid;
use waconsole_core::Notice;

use crate::state::use_app;

const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// A notice on screen
#[derive(Debug, Clone, PartialEq)]
struct ActiveToast {
    notice: Notice,
    shown_at: Instant,
}

impl ActiveToast {
    fn new(notice: Notice, now: Instant) -> Self {
        Self {
            notice,
            shown_at: now,
        }
    }

    fn class(&self) -> String {
        format!("toast {}", self.notice.level.css_class())
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.notice.ttl
    }
}

/// Drop toasts whose time is up. Returns whether anything changed.
fn expire(toasts: &mut Vec<ActiveToast>, now: Instant) -> bool {
    let before = toasts.len();
    toasts.retain(|t| !t.is_expired(now));
    toasts.len() != before
}

/// Toast container, rendered once at the root
#[component]
pub fn ToastStack() -> Element {
    let app = use_app();
    let mut toasts = use_signal(Vec::<ActiveToast>::new);

    let queue = app.notices.clone();
    use_future(move || {
        let queue = queue.clone();
        async move {
            loop {
                tokio::time::sleep(POLL_INTERVAL).await;

                let now = Instant::now();
                let fresh = queue.drain();
                let has_fresh = !fresh.is_empty();

                let expired = toasts.peek().iter().any(|t| t.is_expired(now));
                if has_fresh || expired {
                    let mut list = toasts.write();
                    expire(&mut list, now);
                    list.extend(fresh.into_iter().map(|n| ActiveToast::new(n, now)));
                }
            }
        }
    });

    let mut dismiss = move |id: Uuid| {
        toasts.write().retain(|t| t.notice.id != id);
    };

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.read().iter() {
                div {
                    key: "{toast.notice.id}",
                    class: toast.class(),
                    role: "status",
                    onclick: {
                        let id = toast.notice.id;
                        move |_| dismiss(id)
                    },
                    "{toast.notice.text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_their_ttl() {
        let start = Instant::now();
        let mut toasts = vec![
            ActiveToast::new(Notice::success("saved"), start),
            ActiveToast::new(Notice::sync("refreshed"), start),
        ];

        assert!(!expire(&mut toasts, start + Duration::from_millis(2999)));
        assert_eq!(toasts.len(), 2);

        assert!(expire(&mut toasts, start + Duration::from_millis(3000)));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].notice.text, "refreshed");

        assert!(expire(&mut toasts, start + Duration::from_millis(6000)));
        assert!(toasts.is_empty());
    }
}
