//! Toast Notifications
//!
//! A top-right stack of transient messages. The queue lives in context as a
//! [`Toasts`] handle so any component can push to it; [`Toaster`] renders it.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_toasts_provider();
//! rsx! { Toaster { theme: "dark" } }
//!
//! // In child components
//! let mut toasts = use_toasts();
//! toasts.success("Successfully subscribed to newsletter!");
//! ```

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Icon, IconButton, LucideIcon};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Resolves when a toast pushed now is due to disappear
async fn expiry() {
    tokio::time::sleep(TOAST_DURATION).await;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast queue stored in context
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Queue a toast and schedule its removal after [`TOAST_DURATION`]
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = *self.next_id.read();
        self.next_id.set(id + 1);
        self.items.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });

        tracing::debug!(id, ?kind, "toast shown");

        let mut handle = *self;
        spawn(async move {
            expiry().await;
            handle.dismiss(id);
        });

        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|t| t.id != id);
        if items.len() < before {
            tracing::debug!(id, "toast dismissed");
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }
}

/// Create the toast queue and provide it to all child components
pub fn use_toasts_provider() -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

/// Hook to access the toast queue from context
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Renders the queued toasts in the top-right corner
#[component]
pub fn Toaster(
    /// `"dark"` or `"light"`
    theme: String,
) -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toaster toaster-{theme}",
            role: "status",
            "aria-live": "polite",
            for toast in toasts.items() {
                div { key: "{toast.id}", class: toast.kind.class(),
                    span { class: "toast-message", "{toast.message}" }
                    IconButton {
                        aria_label: "Dismiss".to_string(),
                        class: "toast-close".to_string(),
                        onclick: move |_| toasts.dismiss(toast.id),
                        LucideIcon { icon: Icon::Close, size: 14 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast toast-success");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
        assert_eq!(ToastKind::Info.class(), "toast toast-info");
    }

    #[test]
    fn toast_duration_is_four_seconds() {
        assert_eq!(TOAST_DURATION, Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_waits_the_full_duration() {
        let start = tokio::time::Instant::now();
        expiry().await;
        assert!(start.elapsed() >= TOAST_DURATION);
    }

    #[tokio::test(start_paused = true)]
    async fn toast_is_still_up_just_before_expiry() {
        let early = TOAST_DURATION - Duration::from_millis(1);
        assert!(tokio::time::timeout(early, expiry()).await.is_err());
    }
}
