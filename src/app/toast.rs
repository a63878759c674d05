//! Toast Notifications
//!
//! The user-visible notification surface every screen reports through.
//! Toasts are transient: they live for a few seconds and are pruned
//! once per frame.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    created: Instant,
}

impl Toast {
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!("{}", text);
        self.push(ToastKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::error!("{}", text);
        self.push(ToastKind::Error, text);
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        self.toasts.push(Toast {
            kind,
            text,
            created: Instant::now(),
        });
    }

    /// Drop expired toasts. Called once per frame.
    pub fn retain_fresh(&mut self) {
        self.toasts.retain(|t| t.age() < TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut toasts = ToastQueue::new();
        toasts.success("Patient created successfully");
        toasts.error("Network error: connection refused");
        let collected: Vec<_> = toasts.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            collected,
            vec![
                (ToastKind::Success, "Patient created successfully"),
                (ToastKind::Error, "Network error: connection refused"),
            ]
        );
    }

    #[test]
    fn test_fresh_toasts_survive_pruning() {
        let mut toasts = ToastQueue::new();
        toasts.success("done");
        toasts.retain_fresh();
        assert_eq!(toasts.len(), 1);
    }
}
