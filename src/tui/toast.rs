//! Transient notices that dismiss themselves.

use std::time::{Duration, Instant};

/// How long a toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity, used only for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation
    Info,
    /// Something did not work
    Error,
}

/// A short message with an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text
    pub message: String,
    /// Coloring
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    /// Info toast shown at `now`.
    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            shown_at: now,
        }
    }

    /// Error toast shown at `now`.
    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            shown_at: now,
        }
    }

    /// Whether the toast should be gone at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

/// Drops `slot` once its toast has expired. Returns true if it was cleared.
pub fn expire(slot: &mut Option<Toast>, now: Instant) -> bool {
    if slot.as_ref().is_some_and(|toast| toast.is_expired(now)) {
        *slot = None;
        true
    } else {
        false
    }
}
