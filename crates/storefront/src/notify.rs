//! Toast notifications.

use core::fmt;

use serde::Serialize;

/// Identifier of a toast on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Icon name shown next to the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Info => "info-circle",
        }
    }

    /// Returns the kind as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Stack of active toasts in arrival order.
#[derive(Debug, Default)]
pub struct Notifier {
    next_id: u64,
    active: Vec<Toast>,
}

impl Notifier {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast onto the stack.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let toast = Toast {
            id,
            message: message.into(),
            kind,
        };
        tracing::debug!(toast_id = %id, kind = kind.as_str(), message = %toast.message, "Toast shown");
        self.active.push(toast);
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| toast.id != id);
        self.active.len() != before
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    /// Most recent toast, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.active.last()
    }
}
