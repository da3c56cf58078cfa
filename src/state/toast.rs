//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Warning => "toast toast--warning",
            Self::Info => "toast toast--info",
        }
    }

    /// Default display time; errors and warnings linger longer.
    pub fn default_duration_ms(self) -> u32 {
        match self {
            Self::Success | Self::Info => 5_000,
            Self::Error => 8_000,
            Self::Warning => 10_000,
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub duration_ms: u32,
}

/// Active toasts, newest last, with monotonically increasing ids.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id for dismissal.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.push_with_duration(level, message, level.default_duration_ms())
    }

    pub fn push_with_duration(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        duration_ms: u32,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            duration_ms,
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
