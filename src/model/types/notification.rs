#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast message. It disappears on its own after
/// [`ClientConfig::notification_timeout`](crate::model::ClientConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, NotificationKind::Error)
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "toast success show",
            NotificationKind::Error => "toast error show",
        }
    }
}
