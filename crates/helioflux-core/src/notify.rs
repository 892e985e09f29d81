use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Unknown kinds display as info.
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Info => "#3B82F6",
            Self::Success => "#10B981",
            Self::Error => "#EF4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Duration,
}

/// Live notifications. Unbounded and without deduplication; each item runs on
/// its own timers.
#[derive(Default)]
pub struct NotificationQueue {
    items: Vec<NotificationItem>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: &str, kind: NotificationKind, now: Duration) -> &NotificationItem {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(NotificationItem {
            id,
            message: message.to_string(),
            kind,
            created_at: now,
        });
        &self.items[self.items.len() - 1]
    }

    pub fn get(&self, id: NotificationId) -> Option<&NotificationItem> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn remove(&mut self, id: NotificationId) -> Option<NotificationItem> {
        let idx = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }
}
