//! Transient, auto-dismissing user notifications.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn lifetime(&self) -> Duration {
        match self {
            NotificationKind::Success => Duration::from_secs(3),
            NotificationKind::Info => Duration::from_secs(2),
            NotificationKind::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.kind.lifetime()
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification at `at`, dropping any that expired by then.
    pub fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, at: Instant) -> u64 {
        self.prune(at);
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            message: message.into(),
            shown_at: at,
        });
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationKind::Success, message, Instant::now())
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationKind::Info, message, Instant::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationKind::Error, message, Instant::now())
    }

    /// Notifications still on screen at `now`, oldest first.
    pub fn current(&self, now: Instant) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.is_expired(now)).collect()
    }

    /// Most recent notification regardless of expiry.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }
}
