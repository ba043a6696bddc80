//! Transient user notifications.
//!
//! Controllers report user-visible outcomes through a [`Notifier`]. The
//! [`NotificationCenter`] keeps them until they are dismissed or drained by
//! whatever renders them.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Something the user asked for worked.
    Success,
    /// Neutral information.
    Info,
    /// Something failed; the section stays usable.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Success => write!(f, "success"),
            Level::Info => write!(f, "info"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// Text shown to the user
    pub message: String,
}

impl Notification {
    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// An informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    /// An error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Surface `notification` to the user.
    fn notify(&self, notification: Notification);
}

/// Handle returned for each posted notification.
pub type NotificationId = u64;

/// In-memory notification queue.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    inner: Mutex<CenterInner>,
}

#[derive(Debug, Default)]
struct CenterInner {
    next_id: NotificationId,
    active: Vec<(NotificationId, Notification)>,
}

impl NotificationCenter {
    /// Create an empty center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notification and return its id.
    pub fn post(&self, notification: Notification) -> NotificationId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.active.push((id, notification));
        id
    }

    /// Dismiss one notification. Returns `false` if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut inner = self.lock();
        let before = inner.active.len();
        inner.active.retain(|(existing, _)| *existing != id);
        inner.active.len() != before
    }

    /// Currently visible notifications, oldest first.
    pub fn active(&self) -> Vec<(NotificationId, Notification)> {
        self.lock().active.clone()
    }

    /// Remove and return every visible notification.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock()
            .active
            .drain(..)
            .map(|(_, notification)| notification)
            .collect()
    }

    /// Number of visible notifications.
    pub fn len(&self) -> usize {
        self.lock().active.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CenterInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = %notification.level, "Notification: {}", notification.message);
        self.post(notification);
    }
}
