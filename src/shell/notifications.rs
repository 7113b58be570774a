//! Notification surface
//!
//! Transient toasts any page may post. Toasts expire after a fixed
//! time-to-live and only the newest few are shown.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: Level,
    pub message: String,
    /// Wall-clock time, for display only
    pub created_at: DateTime<Utc>,
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Toast>,
    ttl: Duration,
    max_visible: usize,
}

impl Notifications {
    pub fn new(ttl: Duration, max_visible: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    fn push_at(&mut self, level: Level, message: impl Into<String>, now: Instant) {
        self.queue.push_back(Toast {
            level,
            message: message.into(),
            created_at: Utc::now(),
            shown_at: now,
        });
        while self.queue.len() > self.max_visible {
            self.queue.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Level::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, message);
    }

    /// Drop toasts older than the time-to-live
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    /// Dismiss the oldest toast
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    /// Toasts currently shown, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
