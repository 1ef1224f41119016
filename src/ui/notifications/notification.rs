// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::app::config::{LONG_NOTIFICATION_SECS, SHORT_NOTIFICATION_SECS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Failed operation (red, 5s duration).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns how long a toast of this severity stays on screen.
    ///
    /// Every toast leaves on its own; failures just linger longer.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(SHORT_NOTIFICATION_SECS),
            Severity::Warning | Severity::Error => Duration::from_secs(LONG_NOTIFICATION_SECS),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Text shown in the toast.
    message: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and text.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Starts the display timer over; used when a queued toast becomes visible.
    pub(super) fn restart_timer(&mut self) {
        self.created_at = Instant::now();
    }

    /// Returns whether this notification has outlived its display duration.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.age() >= self.severity.auto_dismiss_duration()
    }

    /// Pretends the notification was created `age` ago.
    #[cfg(test)]
    pub(crate) fn backdated(mut self, age: Duration) -> Self {
        self.created_at = Instant::now()
            .checked_sub(age)
            .expect("clock far enough from its origin");
        self
    }
}
