// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE_NOTIFICATIONS` are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(text = notification.message(), "notification pushed"),
            Severity::Error => tracing::error!(text = notification.message(), "notification pushed"),
            Severity::Success => {
                tracing::debug!(text = notification.message(), "notification pushed");
            }
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired.
    ///
    /// Queued notifications start their display timer only once promoted.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.restart_timer();
                self.visible.push_front(notification);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn newest_notification_is_shown_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        let first = manager.visible().next().expect("one visible");
        assert_eq!(first.message(), "second");
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_removes_from_visible() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let mut first_id = None;
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }

        manager.push(Notification::success("queued"));
        assert_eq!(manager.queued_count(), 1);

        manager.dismiss(first_id.unwrap());

        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message() == "queued"));
    }

    #[test]
    fn promoted_notification_is_shown_first() {
        let mut manager = Manager::new();

        let mut oldest_id = None;
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                oldest_id = Some(n.id());
            }
            manager.push(n);
        }
        manager.push(Notification::error("queued"));

        manager.dismiss(oldest_id.unwrap());

        let messages: Vec<String> = manager.visible().map(|n| n.message().to_string()).collect();
        let expected: Vec<String> = std::iter::once("queued".to_string())
            .chain((1..MAX_VISIBLE_NOTIFICATIONS).rev().map(|i| format!("visible-{i}")))
            .collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_removes_expired_errors_too() {
        let mut manager = Manager::new();
        manager.push(Notification::error("expired").backdated(Duration::from_secs(6)));
        manager.push(Notification::error("fresh"));

        manager.tick();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().unwrap().message(), "fresh");
    }
}
