// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an analysis
//! request without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("URLを入力してください"));
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! Success toasts stay for 3 s, warnings and errors for 5 s. At most
//! three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
