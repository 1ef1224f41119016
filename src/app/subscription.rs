// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use crate::app::config::TICK_INTERVAL;
use iced::{time, Subscription};

/// Ticks while something on screen changes over time: the spinner of a
/// running request or a toast waiting to expire. Idle otherwise.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
