// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component effects are turned into tasks and toasts here; components never
//! see the HTTP client or the notification manager.

use super::Message;
use crate::client::ScrapeClient;
use crate::error::{Error, Result};
use crate::ui::analyzer::{self, Effect};
use crate::ui::labels;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub analyzer: &'a mut analyzer::State,
    pub notifications: &'a mut notifications::Manager,
    pub client: &'a Result<ScrapeClient>,
}

pub fn handle_analyzer_message(
    ctx: &mut UpdateContext<'_>,
    message: analyzer::Message,
) -> Task<Message> {
    match ctx.analyzer.update(message) {
        Effect::None => Task::none(),
        Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        Effect::Submit(url) => submit(ctx.client, url),
    }
}

/// Starts exactly one analysis request for `url`.
///
/// An unusable endpoint fails the submission the same way a transport error
/// would, so the page leaves its loading state.
fn submit(client: &Result<ScrapeClient>, url: String) -> Task<Message> {
    let into_message = |result| Message::Analyzer(analyzer::Message::ResponseReceived(result));

    match client {
        Ok(client) => {
            tracing::info!(target_url = %url, endpoint = %client.scrape_url(), "submitting analysis request");
            Task::perform(client.clone().scrape(url), into_message)
        }
        Err(error) => Task::done(into_message(Err(error.clone()))),
    }
}

pub fn handle_health_checked(ctx: &mut UpdateContext<'_>, result: Result<()>) -> Task<Message> {
    match result {
        Ok(()) => tracing::info!("analysis service is reachable"),
        Err(error) => {
            tracing::warn!(%error, "analysis service is unreachable");
            ctx.notifications
                .push(Notification::warning(labels::NOTIFY_BACKEND_UNREACHABLE));
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, _now: Instant) -> Task<Message> {
    // Spinner ticks are no-ops when idle
    let _ = ctx.analyzer.update(analyzer::Message::SpinnerTick);
    ctx.notifications.tick();
    Task::none()
}

/// Probe task for the startup reachability check.
pub fn health_probe(client: &ScrapeClient) -> Task<Message> {
    Task::perform(client.clone().health(), Message::HealthChecked)
}

/// Toast shown at startup when the configured endpoint cannot be parsed.
pub fn unusable_endpoint(error: &Error) -> Notification {
    Notification::error(labels::fetch_failed(&error.to_string()))
}
