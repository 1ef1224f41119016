// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the analyzer page,
//! the analysis service client and toast notifications.
//!
//! The `App` struct owns every piece of state and translates component
//! effects into side effects such as HTTP requests. Startup policy (config
//! precedence, the reachability probe, window size) lives here so it is easy
//! to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::client::ScrapeClient;
use crate::error::Result;
use crate::ui::analyzer;
use crate::ui::labels;
use crate::ui::notifications::{self, Notification};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    analyzer: analyzer::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Client for the analysis service, or the reason the endpoint is unusable.
    client: Result<ScrapeClient>,
    /// Resolved once at startup; system mode is not re-detected afterwards.
    theme: Theme,
    show_error_banner: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_loading", &self.analyzer.is_loading())
            .field("has_result", &self.analyzer.result().is_some())
            .field("client", &self.client)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` (honoring `--config-dir`) and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the initial state from an already loaded configuration.
    ///
    /// CLI flags take precedence over config values. Returns the startup
    /// reachability probe as the initial task when it is enabled.
    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut notifications = notifications::Manager::new();
        if config_warning.is_some() {
            notifications.push(Notification::warning(labels::NOTIFY_CONFIG_LOAD_FAILED));
        }

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let base_url = flags
            .endpoint
            .as_deref()
            .unwrap_or(&config.backend.base_url);

        let client = ScrapeClient::new(base_url);
        if let Err(error) = &client {
            tracing::error!(%error, base_url, "unusable analysis service endpoint");
            notifications.push(update::unusable_endpoint(error));
        }

        let probe = config.backend.health_check && !flags.no_health_check;
        let task = match &client {
            Ok(client) if probe => update::health_probe(client),
            _ => Task::none(),
        };

        let app = App {
            analyzer: analyzer::State::new(flags.url.unwrap_or_default()),
            notifications,
            client,
            theme: theme_mode.theme(),
            show_error_banner: config.display.error_banner,
        };

        (app, task)
    }

    fn title(&self) -> String {
        labels::APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.analyzer.is_loading(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            analyzer: &mut self.analyzer,
            notifications: &mut self.notifications,
            client: &self.client,
        };

        match message {
            Message::Analyzer(analyzer_message) => {
                update::handle_analyzer_message(&mut ctx, analyzer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::HealthChecked(result) => update::handle_health_checked(&mut ctx, result),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            analyzer: &self.analyzer,
            notifications: &self.notifications,
            show_error_banner: self.show_error_banner,
        })
    }
}
