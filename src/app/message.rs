// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::analyzer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Analyzer(analyzer::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of the startup reachability probe.
    HealthChecked(Result<(), Error>),
    Tick(Instant), // Spinner rotation and toast expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Analysis service base URL; takes precedence over `[backend] base_url`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMPANY_ANALYZER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme override; takes precedence over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
    /// Skip the startup reachability probe.
    pub no_health_check: bool,
    /// URL to prefill in the input field. Never submitted automatically.
    pub url: Option<String>,
}
