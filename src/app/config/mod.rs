// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file. The app never writes the file;
//! users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[backend]` - Analysis service location and startup probe
//! - `[display]` - Optional inline error banner
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `COMPANY_ANALYZER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use company_analyzer::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(reason) = warning {
//!     eprintln!("using defaults: {reason}");
//! }
//! println!("service at {}", config.backend.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Analysis service settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the service; `/api/scrape` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Probe `/api/health` at startup and warn when unreachable.
    #[serde(default = "default_health_check")]
    pub health_check: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_check: DEFAULT_HEALTH_CHECK,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Repeat the last failure in an inline banner, in addition to the toast.
    #[serde(default = "default_error_banner")]
    pub error_banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            error_banner: DEFAULT_ERROR_BANNER,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_health_check() -> bool {
    DEFAULT_HEALTH_CHECK
}

fn default_error_banner() -> bool {
    DEFAULT_ERROR_BANNER
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_points_at_local_service() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
        assert!(config.backend.health_check);
        assert!(!config.display.error_banner);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn full_file_populates_every_section() {
        let expected = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            backend: BackendConfig {
                base_url: "http://analysis.internal:9000".to_string(),
                health_check: false,
            },
            display: DisplayConfig { error_banner: true },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"light\"\n\n\
             [backend]\nbase_url = \"http://analysis.internal:9000\"\nhealth_check = false\n\n\
             [display]\nerror_banner = true\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, expected);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[backend]\nbase_url = \"http://127.0.0.1:8001\"\n")
            .expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config is valid");
        assert_eq!(loaded.backend.base_url, "http://127.0.0.1:8001");
        assert!(loaded.backend.health_check);
        assert_eq!(loaded.display, DisplayConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "[display]\nerror_banner = true\n")
            .expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert!(loaded.display.error_banner);
        assert_eq!(loaded.backend, BackendConfig::default());
    }
}
