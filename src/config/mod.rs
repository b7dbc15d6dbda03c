// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast expiry delay and animation durations
//! - `[api]` - Backend base URL
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `GOBARBER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gobarber_client::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.expiry_ms = 5000;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast timing settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Delay before a toast removes itself.
    #[serde(default = "default_expiry_ms")]
    pub expiry_ms: u64,

    /// Slide-in duration.
    #[serde(default = "default_enter_ms")]
    pub enter_ms: u64,

    /// Slide-out duration.
    #[serde(default = "default_leave_ms")]
    pub leave_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            expiry_ms: DEFAULT_TOAST_EXPIRY_MS,
            enter_ms: DEFAULT_TOAST_ENTER_MS,
            leave_ms: DEFAULT_TOAST_LEAVE_MS,
        }
    }
}

impl NotificationsConfig {
    /// Returns the expiry delay, clamped to the supported range.
    #[must_use]
    pub fn expiry(&self) -> Duration {
        Duration::from_millis(
            self.expiry_ms
                .clamp(MIN_TOAST_EXPIRY_MS, MAX_TOAST_EXPIRY_MS),
        )
    }

    /// Returns the slide-in duration, clamped to the supported range.
    #[must_use]
    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms.min(MAX_TOAST_ANIMATION_MS))
    }

    /// Returns the slide-out duration, clamped to the supported range.
    #[must_use]
    pub fn leave(&self) -> Duration {
        Duration::from_millis(self.leave_ms.min(MAX_TOAST_ANIMATION_MS))
    }
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_expiry_ms() -> u64 {
    DEFAULT_TOAST_EXPIRY_MS
}

fn default_enter_ms() -> u64 {
    DEFAULT_TOAST_ENTER_MS
}

fn default_leave_ms() -> u64 {
    DEFAULT_TOAST_LEAVE_MS
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("pt-BR".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            notifications: NotificationsConfig {
                expiry_ms: 4500,
                enter_ms: 200,
                leave_ms: 250,
            },
            api: ApiConfig {
                base_url: "https://api.example.test".to_string(),
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, config);
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

        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[notifications]\nexpiry_ms = 8000\n").expect("write file");

        let config = load_from_path(&path).expect("partial config should load");

        assert_eq!(config.notifications.expiry_ms, 8000);
        assert_eq!(config.notifications.enter_ms, DEFAULT_TOAST_ENTER_MS);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn load_from_path_reports_parse_errors_as_config_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[notifications]\nexpiry_ms = \"soon\"\n").expect("write file");

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn notification_durations_are_clamped() {
        let config = NotificationsConfig {
            expiry_ms: 0,
            enter_ms: 10_000,
            leave_ms: 0,
        };

        assert_eq!(config.expiry(), Duration::from_millis(MIN_TOAST_EXPIRY_MS));
        assert_eq!(config.enter(), Duration::from_millis(MAX_TOAST_ANIMATION_MS));
        assert_eq!(config.leave(), Duration::ZERO);

        let config = NotificationsConfig {
            expiry_ms: u64::MAX,
            ..NotificationsConfig::default()
        };
        assert_eq!(config.expiry(), Duration::from_millis(MAX_TOAST_EXPIRY_MS));
    }

    #[test]
    fn default_expiry_is_three_seconds() {
        assert_eq!(
            NotificationsConfig::default().expiry(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn api_base_url_is_normalized() {
        let api = ApiConfig {
            base_url: "https://api.example.test/ ".to_string(),
        };
        assert_eq!(api.base_url(), "https://api.example.test");

        let blank = ApiConfig {
            base_url: "   ".to_string(),
        };
        assert_eq!(blank.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
