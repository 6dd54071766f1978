// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes it back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast display duration and exit animation
//! - `[upload]` - Endpoint, form field, error reset delay, request timeout
//! - `[diagnostics]` - Event buffer capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `WAVEDROP_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use wavedrop::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("uploading to {:?}", config.upload.endpoint);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::notification::DisplayDuration;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Time a toast stays visible before exiting (milliseconds).
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Exit animation window (milliseconds).
    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Effective toast duration.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        DisplayDuration::from_millis(
            self.duration_ms
                .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }

    /// Effective exit animation window, capped at [`MAX_EXIT_ANIMATION_MS`].
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        let ms = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_EXIT_ANIMATION_MS)
            .min(MAX_EXIT_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

/// Upload endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// URL receiving the multipart form.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Name of the multipart field carrying the file.
    #[serde(default = "default_field_name", skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Delay before a failed selection is cleared (milliseconds).
    #[serde(default = "default_reset_delay_ms", skip_serializing_if = "Option::is_none")]
    pub reset_delay_ms: Option<u64>,

    /// Upload request timeout (seconds).
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_name: default_field_name(),
            reset_delay_ms: default_reset_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl UploadConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_UPLOAD_ENDPOINT)
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_FIELD_NAME)
    }

    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms.unwrap_or(DEFAULT_RESET_DELAY_MS))
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_ANIMATION_MS)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_UPLOAD_ENDPOINT.to_string())
}

fn default_field_name() -> Option<String> {
    Some(DEFAULT_UPLOAD_FIELD_NAME.to_string())
}

fn default_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESET_DELAY_MS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
    use tempfile::tempdir;

    #[test]
    fn serialized_config_loads_back() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.upload.endpoint = Some("http://127.0.0.1:9999/decode".to_string());
        config.notifications.duration_ms = Some(1500);

        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&path, content).expect("failed to write config");
        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.upload, UploadConfig::default());
        assert_eq!(loaded.notifications, NotificationsConfig::default());
    }

    #[test]
    fn invalid_toml_yields_warning_and_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "this is = = not toml").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_yields_defaults_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn accessors_apply_defaults_and_bounds() {
        let upload = UploadConfig {
            endpoint: None,
            field_name: Some(String::new()),
            reset_delay_ms: None,
            request_timeout_secs: Some(0),
        };
        assert_eq!(upload.endpoint(), DEFAULT_UPLOAD_ENDPOINT);
        assert_eq!(upload.field_name(), DEFAULT_UPLOAD_FIELD_NAME);
        assert_eq!(
            upload.reset_delay(),
            Duration::from_millis(DEFAULT_RESET_DELAY_MS)
        );
        assert_eq!(
            upload.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );

        let notifications = NotificationsConfig {
            duration_ms: Some(0),
            exit_animation_ms: Some(60_000),
        };
        assert_eq!(notifications.duration().as_millis(), 1);
        assert_eq!(
            notifications.exit_animation(),
            Duration::from_millis(MAX_EXIT_ANIMATION_MS)
        );
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"light\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }
}
