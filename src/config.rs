//! TOML configuration for folio.
//!
//! Lives at `<config dir>/folio/config.toml` (override the directory
//! with `FOLIO_CONFIG_DIR`). Every field has a serde default, so a
//! partial or missing file falls back cleanly.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::typewriter::Timing;

/// Errors raised while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
}

/// Viewer appearance and input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "parchment", "classic", or "ocean"
    pub theme: String,
    /// Capture mouse events (wheel scrolling)
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "parchment".to_string(),
            mouse: true,
        }
    }
}

/// Typewriter timing overrides, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            type_ms: timing.type_ms,
            delete_ms: timing.delete_ms,
            hold_ms: timing.hold_ms,
        }
    }
}

impl TypewriterConfig {
    /// Convert into the typewriter's timing parameters.
    pub fn timing(&self) -> Timing {
        Timing {
            type_ms: self.type_ms,
            delete_ms: self.delete_ms,
            hold_ms: self.hold_ms,
        }
    }
}

/// Section reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// When false, every section starts activated and the typewriter
    /// is frozen at the first full role.
    pub animate: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { animate: true }
    }
}

impl Config {
    /// Directory holding the config file.
    ///
    /// `FOLIO_CONFIG_DIR` overrides the platform config directory,
    /// which keeps tests hermetic.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = env::var("FOLIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("folio"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config, falling back to defaults if the file does not
    /// exist. A file that exists but fails to parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config to disk, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Env vars are process-global; serialize the tests that touch
    // FOLIO_CONFIG_DIR.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn config_dir_guard(dir: &std::path::Path) -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("FOLIO_CONFIG_DIR", dir);
        guard
    }

    #[test]
    fn default_config_matches_typewriter_defaults() {
        let config = Config::default();
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.typewriter.delete_ms, 50);
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert_eq!(config.ui.theme, "parchment");
        assert!(config.ui.mouse);
        assert!(config.reveal.animate);
    }

    #[test]
    fn timing_conversion_carries_all_fields() {
        let tw = TypewriterConfig {
            type_ms: 80,
            delete_ms: 40,
            hold_ms: 1500,
        };
        let timing = tw.timing();
        assert_eq!(timing.type_ms, 80);
        assert_eq!(timing.delete_ms, 40);
        assert_eq!(timing.hold_ms, 1500);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("[ui]\ntheme = \"ocean\"\n").unwrap();
        assert_eq!(config.ui.theme, "ocean");
        // Unspecified sections keep their defaults
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert!(config.reveal.animate);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let _guard = config_dir_guard(dir.path());
        let config = Config::load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let _guard = config_dir_guard(dir.path());

        let mut config = Config::default();
        config.ui.theme = "classic".to_string();
        config.typewriter.hold_ms = 1000;
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let _guard = config_dir_guard(dir.path());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("config.toml"), "not = [valid").unwrap();
        assert!(matches!(Config::load(), Err(ConfigError::Parse(_))));
    }
}
