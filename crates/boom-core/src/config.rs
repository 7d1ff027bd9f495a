// crates/boom-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for
// boom. It decides where the store lives, which backend holds it, and which
// commands talk to the clipboard, the browser and the editor.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Environment variables (BOOM_FILE, BOOM_BACKEND, BOOM_CLIPBOARD, ...)
// 2. Config file ($BOOM_CONFIG, else ~/.config/boom/config.toml)
// 3. Built-in defaults (JSON store at ~/.boom.json, platform commands)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::backend::{Backend, JsonBackend, MemoryBackend};

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every field has a default, so a partial (or absent) config file is fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoomConfig {
    /// Where and how the store is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// External commands for clipboard, browser and editor
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

/// Storage backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend name: "json" or "memory"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Path of the JSON document. `~/` is expanded. Defaults to ~/.boom.json
    #[serde(default)]
    pub path: Option<String>,
}

/// Overrides for the side-channel commands
///
/// Each value is a command line split on whitespace. When unset, the
/// platform default is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    /// Receives the value on stdin, e.g. "wl-copy"
    #[serde(default)]
    pub clipboard: Option<String>,

    /// Receives the value as its last argument, e.g. "firefox --new-tab"
    #[serde(default)]
    pub browser: Option<String>,

    /// Receives the store path as its last argument
    #[serde(default)]
    pub editor: Option<String>,
}

fn default_backend() -> String {
    "json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: None,
        }
    }
}

impl BoomConfig {
    /// Resolved path of the JSON store
    pub fn store_path(&self) -> PathBuf {
        match &self.storage.path {
            Some(path) => expand_home(path),
            None => JsonBackend::default_location(),
        }
    }

    /// Build the configured backend
    ///
    /// Assumes the config was validated, so anything but "memory" is JSON.
    pub fn open_backend(&self) -> Box<dyn Backend> {
        match self.storage.backend.as_str() {
            "memory" => Box::new(MemoryBackend::new()),
            _ => Box::new(JsonBackend::new(self.store_path())),
        }
    }
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from the config file and the process environment
    ///
    /// Missing config files are not errors; bad TOML and invalid values are.
    pub fn load_config() -> ConfigResult<BoomConfig> {
        let lookup = |name: &str| std::env::var(name).ok();
        let path = lookup("BOOM_CONFIG")
            .map(PathBuf::from)
            .or_else(Self::default_config_path);
        Self::load_with(path.as_deref(), lookup)
    }

    /// Load from an explicit config file and environment lookup
    pub fn load_with(
        config_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<BoomConfig> {
        let mut config = match config_path {
            Some(path) => Self::try_load_file(path)?.unwrap_or_default(),
            None => BoomConfig::default(),
        };

        Self::apply_env_overrides(&mut config, lookup);
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// ~/.config/boom/config.toml on Linux, the platform equivalent elsewhere
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("boom").join("config.toml"))
    }

    fn try_load_file(path: &Path) -> ConfigResult<Option<BoomConfig>> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config: BoomConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded config file");
        Ok(Some(config))
    }

    /// Apply environment variable overrides
    ///
    /// - BOOM_FILE -> storage.path
    /// - BOOM_BACKEND -> storage.backend
    /// - BOOM_CLIPBOARD -> integrations.clipboard
    /// - BOOM_BROWSER -> integrations.browser
    /// - BOOM_EDITOR, then EDITOR -> integrations.editor
    fn apply_env_overrides(config: &mut BoomConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(file) = lookup("BOOM_FILE") {
            config.storage.path = Some(file);
        }

        if let Some(backend) = lookup("BOOM_BACKEND") {
            config.storage.backend = backend;
        }

        if let Some(clipboard) = lookup("BOOM_CLIPBOARD") {
            config.integrations.clipboard = Some(clipboard);
        }

        if let Some(browser) = lookup("BOOM_BROWSER") {
            config.integrations.browser = Some(browser);
        }

        if let Some(editor) = lookup("BOOM_EDITOR") {
            config.integrations.editor = Some(editor);
        } else if config.integrations.editor.is_none() {
            config.integrations.editor = lookup("EDITOR");
        }
    }

    /// Catch values that would fail later at runtime
    fn validate_config(config: &BoomConfig) -> ConfigResult<()> {
        match config.storage.backend.as_str() {
            "json" | "memory" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid storage backend '{}'. Must be one of: json, memory",
                    other
                )));
            }
        }

        if config.storage.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "storage.path cannot be empty".to_string(),
            ));
        }

        let integrations = [
            ("clipboard", &config.integrations.clipboard),
            ("browser", &config.integrations.browser),
            ("editor", &config.integrations.editor),
        ];
        for (name, command) in integrations {
            if command.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "integrations.{} cannot be an empty command",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = BoomConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.storage.backend, "json");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config =
            ConfigManager::load_with(Some(&dir.path().join("nope.toml")), env(&[])).unwrap();
        assert_eq!(config, BoomConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[integrations]\nclipboard = \"wl-copy\"\n").unwrap();

        let config = ConfigManager::load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(config.integrations.clipboard.as_deref(), Some("wl-copy"));
        assert_eq!(config.storage.backend, "json");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = ConfigManager::load_with(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_env_beats_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\npath = \"/from/file.json\"\n").unwrap();

        let config = ConfigManager::load_with(
            Some(&path),
            env(&[("BOOM_FILE", "/from/env.json"), ("BOOM_BROWSER", "true")]),
        )
        .unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/from/env.json"));
        assert_eq!(config.integrations.browser.as_deref(), Some("true"));
    }

    #[test]
    fn test_boom_editor_beats_editor() {
        let config = ConfigManager::load_with(
            None,
            env(&[("BOOM_EDITOR", "hx"), ("EDITOR", "vim")]),
        )
        .unwrap();
        assert_eq!(config.integrations.editor.as_deref(), Some("hx"));

        let config = ConfigManager::load_with(None, env(&[("EDITOR", "nano")])).unwrap();
        assert_eq!(config.integrations.editor.as_deref(), Some("nano"));
    }

    #[test]
    fn test_invalid_backend_validation() {
        let err = ConfigManager::load_with(None, env(&[("BOOM_BACKEND", "redis")])).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_empty_integration_command_validation() {
        let mut config = BoomConfig::default();
        config.integrations.clipboard = Some("  ".to_string());
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_open_backend_follows_config() {
        let mut config = BoomConfig::default();
        config.storage.path = Some("/tmp/boom.json".to_string());
        assert_eq!(
            config.open_backend().location(),
            Some(Path::new("/tmp/boom.json"))
        );

        config.storage.backend = "memory".to_string();
        assert_eq!(config.open_backend().describe(), "memory");
    }

    #[test]
    fn test_config_serialization() {
        let config = BoomConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: BoomConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
