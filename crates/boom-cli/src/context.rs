use anyhow::{Context as AnyhowContext, Result};
use boom_core::{Backend, BoomConfig, ConfigManager, Session};

use crate::services::{BrowserService, ClipboardService, EditorService, TerminalEffects};

/// Application context that gets passed to command handlers
///
/// Holds the loaded configuration, the session over the configured backend,
/// and the effects wired to the real terminal and desktop.
pub struct Context {
    pub session: Session<Box<dyn Backend>>,
    pub effects: TerminalEffects,
    config: BoomConfig,
}

impl Context {
    /// Load configuration and build the backend and services from it
    pub fn new() -> Result<Self> {
        let config = ConfigManager::load_config().context("Failed to load boom configuration")?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: BoomConfig) -> Self {
        let integrations = &config.integrations;
        let effects = TerminalEffects::new(
            ClipboardService::new(integrations.clipboard.as_deref()),
            BrowserService::new(integrations.browser.as_deref()),
            EditorService::new(integrations.editor.as_deref()),
        );

        Self {
            session: Session::new(config.open_backend()),
            effects,
            config,
        }
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &BoomConfig {
        &self.config
    }
}
