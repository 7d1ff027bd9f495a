// crates/boom-cli/src/services/browser.rs - Browser Integration Service
//
// Hands a value (usually a URL) to the system opener for `boom open` and
// `boom random`.

use anyhow::{Context as AnyhowContext, Result};
use std::process::{Command, Stdio};
use tracing::debug;

use super::split_command;

/// Opens values with the system opener
///
/// PLATFORM DEFAULTS:
/// - macOS: open
/// - Windows: cmd /C start ""
/// - everything else: xdg-open
pub struct BrowserService {
    command: Vec<String>,
}

impl BrowserService {
    pub fn new(configured: Option<&str>) -> Self {
        let command = configured
            .map(split_command)
            .filter(|parts| !parts.is_empty())
            .unwrap_or_else(Self::platform_default);
        Self { command }
    }

    fn platform_default() -> Vec<String> {
        let parts: &[&str] = if cfg!(target_os = "macos") {
            &["open"]
        } else if cfg!(windows) {
            &["cmd", "/C", "start", ""]
        } else {
            &["xdg-open"]
        };
        parts.iter().map(|part| part.to_string()).collect()
    }

    /// Open `target`, appended as the last argument of the opener
    pub fn open(&self, target: &str) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No browser command configured"))?;

        debug!(program, target, "opening");
        let status = Command::new(program)
            .args(args)
            .arg(target)
            .stdout(Stdio::null())
            .status()
            .with_context(|| format!("Failed to launch browser command '{}'", program))?;

        if !status.success() {
            anyhow::bail!("Browser command '{}' exited with {}", program, status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_open_passes_target() {
        let service = BrowserService::new(Some("test -n"));
        assert!(service.open("https://github.com").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_opener_is_error() {
        let service = BrowserService::new(Some("false"));
        assert!(service.open("x").is_err());
    }
}
