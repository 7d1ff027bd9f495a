// crates/boom-cli/src/services/clipboard.rs - Clipboard Integration Service
//
// Copies a value by piping it into the platform clipboard tool. The value
// goes over stdin, never as an argument, so it is not visible in `ps` and is
// not subject to argument length limits.

use anyhow::{Context as AnyhowContext, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

use super::split_command;

/// Copies values to the system clipboard
///
/// PLATFORM DEFAULTS:
/// - macOS: pbcopy
/// - Windows: clip
/// - everything else: xclip -selection clipboard
pub struct ClipboardService {
    command: Vec<String>,
}

impl ClipboardService {
    pub fn new(configured: Option<&str>) -> Self {
        let command = configured
            .map(split_command)
            .filter(|parts| !parts.is_empty())
            .unwrap_or_else(Self::platform_default);
        Self { command }
    }

    fn platform_default() -> Vec<String> {
        let parts: &[&str] = if cfg!(target_os = "macos") {
            &["pbcopy"]
        } else if cfg!(windows) {
            &["clip"]
        } else {
            &["xclip", "-selection", "clipboard"]
        };
        parts.iter().map(|part| part.to_string()).collect()
    }

    /// Put `value` on the clipboard
    pub fn copy(&self, value: &str) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No clipboard command configured"))?;

        debug!(program, "copying to clipboard");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch clipboard command '{}'", program))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(value.as_bytes())
                .with_context(|| format!("Failed to write to '{}'", program))?;
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for '{}'", program))?;
        if !status.success() {
            anyhow::bail!("Clipboard command '{}' exited with {}", program, status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_platform_tool() {
        let service = ClipboardService::new(None);
        assert!(!service.command.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_pipes_into_command() {
        let service = ClipboardService::new(Some("cat"));
        assert!(service.copy("https://github.com").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_error() {
        let service = ClipboardService::new(Some("false"));
        assert!(service.copy("x").is_err());
    }

    #[test]
    fn test_missing_command_is_error() {
        let service = ClipboardService::new(Some("boom-no-such-clipboard-xyz"));
        let err = service.copy("x").unwrap_err();
        assert!(err.to_string().contains("Failed to launch clipboard command"));
    }
}
