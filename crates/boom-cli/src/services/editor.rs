// crates/boom-cli/src/services/editor.rs - Editor Integration Service
//
// Launches the user's editor on the store file for `boom edit`. boom does
// not touch the store while the editor runs and does not save afterwards, so
// whatever the user writes is what the next invocation fetches.

use anyhow::Result;
use std::path::Path;
use std::process::Command;

use super::split_command;

/// Handles text editor operations
///
/// EDITOR SELECTION HIERARCHY:
/// 1. integrations.editor from config, already overridden by BOOM_EDITOR
///    or EDITOR when those are set
/// 2. Platform-specific default (vim on Unix, notepad on Windows)
pub struct EditorService {
    command: Vec<String>,
}

impl EditorService {
    pub fn new(configured: Option<&str>) -> Self {
        let command = configured
            .map(split_command)
            .filter(|parts| !parts.is_empty())
            .unwrap_or_else(Self::platform_default);
        Self { command }
    }

    fn platform_default() -> Vec<String> {
        if cfg!(windows) {
            vec!["notepad".to_string()]
        } else {
            vec!["vim".to_string()]
        }
    }

    /// Open a file in the configured editor and wait for it to exit
    ///
    /// Inherits stdio so terminal editors work. A non-zero exit is reported
    /// but not treated as failure: the file may well have been saved.
    pub fn open_file(&self, path: &Path) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No editor configured"))?;

        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| anyhow::anyhow!(
                "Failed to launch editor '{}': {}\n\nTips:\n- Check that '{}' is installed and in PATH\n- Set BOOM_EDITOR or EDITOR environment variable",
                program, e, program
            ))?;

        if !status.success() {
            eprintln!(
                "⚠️ Editor '{}' exited with error code: {:?}",
                program,
                status.code()
            );
        }

        Ok(())
    }
}
