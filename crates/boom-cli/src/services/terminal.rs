// crates/boom-cli/src/services/terminal.rs - Effects backed by the real system
//
// Routes every side effect an operation asks for to the matching service:
// output to stdout, prompts to stdin, copies to the clipboard, opens to the
// browser and edits to $EDITOR. Service failures become BoomError::Effect so
// the core sees one error type.

use boom_core::{BoomError, Effects};
use console::Term;
use std::io;
use std::path::Path;
use tracing::debug;

use super::{BrowserService, ClipboardService, EditorService};
use crate::stdin;

pub struct TerminalEffects {
    out: Term,
    clipboard: ClipboardService,
    browser: BrowserService,
    editor: EditorService,
}

impl TerminalEffects {
    pub fn new(clipboard: ClipboardService, browser: BrowserService, editor: EditorService) -> Self {
        Self {
            out: Term::stdout(),
            clipboard,
            browser,
            editor,
        }
    }
}

fn effect_error(err: anyhow::Error) -> BoomError {
    BoomError::effect(format!("{:#}", err))
}

impl Effects for TerminalEffects {
    fn say(&mut self, line: &str) -> boom_core::Result<()> {
        match self.out.write_line(line) {
            Ok(()) => Ok(()),
            // Reader went away, e.g. `boom all | head`
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("stdout closed, dropping output");
                Ok(())
            }
            Err(e) => Err(BoomError::effect(format!("Failed to write output: {}", e))),
        }
    }

    fn ask(&mut self, prompt: &str) -> boom_core::Result<String> {
        self.say(prompt)?;
        stdin::read_answer().map_err(effect_error)
    }

    fn copy(&mut self, value: &str) -> boom_core::Result<()> {
        self.clipboard.copy(value).map_err(effect_error)
    }

    fn open(&mut self, target: &str) -> boom_core::Result<()> {
        self.browser.open(target).map_err(effect_error)
    }

    fn edit(&mut self, path: &Path) -> boom_core::Result<()> {
        self.editor.open_file(path).map_err(effect_error)
    }
}
