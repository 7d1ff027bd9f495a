// crates/boom-core/src/effects.rs - Side-channel port used by operations
//
// Operations never print, prompt, or shell out directly. They go through
// Effects, which the CLI implements against the terminal, the clipboard, the
// browser and $EDITOR, and which tests implement with RecordedEffects.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::error::{BoomError, Result};

/// Everything an operation may do outside the store
pub trait Effects {
    /// Print one line of output
    fn say(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and read one line of input
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Put `value` on the clipboard
    fn copy(&mut self, value: &str) -> Result<()>;

    /// Open `target` (usually a URL) with the system opener
    fn open(&mut self, target: &str) -> Result<()>;

    /// Open `path` in the user's editor and wait for it to exit
    fn edit(&mut self, path: &Path) -> Result<()>;
}

/// In-memory Effects that records every call
///
/// Answers for `ask` are queued up front; an empty queue answers "".
#[derive(Debug, Default)]
pub struct RecordedEffects {
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
    pub answers: VecDeque<String>,
    pub copied: Vec<String>,
    pub opened: Vec<String>,
    pub edited: Vec<PathBuf>,
    /// Make `copy` and `open` fail, as a missing xclip would
    pub fail_side_channel: bool,
    /// Make `say` fail, as a full disk behind stdout would
    pub fail_output: bool,
}

impl RecordedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `ask`
    pub fn answering(mut self, answer: &str) -> Self {
        self.answers.push_back(answer.to_string());
        self
    }

    /// Everything said, joined by newlines
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// True if neither clipboard nor browser was touched
    pub fn side_channel_untouched(&self) -> bool {
        self.copied.is_empty() && self.opened.is_empty()
    }
}

impl Effects for RecordedEffects {
    fn say(&mut self, line: &str) -> Result<()> {
        if self.fail_output {
            return Err(BoomError::effect("output unavailable"));
        }
        self.lines.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn copy(&mut self, value: &str) -> Result<()> {
        if self.fail_side_channel {
            return Err(BoomError::effect("clipboard unavailable"));
        }
        self.copied.push(value.to_string());
        Ok(())
    }

    fn open(&mut self, target: &str) -> Result<()> {
        if self.fail_side_channel {
            return Err(BoomError::effect("browser unavailable"));
        }
        self.opened.push(target.to_string());
        Ok(())
    }

    fn edit(&mut self, path: &Path) -> Result<()> {
        self.edited.push(path.to_path_buf());
        Ok(())
    }
}
