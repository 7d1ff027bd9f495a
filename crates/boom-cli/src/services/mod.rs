// crates/boom-cli/src/services/mod.rs - Service layer modules
pub mod browser;
pub mod clipboard;
pub mod editor;
pub mod terminal;

pub use browser::BrowserService;
pub use clipboard::ClipboardService;
pub use editor::EditorService;
pub use terminal::TerminalEffects;

/// Split a configured command line into program and arguments
///
/// Plain whitespace splitting; quoting is not interpreted.
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(
            split_command("  xclip -selection   clipboard "),
            vec!["xclip", "-selection", "clipboard"]
        );
        assert!(split_command("").is_empty());
    }
}
