use clap::Parser;

use boom_core::Tokens;

/// Main CLI structure
///
/// boom takes up to three positional words and works out what they mean from
/// what is already stored. See `boom help` for the full table.
#[derive(Parser, Debug)]
#[command(name = "boom")]
#[command(about = "Text snippets and bookmarks on the command line")]
#[command(version)]
pub struct Cli {
    /// A keyword (all, echo, open, ...), a list name, or an item name
    pub command: Option<String>,

    /// An item name, a list name after echo/open, or "delete"
    #[arg(allow_hyphen_values = true)]
    pub major: Option<String>,

    /// An item value, an item name after echo/open, or "delete"
    #[arg(allow_hyphen_values = true)]
    pub minor: Option<String>,
}

impl Cli {
    /// The positional words as resolver tokens
    pub fn tokens(&self) -> Tokens {
        Tokens::from_args(self.command.clone(), self.major.clone(), self.minor.clone())
    }
}
