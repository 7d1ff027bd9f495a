// crates/boom-core/src/command.rs - Resolving positional tokens into one command
//
// boom has no fixed grammar. The same token shape means different things
// depending on what the store already holds:
//
//   boom urls          -> show the list if "urls" is a list
//                      -> copy the item if "urls" is an item key somewhere
//                      -> otherwise create a list called "urls"
//
// RESOLUTION ORDER (first match wins):
//   1. no command                  Overview
//   2. fixed keywords              all, help, version, storage, edit, echo,
//                                  open, random
//   3. command names a list        delete list / delete item / add item /
//                                  copy item / detail list
//   4. command is an item key      copy item
//   5. anything else               create list
//
// Keywords are checked before list names, so a list called "help" can never
// shadow `boom help`. List names are checked before item keys.

use std::fmt;
use tracing::debug;

use crate::store::Store;

/// Keyword that deletes a list or an item when it appears as an argument
pub const DELETE: &str = "delete";

/// The three positional tokens of one invocation
///
/// An empty string means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub command: String,
    pub major: String,
    pub minor: String,
}

impl Tokens {
    pub fn new(
        command: impl Into<String>,
        major: impl Into<String>,
        minor: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// Build from up to three optional positionals
    pub fn from_args(command: Option<String>, major: Option<String>, minor: Option<String>) -> Self {
        Self {
            command: command.unwrap_or_default(),
            major: major.unwrap_or_default(),
            minor: minor.unwrap_or_default(),
        }
    }
}

/// Exactly one operation chosen for an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Per-list item counts, or onboarding text for an empty store
    Overview,
    /// Every item in every list
    ListAll,
    Help,
    Version,
    /// Which backend is in use
    Storage,
    /// Open the persisted file in the user's editor
    Edit,
    EchoListItem { list: String, key: String },
    EchoItem { key: String },
    OpenListItem { list: String, key: String },
    /// Open every value in a list
    OpenList { list: String },
    OpenItem { key: String },
    /// Open a random value, optionally restricted to one list
    RandomItem { list: Option<String> },
    DeleteList { list: String },
    DeleteItem { list: String, key: String },
    AddItem { list: String, key: String, value: String },
    CopyListItem { list: String, key: String },
    DetailList { list: String },
    CopyItem { key: String },
    CreateList { name: String },
}

impl Command {
    /// Pick the command the tokens mean against the current store
    ///
    /// Total: every token combination resolves to some command.
    pub fn resolve(tokens: &Tokens, store: &Store) -> Self {
        let command = resolve_chain(tokens, store);
        debug!(?tokens, ?command, "resolved command");
        command
    }

    /// Whether applying this command can change the store
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::DeleteList { .. }
                | Self::DeleteItem { .. }
                | Self::AddItem { .. }
                | Self::CreateList { .. }
        )
    }
}

fn resolve_chain(tokens: &Tokens, store: &Store) -> Command {
    let Tokens {
        command,
        major,
        minor,
    } = tokens;

    match command.as_str() {
        "" => return Command::Overview,
        "all" => return Command::ListAll,
        "help" => return Command::Help,
        "version" => return Command::Version,
        "storage" => return Command::Storage,
        "edit" => return Command::Edit,
        "echo" => return resolve_echo(major, minor, store),
        "open" => return resolve_open(major, minor, store),
        "random" => {
            return Command::RandomItem {
                list: (!major.is_empty()).then(|| major.clone()),
            };
        }
        _ => {}
    }

    if store.list_exists(command) {
        return resolve_in_list(command, major, minor);
    }

    if store.item_exists_anywhere(command) {
        return Command::CopyItem {
            key: command.clone(),
        };
    }

    Command::CreateList {
        name: command.clone(),
    }
}

fn resolve_echo(major: &str, minor: &str, store: &Store) -> Command {
    if store.list_exists(major) {
        Command::EchoListItem {
            list: major.to_string(),
            key: minor.to_string(),
        }
    } else {
        Command::EchoItem {
            key: major.to_string(),
        }
    }
}

fn resolve_open(major: &str, minor: &str, store: &Store) -> Command {
    match (store.list_exists(major), minor.is_empty()) {
        (true, false) => Command::OpenListItem {
            list: major.to_string(),
            key: minor.to_string(),
        },
        (true, true) => Command::OpenList {
            list: major.to_string(),
        },
        (false, _) => Command::OpenItem {
            key: major.to_string(),
        },
    }
}

/// Sub-dispatch once `list` is known to exist
fn resolve_in_list(list: &str, major: &str, minor: &str) -> Command {
    let list = list.to_string();

    if major == DELETE {
        Command::DeleteList { list }
    } else if minor == DELETE {
        Command::DeleteItem {
            list,
            key: major.to_string(),
        }
    } else if !minor.is_empty() {
        Command::AddItem {
            list,
            key: major.to_string(),
            value: minor.to_string(),
        }
    } else if !major.is_empty() {
        Command::CopyListItem {
            list,
            key: major.to_string(),
        }
    } else {
        Command::DetailList { list }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::ListAll => write!(f, "all"),
            Self::Help => write!(f, "help"),
            Self::Version => write!(f, "version"),
            Self::Storage => write!(f, "storage"),
            Self::Edit => write!(f, "edit"),
            Self::EchoListItem { list, key } => write!(f, "echo {} {}", list, key),
            Self::EchoItem { key } => write!(f, "echo {}", key),
            Self::OpenListItem { list, key } => write!(f, "open {} {}", list, key),
            Self::OpenList { list } => write!(f, "open {}", list),
            Self::OpenItem { key } => write!(f, "open {}", key),
            Self::RandomItem { list: Some(list) } => write!(f, "random {}", list),
            Self::RandomItem { list: None } => write!(f, "random"),
            Self::DeleteList { list } => write!(f, "delete list {}", list),
            Self::DeleteItem { list, key } => write!(f, "delete {} from {}", key, list),
            Self::AddItem { list, key, .. } => write!(f, "set {} in {}", key, list),
            Self::CopyListItem { list, key } => write!(f, "copy {} from {}", key, list),
            Self::DetailList { list } => write!(f, "show {}", list),
            Self::CopyItem { key } => write!(f, "copy {}", key),
            Self::CreateList { name } => write!(f, "create list {}", name),
        }
    }
}
