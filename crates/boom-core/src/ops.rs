// crates/boom-core/src/ops.rs - Applying a resolved command to the store
//
// Each operation either queries the store or mutates it, and reports which
// through Outcome. Operations never save; the session saves once, afterwards,
// if and only if `mutated` is true. Lookup errors are raised before anything
// is touched, so a failed operation leaves the store as it was.

use tracing::debug;

use crate::backend::Backend;
use crate::command::Command;
use crate::effects::Effects;
use crate::error::{BoomError, Result};
use crate::store::Store;

/// What applying a command did to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub mutated: bool,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self { mutated: false }
    }

    pub fn changed() -> Self {
        Self { mutated: true }
    }
}

/// Answers that confirm a destructive prompt. Exact and case-sensitive.
const AFFIRMATIVE: [&str; 2] = ["y", "yes"];

pub const HELP: &str = "
  - boom: help ---------------------------------------------------

  boom                          display high-level overview
  boom all                      show all items in all lists
  boom edit                     edit the boom JSON file in $EDITOR
  boom help                     this help text
  boom storage                  shows which storage backend you're using

  boom <list>                   create a new list
  boom <list>                   show items for a list
  boom <list> delete            deletes a list

  boom <list> <name> <value>    create a new list item
  boom <name>                   copy item's value to clipboard
  boom <list> <name>            copy item's value to clipboard
  boom open <name>              open item's url in browser
  boom open <list>              open all item's url in browser for a list
  boom open <list> <name>       open an item's url in browser
  boom random                   open a random item's url in browser
  boom random <list>            open a random item's url for a list in browser
  boom echo <name>              echo the item's value without copying
  boom echo <list> <name>       echo the item's value without copying
  boom <list> <name> delete     deletes an item
";

pub const ONBOARDING: [&str; 6] = [
    "You don't have anything yet! To start out, create a new list:",
    "  $ boom <list-name>",
    "And then add something to your list!",
    "  $ boom <list-name> <item-name> <item-value>",
    "You can then grab your new item:",
    "  $ boom <item-name>",
];

/// Apply `command` to `store`, talking to the outside world through `fx`
///
/// `backend` is only consulted for `storage` and `edit`; it is never saved
/// from here.
pub fn apply(
    command: &Command,
    store: &mut Store,
    fx: &mut dyn Effects,
    backend: &dyn Backend,
) -> Result<Outcome> {
    debug!(%command, "applying");

    match command {
        Command::Overview => overview(store, fx),
        Command::ListAll => list_all(store, fx),
        Command::Help => {
            fx.say(HELP)?;
            Ok(Outcome::unchanged())
        }
        Command::Version => {
            fx.say(crate::VERSION)?;
            Ok(Outcome::unchanged())
        }
        Command::Storage => {
            fx.say(&format!("You're currently using {}.", backend.describe()))?;
            Ok(Outcome::unchanged())
        }
        Command::Edit => edit(backend, fx),
        Command::EchoListItem { list, key } => {
            let value = scoped_value(store, list, key)?;
            fx.say(value)?;
            Ok(Outcome::unchanged())
        }
        Command::EchoItem { key } => {
            let (_, value) = global_value(store, key)?;
            fx.say(value)?;
            Ok(Outcome::unchanged())
        }
        Command::OpenListItem { list, key } => {
            let value = scoped_value(store, list, key)?;
            open_value(value, fx)
        }
        Command::OpenList { list } => open_list(store, list, fx),
        Command::OpenItem { key } => {
            let (_, value) = global_value(store, key)?;
            open_value(value, fx)
        }
        Command::RandomItem { list } => random_item(store, list.as_deref(), fx),
        Command::DeleteList { list } => delete_list(store, list, fx),
        Command::DeleteItem { list, key } => delete_item(store, list, key, fx),
        Command::AddItem { list, key, value } => add_item(store, list, key, value, fx),
        Command::CopyListItem { list, key } => {
            let value = scoped_value(store, list, key)?;
            copy_value(key, value, fx)
        }
        Command::DetailList { list } => detail_list(store, list, fx),
        Command::CopyItem { key } => {
            let (_, value) = global_value(store, key)?;
            copy_value(key, value, fx)
        }
        Command::CreateList { name } => create_list(store, name, fx),
    }
}

fn overview(store: &Store, fx: &mut dyn Effects) -> Result<Outcome> {
    if store.is_empty() {
        for line in ONBOARDING {
            fx.say(line)?;
        }
        return Ok(Outcome::unchanged());
    }

    for (name, items) in store.lists() {
        fx.say(&format!("  {} ({})", name, items.len()))?;
    }
    Ok(Outcome::unchanged())
}

fn list_all(store: &Store, fx: &mut dyn Effects) -> Result<Outcome> {
    for (name, items) in store.lists() {
        fx.say(&format!("  {}", name))?;
        for (key, value) in items {
            fx.say(&format!("    {}: {}", key, value))?;
        }
    }
    Ok(Outcome::unchanged())
}

fn detail_list(store: &Store, list: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    let items = store
        .get_list(list)
        .ok_or_else(|| BoomError::UnknownList(list.to_string()))?;

    for (key, value) in items {
        fx.say(&format!("    {}: {}", key, value))?;
    }
    Ok(Outcome::unchanged())
}

fn edit(backend: &dyn Backend, fx: &mut dyn Effects) -> Result<Outcome> {
    let path = backend.location().ok_or_else(|| {
        BoomError::Unsupported(format!("the {} backend has no file to edit", backend.describe()))
    })?;

    fx.edit(path)?;
    fx.say("Make your edits, and do be sure to save.")?;
    // The file was edited in place; saving our snapshot would clobber it
    Ok(Outcome::unchanged())
}

fn scoped_value<'s>(store: &'s Store, list: &str, key: &str) -> Result<&'s str> {
    store.get_item(list, key).ok_or_else(|| BoomError::UnknownKey {
        list: list.to_string(),
        key: key.to_string(),
    })
}

fn global_value<'s>(store: &'s Store, key: &str) -> Result<(&'s str, &'s str)> {
    store
        .find_item_globally(key)
        .ok_or_else(|| BoomError::KeyNotFound(key.to_string()))
}

// Only the key is printed, never the copied value
fn copy_value(key: &str, value: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    fx.copy(value)?;
    fx.say(&format!("Boom! We just copied {} to your clipboard.", key))?;
    Ok(Outcome::unchanged())
}

fn open_value(value: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    fx.open(value)?;
    fx.say(&format!("Boom! We just opened {} for you.", value))?;
    Ok(Outcome::unchanged())
}

fn open_list(store: &Store, list: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    let items = store
        .get_list(list)
        .ok_or_else(|| BoomError::UnknownList(list.to_string()))?;

    for value in items.values() {
        fx.open(value)?;
    }
    fx.say(&format!("Boom! We just opened all of {} for you.", list))?;
    Ok(Outcome::unchanged())
}

#[cfg(feature = "random")]
fn random_item(store: &Store, list: Option<&str>, fx: &mut dyn Effects) -> Result<Outcome> {
    use rand::seq::IteratorRandom;

    let mut rng = rand::thread_rng();
    let picked = match list {
        Some(name) => store
            .get_list(name)
            .ok_or_else(|| BoomError::UnknownList(name.to_string()))?
            .values()
            .choose(&mut rng)
            .map(String::as_str),
        None => store.items().map(|(_, _, value)| value).choose(&mut rng),
    };

    let value = picked.ok_or_else(|| {
        BoomError::KeyNotFound(list.map_or("any item".to_string(), |name| format!("any item in {}", name)))
    })?;
    open_value(value, fx)
}

#[cfg(not(feature = "random"))]
fn random_item(_store: &Store, _list: Option<&str>, _fx: &mut dyn Effects) -> Result<Outcome> {
    Err(BoomError::Unsupported(
        "random was disabled at build time".to_string(),
    ))
}

fn create_list(store: &mut Store, name: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    if !store.create_list(name) {
        debug!(name, "list already exists");
        return Ok(Outcome::unchanged());
    }

    fx.say(&format!("Boom! Created a new list called {}.", name))?;
    Ok(Outcome::changed())
}

fn add_item(
    store: &mut Store,
    list: &str,
    key: &str,
    value: &str,
    fx: &mut dyn Effects,
) -> Result<Outcome> {
    if store.set_item(list, key, value) {
        fx.say(&format!("Boom! Created a new list called {}.", list))?;
    }
    fx.say(&format!("Boom! {} in {} is {}. Got it.", key, list, value))?;
    // Always persisted, even when the value did not change
    Ok(Outcome::changed())
}

fn delete_item(store: &mut Store, list: &str, key: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    if !store.delete_item(list, key) {
        debug!(list, key, "nothing to delete");
        return Ok(Outcome::unchanged());
    }

    fx.say(&format!("Boom! {} is gone forever.", key))?;
    Ok(Outcome::changed())
}

fn delete_list(store: &mut Store, list: &str, fx: &mut dyn Effects) -> Result<Outcome> {
    let answer = fx.ask(&format!(
        "You sure you want to delete everything in {}? (y/n):",
        list
    ))?;
    let answer = answer.trim_end_matches(['\r', '\n']);

    if !AFFIRMATIVE.contains(&answer) {
        debug!(list, answer, "list deletion declined");
        return Ok(Outcome::unchanged());
    }

    if !store.delete_list(list) {
        return Ok(Outcome::unchanged());
    }
    fx.say(&format!("Boom! Deleted all your {}.", list))?;
    Ok(Outcome::changed())
}
