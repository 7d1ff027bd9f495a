// crates/boom-core/src/store.rs - In-memory lists of key/value items
//
// The Store is the whole world for one invocation: it is fetched once from a
// backend, mutated by at most one operation, and saved once if it changed.
//
// ORDERING:
// Lists and items live in BTreeMaps, so every iteration (overview, `all`,
// global key lookup, the JSON document) is lexicographic. Insertion order is
// not meaningful and is not preserved. Global lookups that hit the same key in
// several lists resolve to the lexicographically first list name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items of one list, keyed by item name
pub type List = BTreeMap<String, String>;

/// Every list the user owns, keyed by list name
///
/// Serializes transparently as `{ "<list>": { "<key>": "<value>" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    lists: BTreeMap<String, List>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_exists(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// True if any list contains an item with this key
    pub fn item_exists_anywhere(&self, key: &str) -> bool {
        self.lists.values().any(|items| items.contains_key(key))
    }

    pub fn get_list(&self, name: &str) -> Option<&List> {
        self.lists.get(name)
    }

    pub fn get_item(&self, list: &str, key: &str) -> Option<&str> {
        self.lists
            .get(list)
            .and_then(|items| items.get(key))
            .map(String::as_str)
    }

    /// Find a key in any list, returning `(list_name, value)`
    ///
    /// Lists are scanned in name order, so the first list alphabetically wins
    /// when the key appears more than once.
    pub fn find_item_globally(&self, key: &str) -> Option<(&str, &str)> {
        self.lists.iter().find_map(|(name, items)| {
            items
                .get(key)
                .map(|value| (name.as_str(), value.as_str()))
        })
    }

    /// Create an empty list. Returns false if it already existed.
    pub fn create_list(&mut self, name: &str) -> bool {
        if self.lists.contains_key(name) {
            return false;
        }
        self.lists.insert(name.to_string(), List::new());
        true
    }

    /// Remove a list and all its items. Returns false if it was absent.
    pub fn delete_list(&mut self, name: &str) -> bool {
        self.lists.remove(name).is_some()
    }

    /// Insert or overwrite an item, creating the list first if needed
    ///
    /// Returns true when the list had to be created.
    pub fn set_item(&mut self, list: &str, key: &str, value: &str) -> bool {
        let created = self.create_list(list);
        if let Some(items) = self.lists.get_mut(list) {
            items.insert(key.to_string(), value.to_string());
        }
        created
    }

    /// Remove an item if present. The parent list stays even when emptied.
    pub fn delete_item(&mut self, list: &str, key: &str) -> bool {
        self.lists
            .get_mut(list)
            .is_some_and(|items| items.remove(key).is_some())
    }

    /// Number of lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate lists in name order
    pub fn lists(&self) -> impl Iterator<Item = (&str, &List)> {
        self.lists.iter().map(|(name, items)| (name.as_str(), items))
    }

    /// Iterate every `(list, key, value)` triple in list then key order
    pub fn items(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.lists.iter().flat_map(|(name, items)| {
            items
                .iter()
                .map(move |(key, value)| (name.as_str(), key.as_str(), value.as_str()))
        })
    }
}
