//! Alias Table
//!
//! Case-sensitive first-token substitution. Expansion only ever looks at the
//! first token and never re-expands the result.

use super::tokenizer::split_command;
use std::collections::BTreeMap;

/// Name to replacement-text mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an alias
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Upsert every entry of a loaded map
    pub fn merge(&mut self, loaded: BTreeMap<String, String>) {
        self.entries.extend(loaded);
    }

    /// Aliases sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying map for persistence
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Expand the first token if it names an alias
    ///
    /// An expanded command is rebuilt from tokens, so runs of whitespace in
    /// the arguments collapse to single spaces. Unknown commands come back
    /// unchanged, byte for byte.
    pub fn expand(&self, command: &str) -> String {
        let words = split_command(command);
        let Some((first, args)) = words.split_first() else {
            return command.to_string();
        };

        match self.entries.get(*first) {
            Some(value) => {
                let mut expanded = value.clone();
                for arg in args {
                    expanded.push(' ');
                    expanded.push_str(arg);
                }
                expanded
            }
            None => command.to_string(),
        }
    }
}

impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
