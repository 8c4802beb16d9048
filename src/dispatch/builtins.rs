//! Builtin Registry
//!
//! The fixed vocabulary of verbs handled inside the dispatcher.

use std::collections::HashMap;

/// A reserved verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Quit,
    Exit,
    Clear,
    Js,
    JavaScript,
    Shell,
    Sh,
    Ask,
    Claude,
    Config,
    Reload,
}

const BUILTINS: [(&str, Builtin, &str); 12] = [
    ("help", Builtin::Help, "Show help message"),
    ("quit", Builtin::Quit, "Exit the console"),
    ("exit", Builtin::Exit, "Exit the console"),
    ("clear", Builtin::Clear, "Clear the console"),
    ("js", Builtin::Js, "Switch to JavaScript mode"),
    ("javascript", Builtin::JavaScript, "Switch to JavaScript mode"),
    ("shell", Builtin::Shell, "Switch to shell mode"),
    ("sh", Builtin::Sh, "Switch to shell mode"),
    ("ask", Builtin::Ask, "Ask a question (alone: start a multi-line question)"),
    ("claude", Builtin::Claude, "Switch to Ask mode"),
    ("config", Builtin::Config, "Manage configuration and aliases"),
    ("reload", Builtin::Reload, "Reload configuration from files"),
];

#[derive(Debug, Clone, Copy)]
struct BuiltinEntry {
    builtin: Builtin,
    description: &'static str,
}

/// Verb lookup table, fixed at construction
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    commands: HashMap<&'static str, BuiltinEntry>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let commands = BUILTINS
            .iter()
            .map(|&(name, builtin, description)| {
                (
                    name,
                    BuiltinEntry {
                        builtin,
                        description,
                    },
                )
            })
            .collect();
        Self { commands }
    }

    pub fn lookup(&self, verb: &str) -> Option<Builtin> {
        self.commands.get(verb).map(|entry| entry.builtin)
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.commands.contains_key(verb)
    }

    pub fn description(&self, verb: &str) -> Option<&'static str> {
        self.commands.get(verb).map(|entry| entry.description)
    }

    /// Every verb with its description, sorted by verb
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .commands
            .iter()
            .map(|(name, entry)| (*name, entry.description))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
