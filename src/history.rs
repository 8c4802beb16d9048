//! Persistent command history
//!
//! Bounded, in-order history of dispatched lines with up/down navigation,
//! saved to `<config dir>/history` between sessions.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Maximum number of history entries kept by default
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Command history with navigation
#[derive(Debug, Clone)]
pub struct CommandHistory {
    /// File backing this history, if any
    history_file: Option<PathBuf>,
    /// Oldest entry first
    history: VecDeque<String>,
    /// Maximum history size
    max_size: usize,
    /// Navigation position; `None` means "past the newest entry"
    position: Option<usize>,
}

impl CommandHistory {
    /// In-memory history
    pub fn new(max_size: usize) -> Self {
        Self {
            history_file: None,
            history: VecDeque::new(),
            max_size: max_size.max(1),
            position: None,
        }
    }

    /// History backed by `path`, loading whatever is already there
    pub fn with_path(path: impl Into<PathBuf>, max_size: usize) -> Result<Self> {
        let mut history = Self::new(max_size);
        history.history_file = Some(path.into());
        history.load()?;
        Ok(history)
    }

    /// Load history from file; a missing file is an empty history
    pub fn load(&mut self) -> Result<()> {
        let Some(path) = &self.history_file else {
            return Ok(());
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        self.history.clear();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.trim().is_empty() {
                self.history.push_back(line);
            }
        }
        self.trim_to_max();
        self.reset_position();

        debug!("Loaded {} history entries", self.history.len());
        Ok(())
    }

    /// Save history to file
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.history_file else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        for entry in &self.history {
            writeln!(file, "{}", entry)?;
        }
        Ok(())
    }

    /// Add a command to history
    ///
    /// Blank commands and repeats of the newest entry are skipped. Adding
    /// always resets navigation.
    pub fn add(&mut self, command: &str) {
        self.reset_position();

        if command.trim().is_empty() || command.contains('\n') {
            return;
        }
        if self.history.back().is_some_and(|last| last == command) {
            return;
        }

        self.history.push_back(command.to_string());
        self.trim_to_max();
    }

    /// Step to an older entry, stopping at the oldest
    pub fn previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }

        let index = match self.position {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.position = Some(index);
        self.get(index)
    }

    /// Step to a newer entry; stepping past the newest returns `None`
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        let index = self.position? + 1;
        if index >= self.history.len() {
            self.position = None;
            return None;
        }
        self.position = Some(index);
        self.get(index)
    }

    pub fn reset_position(&mut self) {
        self.position = None;
    }

    /// Entry by age, oldest first
    pub fn get(&self, index: usize) -> Option<&str> {
        self.history.get(index).map(String::as_str)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get history file path
    pub fn history_file(&self) -> Option<&Path> {
        self.history_file.as_deref()
    }

    fn trim_to_max(&mut self) {
        while self.history.len() > self.max_size {
            self.history.pop_front();
        }
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
