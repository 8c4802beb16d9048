//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing for clean abstraction and easier testing.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Platform-specific filesystem operations
pub trait FilesystemOps: Send + Sync {
    /// Check if a file is executable
    fn is_executable(&self, path: &Path) -> bool;

    /// Find a command in PATH
    fn find_command(&self, command: &str) -> Result<Option<PathBuf>>;
}

/// Platform-specific path operations
pub trait PathOps: Send + Sync {
    /// Get the base configuration directory (not yet app-specific)
    fn config_dir(&self) -> Result<PathBuf>;

    /// Get the user's home directory
    fn home_dir(&self) -> Result<PathBuf>;
}

/// Platform-specific shell operations
pub trait ShellOps: Send + Sync {
    /// Interpreter and flag used to run a single command line
    fn interpreter(&self) -> (PathBuf, Vec<String>);

    /// Rewrite a command line so stderr is merged into stdout
    fn merge_stderr(&self, command: &str) -> String {
        format!("{} 2>&1", command)
    }

    /// Whether the interpreter can be found on this system
    fn is_available(&self) -> bool;
}
