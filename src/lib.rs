//! cll - an interactive console that routes each line to a shell, a
//! JavaScript engine or a question-answering service
//!
//! This library provides the dispatcher and everything around it; the
//! `cll` binary adds a line editor on top.
//!
//! ## Features
//!
//! - **Modes:** Persistent Shell, JavaScript and Ask modes with one-shot
//!   prefixes (`&`, `?`, `$`, `φ`, `θ`)
//! - **Multi-line capture:** `&` or `ask` alone collects lines until Ctrl-D
//! - **Command substitution:** `` `cmd` `` is replaced by the command's output
//! - **Aliases:** First-token aliases from `~/.config/cll/aliases` and a
//!   shared alias file
//! - **Configuration:** TOML (or JSON) configuration with validation
//!
//! ## Module Organization
//!
//! - [`dispatch`] - Routing state machine, tokenizer, aliases, builtins
//! - [`backends`] - Shell, script, query and alias persistence collaborators
//! - [`config`] - Configuration loading, alias files, prompts
//! - [`history`] - Persistent command history
//! - [`models`] - `CommandResult` and the console modes
//! - [`platform`] - Platform-specific paths, executables and shells
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use cll::init;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = init()?;
//! let result = session.dispatcher.execute_command("echo hello");
//! print!("{}", result.output);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Everything is single-threaded and synchronous from the caller's point of
//! view. A [`Dispatcher`] owns its state and its collaborators; each call
//! blocks until a [`CommandResult`] exists. Back-ends that spawn processes
//! drive a private current-thread tokio runtime.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod backends;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod models;
pub mod platform;

// Re-exports for core functionality
pub use backends::{AliasPersistence, Backends, QueryService, ScriptEngine, ShellExecutor};
pub use config::{Config, ConfigLoader};
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use history::CommandHistory;
pub use models::{CommandResult, ConsoleMode, MultiLineMode};

use platform::{FilesystemOps, PathOps, Platform, ShellOps};
use std::path::Path;

// Version information
/// The current version of cll from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// A ready-to-use console: configuration, dispatcher and history
pub struct Session {
    pub config: Config,
    pub dispatcher: Dispatcher,
    pub history: CommandHistory,
    /// Directory the session reads and writes its files in
    pub config_dir: std::path::PathBuf,
}

impl Session {
    /// Persist history; failures are logged
    pub fn save_history(&self) {
        if let Err(e) = self.history.save() {
            warn!("Failed to save history: {}", e);
        }
    }
}

/// Initialize cll from the default configuration directory
///
/// `CLL_CONFIG_DIR` overrides the platform location.
///
/// # Errors
///
/// Fails only when no configuration directory can be determined at all.
pub fn init() -> Result<Session> {
    let dir = ConfigLoader::default_config_dir()?;
    init_in(&dir)
}

/// Initialize cll with an explicit configuration directory
///
/// 1. Validates system requirements (problems are only warned about)
/// 2. Loads configuration, falling back to defaults on any error
/// 3. Seeds the directory with default files
/// 4. Builds the back-ends, alias store, dispatcher and history
pub fn init_in(config_dir: &Path) -> Result<Session> {
    info!("Initializing {} v{} in {}", NAME, VERSION, config_dir.display());

    // Step 1: Validate system requirements
    let validation = validate_system();
    for issue in &validation.issues {
        warn!("System check: {}", issue);
    }

    // Step 2: Load configuration with fallback
    let mut loader = ConfigLoader::with_dir(config_dir);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    // Step 3: Make sure the directory and its default files exist
    if let Err(e) = loader.initialize_config_dir() {
        warn!("Failed to initialize {}: {}", config_dir.display(), e);
    }

    // Step 4: Build components
    let backends = Backends::from_config(&config);
    let dispatcher = Dispatcher::new(backends, Box::new(loader.alias_store()))
        .with_mode(config.general.default_mode);

    let history = match CommandHistory::with_path(loader.history_path(), config.general.history_size)
    {
        Ok(history) => history,
        Err(e) => {
            warn!("Failed to load history: {}", e);
            CommandHistory::new(config.general.history_size)
        }
    };

    info!("{} initialization complete", NAME);
    Ok(Session {
        config,
        dispatcher,
        history,
        config_dir: config_dir.to_path_buf(),
    })
}

/// Human-readable explanation of a startup error with suggestions
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigDirUnavailable => {
            "Configuration Error: Could not determine a configuration directory\n\nTry:\n• Set HOME or XDG_CONFIG_HOME\n• Pass --config <DIR>\n• Set CLL_CONFIG_DIR".to_string()
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Delete the file to regenerate defaults",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Use default configuration",
                field, reason
            )
        }
        Error::Io(err) => {
            format!(
                "I/O Error: {}\n\nTry:\n• Check file permissions\n• Ensure required directories exist",
                err
            )
        }
        _ => format!(
            "Unexpected Error: {}\n\nPlease report this issue with debug logs enabled",
            error
        ),
    }
}

/// Get default configuration
///
/// # Examples
///
/// ```
/// use cll::default_config;
///
/// let config = default_config();
/// assert_eq!(config.general.history_size, 1000);
/// ```
pub fn default_config() -> Config {
    Config::default()
}

/// Check what the console needs from the host
///
/// Missing pieces degrade features rather than preventing startup, so this
/// never fails.
pub fn validate_system() -> SystemValidation {
    let mut issues = Vec::new();

    if !Platform::shell().is_available() {
        let (program, _) = Platform::shell().interpreter();
        issues.push(ValidationIssue::MissingCommand(
            program.display().to_string(),
        ));
    }

    if Platform::paths().home_dir().is_err() {
        issues.push(ValidationIssue::MissingCapability(
            "home directory".to_string(),
        ));
    }

    let is_valid = issues.is_empty();
    if is_valid {
        debug!("System validation passed");
    }

    SystemValidation { is_valid, issues }
}

/// Whether a command can be found on PATH
pub fn command_exists(command: &str) -> bool {
    Platform::filesystem()
        .find_command(command)
        .map(|found| found.is_some())
        .unwrap_or(false)
}

/// System validation result
#[derive(Debug, Clone)]
pub struct SystemValidation {
    /// Whether the system meets all requirements
    pub is_valid: bool,
    /// List of validation issues found (empty if `is_valid` is true)
    pub issues: Vec<ValidationIssue>,
}

/// Validation issues that can be found during system validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required command is not available on the system
    MissingCommand(String),
    /// A required capability is missing
    MissingCapability(String),
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingCommand(cmd) => write!(f, "command '{}' not found", cmd),
            ValidationIssue::MissingCapability(what) => write!(f, "no {} available", what),
        }
    }
}
