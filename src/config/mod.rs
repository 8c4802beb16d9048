//! Configuration management for cll
//!
//! This module provides configuration loading and saving, alias file
//! persistence and prompt rendering. Every section is `#[serde(default)]` so
//! partial files only override what they mention.

pub mod aliases;
pub mod loader;
pub mod prompt;

use crate::models::ConsoleMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use aliases::{
    parse_alias_assignment, parse_aliases, serialize_aliases, AliasStore, AliasSyntaxError,
};
pub use loader::{ConfigFormat, ConfigLoader};
pub use prompt::PromptFormatter;

/// Main configuration structure for cll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General console behaviour
    pub general: GeneralConfig,

    /// Prompt configuration
    pub prompt: PromptConfig,

    /// Query back-end configuration
    pub ask: AskConfig,

    /// Script engine configuration
    pub script: ScriptConfig,
}

/// General console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Persistent mode at startup
    pub default_mode: ConsoleMode,

    /// Print execution time for commands slower than a millisecond
    pub show_execution_time: bool,

    /// Maximum number of history entries kept
    pub history_size: usize,

    /// Use ANSI colors in prompts and error output
    pub enable_colors: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_mode: ConsoleMode::Shell,
            show_execution_time: true,
            history_size: 1000,
            enable_colors: true,
        }
    }
}

/// Prompt configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Main prompt; `{mode}` expands to sh/js/ask
    pub format: String,

    /// Prompt while capturing a multi-line question
    pub ask_prompt: String,

    /// Color name for the ask prompt (empty for none)
    pub ask_prompt_color: String,

    /// Prompt while capturing multi-line JavaScript
    pub multiline_js: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            format: "❯ [{mode}] ".to_string(),
            ask_prompt: "? ".to_string(),
            ask_prompt_color: "orange".to_string(),
            multiline_js: "  ...js ".to_string(),
        }
    }
}

/// Which query back-end answers questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AskBackendKind {
    /// An external command found on PATH
    #[default]
    Subprocess,
    /// Built-in rule-based responder
    Local,
}

/// Query back-end configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AskConfig {
    pub backend: AskBackendKind,

    /// Command run with the question as its argument
    pub command: String,

    pub timeout_secs: u64,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            backend: AskBackendKind::Subprocess,
            command: "ask".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Which script engine runs JavaScript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEngineKind {
    /// Report what would have run without running it
    #[default]
    Simulated,
    /// Evaluate with Node.js
    Node,
}

/// Script engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub engine: ScriptEngineKind,

    /// Node.js executable used by the `node` engine
    pub node_command: String,

    pub timeout_secs: u64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            engine: ScriptEngineKind::Simulated,
            node_command: "node".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Get the configuration format implied by a file name
pub fn get_config_format(path: &Path) -> Option<ConfigFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Some(ConfigFormat::Toml),
        Some("json") => Some(ConfigFormat::Json),
        _ => None,
    }
}
