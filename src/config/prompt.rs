//! Prompt Formatting
//!
//! Handles prompt formatting with variable substitution. Besides the mode
//! placeholder `{mode}` it supports the common shell prompt variables
//! $USER, $HOSTNAME, $PWD and $HOME; `$$` produces a literal `$`.

use super::PromptConfig;
use crate::models::{ConsoleMode, MultiLineMode};
use std::env;
use std::path::Path;

const ESCAPED_DOLLAR: &str = "\u{0}";
const RESET: &str = "\x1b[0m";

/// Prompt formatter that handles variable substitution
#[derive(Debug, Clone)]
pub struct PromptFormatter {
    /// The format template
    format: String,
}

impl PromptFormatter {
    /// Create a new prompt formatter with the given format string
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Render the prompt for a mode and working directory
    pub fn render(&self, mode: ConsoleMode, working_dir: &Path) -> String {
        let user = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "user".to_string());

        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .unwrap_or_else(|_| "/".to_string());

        let pwd = if working_dir == Path::new(&home) {
            "~".to_string()
        } else if let Ok(stripped) = working_dir.strip_prefix(&home) {
            format!("~/{}", stripped.display())
        } else {
            working_dir.display().to_string()
        };

        self.format
            .replace("$$", ESCAPED_DOLLAR)
            .replace("{mode}", mode.label())
            .replace("$USER", &user)
            .replace("$HOSTNAME", &hostname)
            .replace("$PWD", &pwd)
            .replace("$HOME", &home)
            .replace(ESCAPED_DOLLAR, "$")
    }

    /// Update the format template
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    /// Get the current format template
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for PromptFormatter {
    fn default() -> Self {
        Self::new(PromptConfig::default().format)
    }
}

/// ANSI foreground sequence for a named color
pub fn color_code(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "orange" => Some("\x1b[38;5;208m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        _ => None,
    }
}

/// The prompt to show for the current dispatcher state
pub fn prompt_for(
    config: &PromptConfig,
    mode: ConsoleMode,
    multi_line: MultiLineMode,
    enable_colors: bool,
    working_dir: &Path,
) -> String {
    match multi_line {
        MultiLineMode::JavaScript => config.multiline_js.clone(),
        MultiLineMode::Ask => match color_code(&config.ask_prompt_color) {
            Some(code) if enable_colors => format!("{}{}{}", code, config.ask_prompt, RESET),
            _ => config.ask_prompt.clone(),
        },
        MultiLineMode::None => PromptFormatter::new(config.format.as_str()).render(mode, working_dir),
    }
}
