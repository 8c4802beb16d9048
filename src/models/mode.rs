//! Console Modes
//!
//! The persistent mode decides where unprefixed input goes; the multi-line
//! mode is a transient capture that sits on top of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persistent execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    /// Input goes to the OS shell
    #[default]
    Shell,
    /// Input goes to the scripting engine
    #[serde(alias = "js")]
    JavaScript,
    /// Input goes to the query service
    Ask,
}

impl ConsoleMode {
    /// Short label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleMode::Shell => "sh",
            ConsoleMode::JavaScript => "js",
            ConsoleMode::Ask => "ask",
        }
    }

    /// Human-readable name used in messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ConsoleMode::Shell => "Shell",
            ConsoleMode::JavaScript => "JavaScript",
            ConsoleMode::Ask => "Ask",
        }
    }
}

impl fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ConsoleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" | "sh" => Ok(ConsoleMode::Shell),
            "javascript" | "js" => Ok(ConsoleMode::JavaScript),
            "ask" | "claude" => Ok(ConsoleMode::Ask),
            other => Err(format!(
                "invalid mode '{}' (expected shell, js or ask)",
                other
            )),
        }
    }
}

/// What a multi-line capture will be executed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    JavaScript,
    Ask,
}

/// Transient multi-line capture state as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultiLineMode {
    #[default]
    None,
    JavaScript,
    Ask,
}

impl MultiLineMode {
    /// The capture kind this mode starts, if any
    pub fn capture_kind(self) -> Option<CaptureKind> {
        match self {
            MultiLineMode::None => None,
            MultiLineMode::JavaScript => Some(CaptureKind::JavaScript),
            MultiLineMode::Ask => Some(CaptureKind::Ask),
        }
    }
}

impl From<Option<CaptureKind>> for MultiLineMode {
    fn from(kind: Option<CaptureKind>) -> Self {
        match kind {
            None => MultiLineMode::None,
            Some(CaptureKind::JavaScript) => MultiLineMode::JavaScript,
            Some(CaptureKind::Ask) => MultiLineMode::Ask,
        }
    }
}
