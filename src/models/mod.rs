//! Core data models for cll
//!
//! This module contains the data structures shared by the dispatcher, the
//! back-ends and the REPL: the result of a dispatch and the console modes.

pub mod command_result;
pub mod mode;

// Re-exports for convenience
pub use command_result::{format_execution_time, CommandResult};
pub use mode::{CaptureKind, ConsoleMode, MultiLineMode};
