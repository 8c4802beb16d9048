//! Unit Tests for Builtin Commands
//!
//! The registry vocabulary and the results of each builtin.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cll::dispatch::{Builtin, BuiltinRegistry};
use cll::ConsoleMode;
use test_utils::{create_test_dispatcher, TestHarness};

const VERBS: [&str; 12] = [
    "help",
    "quit",
    "exit",
    "clear",
    "js",
    "javascript",
    "shell",
    "sh",
    "ask",
    "claude",
    "config",
    "reload",
];

#[test]
fn test_registry_vocabulary() {
    let registry = BuiltinRegistry::new();
    assert_eq!(registry.len(), VERBS.len());

    for verb in VERBS {
        assert!(registry.contains(verb), "missing builtin '{}'", verb);
        assert!(registry.description(verb).is_some());
    }
    assert!(!registry.contains("ls"));
    assert!(!registry.contains("HELP"));
    assert_eq!(registry.lookup("reload"), Some(Builtin::Reload));
}

#[test]
fn test_registry_entries_are_sorted() {
    let registry = BuiltinRegistry::new();
    let names: Vec<_> = registry.entries().into_iter().map(|(name, _)| name).collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_is_builtin_checks_first_token() {
    let dispatcher = create_test_dispatcher();
    assert!(dispatcher.is_builtin_command("help"));
    assert!(dispatcher.is_builtin_command("  config alias a=b"));
    assert!(!dispatcher.is_builtin_command("helpme"));
    assert!(!dispatcher.is_builtin_command(""));
}

#[test]
fn test_help_lists_commands_and_mode() {
    let mut dispatcher = create_test_dispatcher();
    dispatcher.set_mode(ConsoleMode::JavaScript);

    let result = dispatcher.execute_command("help");
    assert!(result.success);
    assert!(result.output.contains("Available commands:"));
    assert!(result.output.contains("Special syntax:"));
    for verb in VERBS {
        assert!(result.output.contains(verb));
    }
    assert!(result.output.contains("Current mode: JavaScript"));
}

#[test]
fn test_quit_and_exit_only_say_goodbye() {
    let mut harness = TestHarness::new();

    for verb in ["quit", "exit"] {
        let result = harness.dispatcher.execute_command(verb);
        assert!(result.success);
        assert_eq!(result.output, "Exiting...");
    }
    assert!(harness.nothing_ran());
}

#[test]
fn test_clear_emits_escape_sequence() {
    let mut dispatcher = create_test_dispatcher();
    let result = dispatcher.execute_command("clear");
    assert_eq!(result.output, "\x1b[2J\x1b[H");
}

#[test]
fn test_mode_verbs_reject_arguments() {
    let mut dispatcher = create_test_dispatcher();

    let result = dispatcher.execute_command("js now");
    assert!(!result.success);
    assert_eq!(result.error, "Usage: js");
    assert_eq!(dispatcher.mode(), ConsoleMode::Shell);
}

#[test]
fn test_direct_builtin_execution() {
    let mut harness = TestHarness::new();

    let result = harness.dispatcher.execute_builtin_command("javascript");
    assert_eq!(result.output, "Switched to JavaScript mode");

    let result = harness.dispatcher.execute_builtin_command("claude");
    assert!(!result.success);
    assert_eq!(result.error, "Usage: ask <question>");

    let result = harness.dispatcher.execute_builtin_command("claude what now");
    assert!(result.success);
    assert_eq!(harness.query_calls(), vec!["what now"]);

    let result = harness.dispatcher.execute_builtin_command("frobnicate");
    assert!(!result.success);
    assert_eq!(result.error, "Unknown command: frobnicate");
}

#[test]
fn test_builtins_report_success_with_zero_exit() {
    let mut dispatcher = create_test_dispatcher();
    let result = dispatcher.execute_command("help");
    assert_eq!(result.exit_code, 0);
    assert!(result.error.is_empty());
}
