//! Integration Tests for Dispatch Flows
//!
//! These tests drive a dispatcher wired to recording fakes and verify which
//! collaborator each kind of input reaches.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cll::{ConsoleMode, MultiLineMode};
use test_utils::{MockShell, TestHarness};

#[test]
fn test_shell_mode_fallback() {
    let mut harness = TestHarness::new();
    let result = harness.dispatcher.execute_command("ls -la");

    assert!(result.success);
    assert_eq!(result.output, "ran: ls -la\n");
    assert_eq!(result.exit_code, 0);
    assert_eq!(harness.shell_calls(), vec!["ls -la"]);
}

#[test]
fn test_input_is_trimmed_before_dispatch() {
    let mut harness = TestHarness::new();
    harness.dispatcher.execute_command("  \tpwd \r\n");
    assert_eq!(harness.shell_calls(), vec!["pwd"]);
}

#[test]
fn test_empty_lines_and_comments_are_noops() {
    let mut harness = TestHarness::new();

    for input in ["", "   ", "\t\r\n", "# just a note", "   # indented note"] {
        let result = harness.dispatcher.execute_command(input);
        assert!(result.is_noop(), "'{}' should be a no-op", input.escape_debug());
    }
    assert!(harness.nothing_ran());
}

#[test]
fn test_one_shot_prefixes() {
    let mut harness = TestHarness::new();

    let js = harness.dispatcher.execute_command("&Math.sqrt(16)");
    assert_eq!(js.output, "js: Math.sqrt(16)");

    harness.dispatcher.execute_command("φ2 + 2");
    harness.dispatcher.execute_command("?what is a monad");
    harness.dispatcher.execute_command("θwhy");

    assert_eq!(harness.script_calls(), vec!["Math.sqrt(16)", "2 + 2"]);
    assert_eq!(harness.query_calls(), vec!["what is a monad", "why"]);
    assert_eq!(harness.dispatcher.mode(), ConsoleMode::Shell);
}

#[test]
fn test_prefix_payload_is_passed_verbatim() {
    let mut harness = TestHarness::new();
    harness.dispatcher.execute_command("& let  x = 1");
    harness.dispatcher.execute_command("? spaced  out");
    assert_eq!(harness.script_calls(), vec![" let  x = 1"]);
    assert_eq!(harness.query_calls(), vec![" spaced  out"]);
}

#[test]
fn test_dollar_prefix_runs_shell_from_other_modes() {
    let mut harness = TestHarness::new();
    harness.dispatcher.set_mode(ConsoleMode::JavaScript);

    let result = harness.dispatcher.execute_command("$echo hi");
    assert!(result.success);
    assert_eq!(harness.shell_calls(), vec!["echo hi"]);
    assert_eq!(harness.dispatcher.mode(), ConsoleMode::JavaScript);
}

#[test]
fn test_bare_prefixes_switch_modes() {
    let mut harness = TestHarness::new();

    let result = harness.dispatcher.execute_command("?");
    assert_eq!(result.output, "Switched to Ask mode");
    assert_eq!(harness.dispatcher.mode(), ConsoleMode::Ask);

    let result = harness.dispatcher.execute_command("$");
    assert_eq!(result.output, "Switched to Shell mode");
    assert_eq!(harness.dispatcher.mode(), ConsoleMode::Shell);
    assert!(harness.nothing_ran());
}

#[test]
fn test_mode_keywords() {
    let mut harness = TestHarness::new();

    let cases = [
        ("js", ConsoleMode::JavaScript, "Switched to JavaScript mode"),
        ("shell", ConsoleMode::Shell, "Switched to Shell mode"),
        ("javascript", ConsoleMode::JavaScript, "Switched to JavaScript mode"),
        ("sh", ConsoleMode::Shell, "Switched to Shell mode"),
        ("claude", ConsoleMode::Ask, "Switched to Ask mode"),
    ];

    for (input, mode, message) in cases {
        let result = harness.dispatcher.execute_command(input);
        assert!(result.success);
        assert_eq!(result.output, message);
        assert_eq!(harness.dispatcher.mode(), mode);
    }
    assert!(harness.nothing_ran());
}

#[test]
fn test_persistent_modes_route_plain_lines() {
    let mut harness = TestHarness::new();

    harness.dispatcher.execute_command("js");
    harness.dispatcher.execute_command("[1, 2].map(x => x * 2)");
    harness.dispatcher.execute_command("claude");
    harness.dispatcher.execute_command("how do lifetimes work");

    assert_eq!(harness.script_calls(), vec!["[1, 2].map(x => x * 2)"]);
    assert_eq!(harness.query_calls(), vec!["how do lifetimes work"]);
    assert!(harness.shell_calls().is_empty());
}

#[test]
fn test_ask_keyword() {
    let mut harness = TestHarness::new();

    let result = harness.dispatcher.execute_command("ask what is rust");
    assert!(result.success);
    assert_eq!(result.output, "answer: what is rust");
    assert_eq!(harness.query_calls(), vec!["what is rust"]);
    assert_eq!(harness.dispatcher.mode(), ConsoleMode::Shell);
}

#[test]
fn test_ask_joined_by_unicode_space_is_not_the_keyword() {
    let mut harness = TestHarness::new();

    let result = harness.dispatcher.execute_command("ask\u{a0}x");
    assert!(result.success);
    assert_eq!(harness.shell_calls(), vec!["ask\u{a0}x"]);
    assert!(harness.query_calls().is_empty());
    assert!(!harness.dispatcher.is_in_multi_line_mode());
}

#[test]
fn test_ask_alone_starts_capture() {
    let mut harness = TestHarness::new();
    let result = harness.dispatcher.execute_command("ask");

    assert!(result.success);
    assert_eq!(result.output, "Multi-line ask mode (Ctrl-D to send)");
    assert_eq!(harness.dispatcher.multi_line_mode(), MultiLineMode::Ask);
    assert!(harness.nothing_ran());
}

#[test]
fn test_backtick_substitution_redispatches() {
    let shell = MockShell::new().respond("whoami", "alice\n", 0);
    let mut harness = TestHarness::with_shell(shell);

    let result = harness.dispatcher.execute_command("echo hello `whoami`");
    assert!(result.success);
    assert_eq!(harness.shell_calls(), vec!["whoami", "echo hello alice"]);
}

#[test]
fn test_substitution_feeds_prefix_routing() {
    let shell = MockShell::new().respond("cat expr", "&1 + 1", 0);
    let mut harness = TestHarness::with_shell(shell);

    harness.dispatcher.execute_command("`cat expr`");
    assert_eq!(harness.shell_calls(), vec!["cat expr"]);
    assert_eq!(harness.script_calls(), vec!["1 + 1"]);
}

#[test]
fn test_substitution_to_nothing_is_noop() {
    let shell = MockShell::new().respond("true", "", 0);
    let mut harness = TestHarness::with_shell(shell);

    let result = harness.dispatcher.execute_command("`true`");
    assert!(result.is_noop());
    assert_eq!(harness.shell_calls(), vec!["true"]);
}

#[test]
fn test_substitution_failure() {
    let shell = MockShell::new().fail_on("boom");
    let mut harness = TestHarness::with_shell(shell);

    let result = harness.dispatcher.execute_command("echo `boom`");
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.error.starts_with("Command substitution failed"));
    assert_eq!(harness.shell_calls(), vec!["boom"]);
}

#[test]
fn test_unmatched_backtick_is_left_alone() {
    let mut harness = TestHarness::new();
    harness.dispatcher.execute_command("echo `unterminated");
    assert_eq!(harness.shell_calls(), vec!["echo `unterminated"]);
}

#[test]
fn test_shell_exit_code_is_propagated() {
    let shell = MockShell::new().respond("false", "", 1).respond("grep x", "", 2);
    let mut harness = TestHarness::with_shell(shell);

    let result = harness.dispatcher.execute_command("false");
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.error.is_empty());

    let result = harness.dispatcher.execute_command("grep x");
    assert_eq!(result.exit_code, 2);
}

#[test]
fn test_shell_spawn_failure() {
    let shell = MockShell::new().fail_on("missing");
    let mut harness = TestHarness::with_shell(shell);

    let result = harness.dispatcher.execute_command("missing");
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(!result.error.is_empty());
}

#[test]
fn test_collaborator_failures_become_results() {
    let mut harness = TestHarness::with_unavailable_query();

    let result = harness.dispatcher.execute_command("?anyone there");
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.error, "service unavailable");

    let result = harness.dispatcher.execute_command("&throw new Error()");
    assert!(!result.success);
    assert_eq!(result.error, "Uncaught Error");
}

#[test]
fn test_direct_execution_bypasses_routing() {
    let mut harness = TestHarness::new();

    harness.dispatcher.execute_shell_command("help");
    harness.dispatcher.execute_javascript("?not a question");
    harness.dispatcher.execute_ask("&not code");

    assert_eq!(harness.shell_calls(), vec!["help"]);
    assert_eq!(harness.script_calls(), vec!["?not a question"]);
    assert_eq!(harness.query_calls(), vec!["&not code"]);
}

#[test]
fn test_aliases_are_not_expanded_by_dispatch() {
    let mut harness = TestHarness::with_aliases(&[("ll", "ls -la")]);

    harness.dispatcher.execute_command("ll");
    let expanded = harness.dispatcher.expand_alias("ll /tmp");
    harness.dispatcher.execute_command(&expanded);

    assert_eq!(harness.shell_calls(), vec!["ll", "ls -la /tmp"]);
}
