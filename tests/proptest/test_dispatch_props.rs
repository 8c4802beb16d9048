//! Property-based tests for dispatch routing
//!
//! Random input must never panic the dispatcher, and the routing rules must
//! hold for any payload.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cll::ConsoleMode;
use proptest::prelude::*;
use test_utils::TestHarness;

fn payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9+*/().]([a-zA-Z0-9+*/(). ]{0,30}[a-zA-Z0-9+*/().])?"
}

fn mode() -> impl Strategy<Value = ConsoleMode> {
    prop_oneof![
        Just(ConsoleMode::Shell),
        Just(ConsoleMode::JavaScript),
        Just(ConsoleMode::Ask),
    ]
}

proptest! {
    #[test]
    fn test_dispatch_never_panics(input in "\\PC{0,80}") {
        let mut harness = TestHarness::new();
        let result = harness.dispatcher.execute_command(&input);
        prop_assert_eq!(result.success, result.exit_code == 0);
    }

    #[test]
    fn test_blank_and_comment_lines_are_noops(
        padding in "[ \t\r\n]{0,6}",
        comment in "\\PC{0,40}",
        start in mode(),
    ) {
        let mut harness = TestHarness::new();
        harness.dispatcher.set_mode(start);

        prop_assert!(harness.dispatcher.execute_command(&padding).is_noop());
        let line = format!("{}#{}", padding, comment);
        prop_assert!(harness.dispatcher.execute_command(&line).is_noop());
        prop_assert!(harness.nothing_ran());
        prop_assert_eq!(harness.dispatcher.mode(), start);
    }

    #[test]
    fn test_one_shot_prefixes_reach_their_backend(code in payload(), start in mode()) {
        let mut harness = TestHarness::new();
        harness.dispatcher.set_mode(start);

        harness.dispatcher.execute_command(&format!("&{}", code));
        harness.dispatcher.execute_command(&format!("?{}", code));
        harness.dispatcher.execute_command(&format!("${}", code));

        prop_assert_eq!(harness.script_calls(), vec![code.clone()]);
        prop_assert_eq!(harness.query_calls(), vec![code.clone()]);
        prop_assert_eq!(harness.shell_calls(), vec![code]);
        prop_assert_eq!(harness.dispatcher.mode(), start);
    }

    #[test]
    fn test_persistent_mode_picks_backend(code in payload(), start in mode()) {
        let first = code.split_whitespace().next().unwrap_or_default().to_string();
        prop_assume!(!harness_reserved(&first));

        let mut harness = TestHarness::new();
        harness.dispatcher.set_mode(start);
        harness.dispatcher.execute_command(&code);

        let calls = match start {
            ConsoleMode::Shell => harness.shell_calls(),
            ConsoleMode::JavaScript => harness.script_calls(),
            ConsoleMode::Ask => harness.query_calls(),
        };
        prop_assert_eq!(calls, vec![code]);
    }

    #[test]
    fn test_captured_lines_are_joined_in_order(
        lines in prop::collection::vec("\\PC{0,20}", 0..8),
    ) {
        let mut harness = TestHarness::new();
        harness.dispatcher.execute_command("&");
        for line in &lines {
            harness.dispatcher.append_multi_line_input(line);
        }
        harness.dispatcher.execute_multi_line_input();

        let mut expected = String::new();
        for line in &lines {
            if !expected.is_empty() {
                expected.push('\n');
            }
            expected.push_str(line);
        }
        prop_assert_eq!(harness.script_calls(), vec![expected]);
        prop_assert!(!harness.dispatcher.is_in_multi_line_mode());
    }
}

/// Words that route somewhere other than the persistent mode
fn harness_reserved(word: &str) -> bool {
    let registry = cll::dispatch::BuiltinRegistry::new();
    registry.contains(word)
}
