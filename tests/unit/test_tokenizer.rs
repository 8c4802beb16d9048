//! Unit Tests for Input Tokenization
//!
//! Trimming, whitespace splitting and remainder extraction used by routing
//! and the builtins.

use cll::dispatch::{first_token, rest_after_tokens, split_command, trim_input};

#[test]
fn test_trim_strips_line_endings() {
    assert_eq!(trim_input("  ls -la\r\n"), "ls -la");
    assert_eq!(trim_input("\t\tpwd\t"), "pwd");
    assert_eq!(trim_input(" \r\n\t "), "");
}

#[test]
fn test_trim_keeps_interior_whitespace() {
    assert_eq!(trim_input("  echo  a\tb  "), "echo  a\tb");
}

#[test]
fn test_split_drops_empty_tokens() {
    assert_eq!(split_command("  git   commit  -m "), vec!["git", "commit", "-m"]);
    assert!(split_command("   ").is_empty());
}

#[test]
fn test_split_is_not_quote_aware() {
    assert_eq!(
        split_command(r#"echo "hello world""#),
        vec!["echo", "\"hello", "world\""]
    );
}

#[test]
fn test_split_ignores_non_ascii_whitespace() {
    assert_eq!(split_command("ask\u{a0}x"), vec!["ask\u{a0}x"]);
    assert_eq!(split_command("ls\u{2003}-la /tmp"), vec!["ls\u{2003}-la", "/tmp"]);
    assert_eq!(first_token("ask\u{a0}x"), Some("ask\u{a0}x"));
}

#[test]
fn test_first_token() {
    assert_eq!(first_token("  config alias x=y"), Some("config"));
    assert_eq!(first_token("help"), Some("help"));
    assert_eq!(first_token(""), None);
}

#[test]
fn test_rest_after_tokens() {
    assert_eq!(rest_after_tokens("ask   what is  this", 1), "what is  this");
    assert_eq!(
        rest_after_tokens("config alias greet=\"echo  hi\"", 2),
        "greet=\"echo  hi\""
    );
    assert_eq!(rest_after_tokens("ask", 1), "");
    assert_eq!(rest_after_tokens("one two", 5), "");
    assert_eq!(rest_after_tokens("unchanged", 0), "unchanged");
}
