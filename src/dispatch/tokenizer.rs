//! Input normalization and whitespace tokenization
//!
//! There is no quote awareness: `echo "a b"` is three tokens.

/// Characters stripped from both ends of every input line
const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Strip leading and trailing spaces, tabs, CR and LF
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(&TRIM_CHARS[..])
}

/// ASCII whitespace that separates tokens; Unicode spaces stay inside a token
const TOKEN_SEPARATORS: [char; 6] = [' ', '\t', '\r', '\n', '\x0b', '\x0c'];

fn is_separator(c: char) -> bool {
    TOKEN_SEPARATORS.contains(&c)
}

/// Split on runs of whitespace, dropping empty tokens
pub fn split_command(input: &str) -> Vec<&str> {
    input.split(is_separator).filter(|t| !t.is_empty()).collect()
}

/// First whitespace-delimited token, if any
pub fn first_token(input: &str) -> Option<&str> {
    input.split(is_separator).find(|t| !t.is_empty())
}

/// Text following the first `count` tokens, leading whitespace removed
///
/// Interior spacing of the remainder is preserved verbatim.
pub fn rest_after_tokens(input: &str, count: usize) -> &str {
    let mut rest = input.trim_start_matches(is_separator);
    for _ in 0..count {
        let end = rest.find(is_separator).unwrap_or(rest.len());
        rest = rest[end..].trim_start_matches(is_separator);
    }
    rest
}
