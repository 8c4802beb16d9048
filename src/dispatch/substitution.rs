//! Backtick command substitution

use crate::backends::ShellExecutor;
use crate::error::Result;

/// Replace every complete `` `command` `` span with the command's output
///
/// Spans are processed left to right. One trailing newline is removed from
/// each output and the scan resumes after the spliced text, so output is
/// never itself scanned for backticks. An unmatched backtick ends the scan and
/// leaves the rest of the input as it was. Empty spans splice nothing without
/// running the shell.
pub fn substitute_backticks(input: &str, shell: &dyn ShellExecutor) -> Result<String> {
    let mut processed = input.to_string();
    let mut cursor = 0;

    while let Some(offset) = processed[cursor..].find('`') {
        let start = cursor + offset;
        let Some(len) = processed[start + 1..].find('`') else {
            break;
        };
        let end = start + 1 + len;

        let command = &processed[start + 1..end];
        let mut output = if command.trim().is_empty() {
            String::new()
        } else {
            debug!("Substituting output of `{}`", command);
            shell.execute(command)?.output
        };
        if output.ends_with('\n') {
            output.pop();
        }

        processed.replace_range(start..=end, &output);
        cursor = start + output.len();
    }

    Ok(processed)
}
