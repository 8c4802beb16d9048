//! Query back-ends

use super::process::ProcessRunner;
use super::{QueryAnswer, QueryService};
use crate::platform::{FilesystemOps, Platform};
use std::time::Duration;

/// Sends each question to an external command found on `PATH`
///
/// The command is looked up on every call so installing it mid-session
/// works without a restart.
pub struct SubprocessQueryService {
    command: String,
    runner: ProcessRunner,
    filesystem: Box<dyn FilesystemOps>,
}

impl SubprocessQueryService {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            runner: ProcessRunner::with_timeout(timeout),
            filesystem: Platform::filesystem(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn not_found(&self) -> QueryAnswer {
        QueryAnswer {
            succeeded: false,
            answer: String::new(),
            error: format!(
                "Query backend '{}' not found. Ensure it is on your PATH.",
                self.command
            ),
        }
    }
}

impl QueryService for SubprocessQueryService {
    fn ask(&self, question: &str) -> QueryAnswer {
        let program = match self.filesystem.find_command(&self.command) {
            Ok(Some(path)) => path,
            Ok(None) => return self.not_found(),
            Err(e) => {
                warn!("Looking up query backend '{}' failed: {}", self.command, e);
                return self.not_found();
            }
        };

        debug!("Sending question to {}", program.display());
        match self.runner.run(&program, &[question]) {
            Ok(output) if output.success() => QueryAnswer {
                succeeded: true,
                answer: output.combined(),
                error: String::new(),
            },
            Ok(output) => {
                let error = if output.stderr.is_empty() {
                    output.stdout
                } else {
                    output.stderr
                };
                QueryAnswer {
                    succeeded: false,
                    answer: String::new(),
                    error,
                }
            }
            Err(e) => {
                warn!("Query backend failed: {}", e);
                QueryAnswer {
                    succeeded: false,
                    answer: String::new(),
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Rule-based responder used when no external backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalQueryService;

const SYNTAX_HINT: &str = "\
Input syntax:
  &<code> or φ<code>   run JavaScript once (& alone starts multi-line JavaScript)
  ?<question> or θ<q>  ask a question once (? alone switches to Ask mode)
  $<command>           run a shell command once ($ alone switches to Shell mode)
  ask                  start a multi-line question (Ctrl-D sends it)
  `command`            substitute the output of a shell command
Type 'help' for the builtin commands.
";

impl QueryService for LocalQueryService {
    fn ask(&self, question: &str) -> QueryAnswer {
        let lowered = question.to_lowercase();
        let wants_help = ["help", "syntax", "prefix", "how do i"]
            .iter()
            .any(|keyword| lowered.contains(keyword));

        let answer = if wants_help {
            SYNTAX_HINT.to_string()
        } else {
            format!(
                "// Ask mode (local responder): {}\n// Configure [ask] backend = \"subprocess\" to forward questions to a real service\n",
                question.trim()
            )
        };

        QueryAnswer {
            succeeded: true,
            answer,
            error: String::new(),
        }
    }
}
