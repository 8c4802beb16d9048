//! JavaScript back-ends

use super::process::ProcessRunner;
use super::{ScriptEngine, ScriptOutcome};
use crate::error::Error;
use std::time::Duration;

/// Stands in when no JavaScript engine is available
///
/// Every run "succeeds" and reports the code it was given, clearly labeled
/// as a simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedScriptEngine;

impl ScriptEngine for SimulatedScriptEngine {
    fn run(&mut self, source: &str) -> ScriptOutcome {
        ScriptOutcome {
            succeeded: true,
            output: format!(
                "// JavaScript execution simulated (no engine available)\n// Code: {}\n",
                source
            ),
        }
    }
}

/// Evaluates JavaScript with `node -p`
#[derive(Debug, Clone)]
pub struct NodeScriptEngine {
    node_command: String,
    runner: ProcessRunner,
}

impl NodeScriptEngine {
    pub fn new(node_command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            node_command: node_command.into(),
            runner: ProcessRunner::with_timeout(timeout),
        }
    }
}

impl ScriptEngine for NodeScriptEngine {
    fn run(&mut self, source: &str) -> ScriptOutcome {
        match self.runner.run(&self.node_command, &["-p", source]) {
            Ok(output) if output.success() => ScriptOutcome {
                succeeded: true,
                output: output.stdout,
            },
            Ok(output) => ScriptOutcome {
                succeeded: false,
                output: output.combined(),
            },
            Err(Error::CommandSpawnFailed { command, reason }) => {
                warn!("JavaScript engine '{}' could not start: {}", command, reason);
                ScriptOutcome {
                    succeeded: false,
                    output: format!(
                        "JavaScript engine '{}' is not available: {}",
                        command, reason
                    ),
                }
            }
            Err(e) => {
                warn!("JavaScript evaluation failed: {}", e);
                ScriptOutcome {
                    succeeded: false,
                    output: e.to_string(),
                }
            }
        }
    }
}
