//! Execution back-ends
//!
//! The dispatcher never spawns anything itself. It talks to four narrow
//! collaborators: a shell executor, a script engine, a query service and an
//! alias persistence store. This module defines those seams and ships the
//! concrete implementations selected from configuration.

pub mod process;
pub mod query;
pub mod script;
pub mod shell;

use crate::config::{AskBackendKind, Config, ScriptEngineKind};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

pub use process::{ProcessOutput, ProcessRunner};
pub use query::{LocalQueryService, SubprocessQueryService};
pub use script::{NodeScriptEngine, SimulatedScriptEngine};
pub use shell::SystemShell;

/// Combined output of a shell command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellOutput {
    /// stdout and stderr interleaved in capture order
    pub output: String,
    pub exit_code: i32,
}

/// Runs a command line through the OS shell
pub trait ShellExecutor: Send {
    /// Run `command` and wait for it; `Err` only when nothing could be spawned
    fn execute(&self, command: &str) -> Result<ShellOutput>;
}

/// Outcome of evaluating a script
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptOutcome {
    pub succeeded: bool,
    /// Printed result, or the error text when evaluation failed
    pub output: String,
}

/// Evaluates JavaScript source
pub trait ScriptEngine: Send {
    fn run(&mut self, source: &str) -> ScriptOutcome;
}

/// Reply from the query service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryAnswer {
    pub succeeded: bool,
    pub answer: String,
    pub error: String,
}

/// Answers natural-language questions
pub trait QueryService: Send {
    fn ask(&self, question: &str) -> QueryAnswer;
}

/// Loads and stores the alias table
pub trait AliasPersistence: Send {
    fn load(&self) -> Result<BTreeMap<String, String>>;

    fn save(&self, aliases: &BTreeMap<String, String>) -> Result<()>;

    /// Directory reported by `config` and `reload`
    fn config_directory(&self) -> PathBuf;
}

/// The execution collaborators handed to a dispatcher
pub struct Backends {
    pub shell: Box<dyn ShellExecutor>,
    pub script: Box<dyn ScriptEngine>,
    pub query: Box<dyn QueryService>,
}

impl Backends {
    /// Bundle explicit collaborators
    pub fn new(
        shell: Box<dyn ShellExecutor>,
        script: Box<dyn ScriptEngine>,
        query: Box<dyn QueryService>,
    ) -> Self {
        Self {
            shell,
            script,
            query,
        }
    }

    /// Select the concrete back-ends named by the configuration
    pub fn from_config(config: &Config) -> Self {
        let script: Box<dyn ScriptEngine> = match config.script.engine {
            ScriptEngineKind::Simulated => Box::new(SimulatedScriptEngine),
            ScriptEngineKind::Node => Box::new(NodeScriptEngine::new(
                config.script.node_command.clone(),
                Duration::from_secs(config.script.timeout_secs),
            )),
        };

        let query: Box<dyn QueryService> = match config.ask.backend {
            AskBackendKind::Subprocess => Box::new(SubprocessQueryService::new(
                config.ask.command.clone(),
                Duration::from_secs(config.ask.timeout_secs),
            )),
            AskBackendKind::Local => Box::new(LocalQueryService),
        };

        info!(
            "Back-ends selected: script={:?}, query={:?}",
            config.script.engine, config.ask.backend
        );

        Self::new(Box::new(SystemShell::new()), script, query)
    }
}
