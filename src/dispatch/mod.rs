//! Command dispatch and mode state machine
//!
//! Every line goes through the same pipeline:
//!
//! 1. trim; empty lines and `#` comments are no-ops
//! 2. exact mode keywords (`js`, `javascript`, `shell`, `sh`, `claude`)
//! 3. backtick substitution, re-dispatching the rewritten line
//! 4. one-shot prefixes `&`/`φ` (JavaScript), `?`/`θ` (ask), `$` (shell)
//! 5. the `ask` keyword
//! 6. builtin verbs
//! 7. the persistent mode's back-end
//!
//! Aliases are not part of the pipeline; callers expand them explicitly with
//! [`Dispatcher::expand_alias`] before dispatching.

pub mod alias;
pub mod builtins;
pub mod state;
pub mod substitution;
pub mod tokenizer;

use crate::backends::{AliasPersistence, Backends};
use crate::config::parse_alias_assignment;
use crate::models::{CaptureKind, CommandResult, ConsoleMode, MultiLineMode};
use std::path::PathBuf;
use std::time::Instant;

pub use alias::AliasTable;
pub use builtins::{Builtin, BuiltinRegistry};
pub use state::{DispatchState, MultiLineBuffer};
pub use substitution::substitute_backticks;
pub use tokenizer::{first_token, rest_after_tokens, split_command, trim_input};

/// How many times a line may be rewritten by substitution and re-dispatched
pub const MAX_SUBSTITUTION_DEPTH: usize = 8;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const JS_CAPTURE_STARTED: &str = "Multi-line JavaScript mode (Ctrl-D to execute)";
const ASK_CAPTURE_STARTED: &str = "Multi-line ask mode (Ctrl-D to send)";
const ALIAS_USAGE: &str = "Usage: config alias name=value";
const CONFIG_USAGE: &str = "Usage: config [alias name=value]";
const ASK_USAGE: &str = "Usage: ask <question>";

const SPECIAL_SYNTAX: &str = "\
  &<code>       - Run JavaScript once (e.g. &Math.sqrt(16))
  &             - Start multi-line JavaScript (Ctrl-D to execute)
  φ<code>       - Same as &<code>
  ?<question>   - Ask a question once
  ?             - Switch to Ask mode
  θ<question>   - Same as ?<question>
  $<command>    - Run a shell command once
  $             - Switch to Shell mode
  ask <text>    - Ask a question once
  ask           - Start a multi-line question (Ctrl-D to send)
  `command`     - Substitute the output of a shell command
";

/// Routes input to the shell, script engine or query service
pub struct Dispatcher {
    state: DispatchState,
    aliases: AliasTable,
    builtins: BuiltinRegistry,
    backends: Backends,
    persistence: Box<dyn AliasPersistence>,
}

impl Dispatcher {
    /// Create a dispatcher in Shell mode, loading aliases from `persistence`
    pub fn new(backends: Backends, persistence: Box<dyn AliasPersistence>) -> Self {
        let mut aliases = AliasTable::new();
        match persistence.load() {
            Ok(loaded) => {
                debug!("Loaded {} aliases", loaded.len());
                aliases.merge(loaded);
            }
            Err(e) => warn!("Failed to load aliases: {}", e),
        }

        Self {
            state: DispatchState::default(),
            aliases,
            builtins: BuiltinRegistry::new(),
            backends,
            persistence,
        }
    }

    /// Start in `mode` instead of Shell
    pub fn with_mode(mut self, mode: ConsoleMode) -> Self {
        self.state.set_mode(mode);
        self
    }

    // === Dispatch ===

    /// Dispatch one line of input
    ///
    /// Never panics and never fails: every outcome, including usage errors
    /// and back-end failures, is a [`CommandResult`].
    pub fn execute_command(&mut self, input: &str) -> CommandResult {
        self.dispatch(input, Instant::now(), 0)
    }

    fn dispatch(&mut self, input: &str, started: Instant, depth: usize) -> CommandResult {
        let trimmed = trim_input(input);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return CommandResult::noop();
        }

        if let Some(mode) = mode_keyword(trimmed) {
            debug!("Mode keyword '{}'", trimmed);
            return self.switch_mode(mode).with_execution_time(started.elapsed());
        }

        if depth < MAX_SUBSTITUTION_DEPTH {
            match substitute_backticks(trimmed, self.backends.shell.as_ref()) {
                Ok(processed) if processed != trimmed => {
                    if processed.is_empty() {
                        return CommandResult::noop();
                    }
                    debug!("Substitution rewrote line to '{}'", processed);
                    return self.dispatch(&processed, started, depth + 1);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Command substitution failed: {}", e);
                    return CommandResult::failure(format!("Command substitution failed: {}", e))
                        .with_execution_time(started.elapsed());
                }
            }
        } else {
            debug!("Substitution depth limit reached, dispatching '{}' as is", trimmed);
        }

        self.route(trimmed).with_execution_time(started.elapsed())
    }

    /// Prefix, keyword, builtin and fallback routing of a trimmed line
    fn route(&mut self, trimmed: &str) -> CommandResult {
        if let Some(code) = trimmed.strip_prefix('&').or_else(|| trimmed.strip_prefix('φ')) {
            return if code.is_empty() {
                self.start_multi_line_mode(MultiLineMode::JavaScript);
                CommandResult::message(JS_CAPTURE_STARTED)
            } else {
                debug!("One-shot JavaScript");
                self.run_script(code)
            };
        }

        if let Some(question) = trimmed.strip_prefix('?').or_else(|| trimmed.strip_prefix('θ')) {
            return if question.is_empty() {
                self.switch_mode(ConsoleMode::Ask)
            } else {
                debug!("One-shot question");
                self.run_query(question)
            };
        }

        if let Some(command) = trimmed.strip_prefix('$') {
            return if command.is_empty() {
                self.switch_mode(ConsoleMode::Shell)
            } else {
                debug!("One-shot shell command");
                self.run_shell(command)
            };
        }

        if first_token(trimmed) == Some("ask") {
            let question = rest_after_tokens(trimmed, 1);
            return if question.is_empty() {
                self.start_multi_line_mode(MultiLineMode::Ask);
                CommandResult::message(ASK_CAPTURE_STARTED)
            } else {
                self.run_query(question)
            };
        }

        if self.is_builtin_command(trimmed) {
            return self.run_builtin(trimmed);
        }

        match self.state.mode() {
            ConsoleMode::Shell => self.run_shell(trimmed),
            ConsoleMode::JavaScript => self.run_script(trimmed),
            ConsoleMode::Ask => self.run_query(trimmed),
        }
    }

    // === Direct execution ===

    /// Run JavaScript, bypassing routing
    pub fn execute_javascript(&mut self, code: &str) -> CommandResult {
        let started = Instant::now();
        self.run_script(code).with_execution_time(started.elapsed())
    }

    /// Ask a question, bypassing routing
    pub fn execute_ask(&mut self, question: &str) -> CommandResult {
        let started = Instant::now();
        self.run_query(question).with_execution_time(started.elapsed())
    }

    /// Run a shell command, bypassing routing and substitution
    pub fn execute_shell_command(&mut self, command: &str) -> CommandResult {
        let started = Instant::now();
        self.run_shell(command).with_execution_time(started.elapsed())
    }

    fn run_shell(&mut self, command: &str) -> CommandResult {
        match self.backends.shell.execute(command) {
            Ok(out) => CommandResult {
                success: out.exit_code == 0,
                output: out.output,
                exit_code: out.exit_code,
                ..Default::default()
            },
            Err(e) => {
                warn!("Shell command failed to run: {}", e);
                CommandResult::failure(e.to_string())
            }
        }
    }

    fn run_script(&mut self, code: &str) -> CommandResult {
        let outcome = self.backends.script.run(code);
        if outcome.succeeded {
            CommandResult::message(outcome.output)
        } else {
            CommandResult::failure(outcome.output)
        }
    }

    fn run_query(&mut self, question: &str) -> CommandResult {
        let answer = self.backends.query.ask(question);
        if answer.succeeded {
            CommandResult::message(answer.answer)
        } else {
            CommandResult {
                output: answer.answer,
                ..CommandResult::failure(answer.error)
            }
        }
    }

    // === Modes ===

    pub fn mode(&self) -> ConsoleMode {
        self.state.mode()
    }

    pub fn set_mode(&mut self, mode: ConsoleMode) {
        self.state.set_mode(mode);
    }

    fn switch_mode(&mut self, mode: ConsoleMode) -> CommandResult {
        self.set_mode(mode);
        CommandResult::message(format!("Switched to {} mode", mode))
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    // === Multi-line capture ===

    /// Begin capturing lines; `MultiLineMode::None` ends any capture
    pub fn start_multi_line_mode(&mut self, mode: MultiLineMode) {
        match mode.capture_kind() {
            Some(kind) => self.state.start_capture(kind),
            None => self.state.end_capture(),
        }
    }

    /// Abandon the capture without executing it
    pub fn end_multi_line_mode(&mut self) {
        self.state.end_capture();
    }

    /// Append one line to the running capture
    pub fn append_multi_line_input(&mut self, line: &str) {
        if !self.state.append(line) {
            debug!("Ignoring multi-line input outside a capture");
        }
    }

    /// Execute the captured block and return to idle
    pub fn execute_multi_line_input(&mut self) -> CommandResult {
        let started = Instant::now();
        let result = match self.state.take_capture() {
            Some((CaptureKind::JavaScript, source)) => self.run_script(&source),
            Some((CaptureKind::Ask, question)) => self.run_query(&question),
            None => CommandResult::failure("Not in multi-line mode"),
        };
        result.with_execution_time(started.elapsed())
    }

    pub fn multi_line_mode(&self) -> MultiLineMode {
        self.state.multi_line_mode()
    }

    pub fn is_in_multi_line_mode(&self) -> bool {
        self.multi_line_mode() != MultiLineMode::None
    }

    /// Text captured so far
    pub fn multi_line_buffer(&self) -> Option<String> {
        self.state.buffer().map(MultiLineBuffer::contents)
    }

    // === Builtins ===

    /// Whether the first token is a builtin verb
    pub fn is_builtin_command(&self, command: &str) -> bool {
        first_token(command).is_some_and(|verb| self.builtins.contains(verb))
    }

    /// Run a builtin directly
    pub fn execute_builtin_command(&mut self, command: &str) -> CommandResult {
        let started = Instant::now();
        self.run_builtin(trim_input(command))
            .with_execution_time(started.elapsed())
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    fn run_builtin(&mut self, command: &str) -> CommandResult {
        let words = split_command(command);
        let Some(&verb) = words.first() else {
            return CommandResult::noop();
        };

        let Some(builtin) = self.builtins.lookup(verb) else {
            return CommandResult::failure(format!("Unknown command: {}", verb));
        };
        debug!("Builtin {:?}", builtin);

        match builtin {
            Builtin::Help => CommandResult::message(self.help_text()),
            Builtin::Quit | Builtin::Exit => CommandResult::message("Exiting..."),
            Builtin::Clear => CommandResult::message(CLEAR_SCREEN),
            Builtin::Js | Builtin::JavaScript | Builtin::Shell | Builtin::Sh => {
                if words.len() > 1 {
                    return CommandResult::failure(format!("Usage: {}", verb));
                }
                let mode = match builtin {
                    Builtin::Js | Builtin::JavaScript => ConsoleMode::JavaScript,
                    _ => ConsoleMode::Shell,
                };
                self.switch_mode(mode)
            }
            Builtin::Ask | Builtin::Claude => {
                if words.len() < 2 {
                    return CommandResult::failure(ASK_USAGE);
                }
                self.run_query(&words[1..].join(" "))
            }
            Builtin::Config => self.run_config(command, &words),
            Builtin::Reload => self.reload(),
        }
    }

    fn run_config(&mut self, command: &str, words: &[&str]) -> CommandResult {
        match words {
            [_] => CommandResult::message(self.config_summary()),
            [_, "alias", ..] => {
                if words.len() < 3 {
                    return CommandResult::failure(ALIAS_USAGE);
                }
                match parse_alias_assignment(rest_after_tokens(command, 2)) {
                    Ok((name, value)) => {
                        let output = format!("Alias set: {} = '{}'", name, value);
                        self.set_alias(name, value);
                        self.save_aliases();
                        CommandResult::message(output)
                    }
                    Err(e) => {
                        debug!("Rejected alias assignment: {}", e);
                        CommandResult::failure(ALIAS_USAGE)
                    }
                }
            }
            _ => CommandResult::failure(CONFIG_USAGE),
        }
    }

    fn reload(&mut self) -> CommandResult {
        let dir = self.config_directory();
        match self.persistence.load() {
            Ok(loaded) => {
                info!("Reloaded {} aliases from {}", loaded.len(), dir.display());
                self.aliases.merge(loaded);
                CommandResult::message(format!("Configuration reloaded from {}", dir.display()))
            }
            Err(e) => {
                warn!("Failed to reload aliases: {}", e);
                CommandResult::failure(format!("Failed to reload configuration: {}", e))
            }
        }
    }

    fn help_text(&self) -> String {
        let mut text = String::from("Available commands:\n");
        for (name, description) in self.builtins.entries() {
            text.push_str(&format!("  {} - {}\n", name, description));
        }
        text.push_str("\nSpecial syntax:\n");
        text.push_str(SPECIAL_SYNTAX);
        text.push_str(&format!("\nCurrent mode: {}", self.mode()));
        text
    }

    fn config_summary(&self) -> String {
        format!(
            "Configuration directory: {}\n\
             Configuration files:\n  \
             config.toml - Main configuration\n  \
             aliases - Command aliases\n\
             \nUse 'reload' to reload configuration from files\n",
            self.config_directory().display()
        )
    }

    // === Aliases ===

    /// Register or replace an alias (not persisted)
    pub fn set_alias(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.aliases.set(name, value);
    }

    /// Expand the first token of `command` if it is an alias
    pub fn expand_alias(&self, command: &str) -> String {
        self.aliases.expand(command)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Directory the alias persistence reports
    pub fn config_directory(&self) -> PathBuf {
        self.persistence.config_directory()
    }

    fn save_aliases(&self) {
        if let Err(e) = self.persistence.save(self.aliases.as_map()) {
            warn!("Failed to save aliases: {}", e);
        }
    }
}

/// Exact words that only switch persistent mode
fn mode_keyword(trimmed: &str) -> Option<ConsoleMode> {
    match trimmed {
        "js" | "javascript" => Some(ConsoleMode::JavaScript),
        "shell" | "sh" => Some(ConsoleMode::Shell),
        "claude" => Some(ConsoleMode::Ask),
        _ => None,
    }
}
