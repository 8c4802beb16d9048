//! OS shell back-end

use super::process::ProcessRunner;
use super::{ShellExecutor, ShellOutput};
use crate::error::{Error, Result};
use crate::platform::{Platform, ShellOps};

/// Runs command lines through `sh -c` (`cmd /C` on Windows)
///
/// stderr is redirected into stdout inside the command line so both streams
/// arrive interleaved in the order the child wrote them.
pub struct SystemShell {
    shell: Box<dyn ShellOps>,
    runner: ProcessRunner,
}

impl SystemShell {
    pub fn new() -> Self {
        Self {
            shell: Platform::shell(),
            runner: ProcessRunner::new(),
        }
    }

    /// Shell whose commands are killed after the runner's timeout
    pub fn with_runner(runner: ProcessRunner) -> Self {
        Self {
            shell: Platform::shell(),
            runner,
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor for SystemShell {
    fn execute(&self, command: &str) -> Result<ShellOutput> {
        if command.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }

        let (program, mut args) = self.shell.interpreter();
        args.push(self.shell.merge_stderr(command));

        let output = self.runner.run(&program, &args)?;
        Ok(ShellOutput {
            output: output.combined(),
            exit_code: output.exit_code,
        })
    }
}
