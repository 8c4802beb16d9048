//! Blocking process execution
//!
//! Children are driven by a private current-thread tokio runtime so callers
//! stay synchronous while still getting `kill_on_drop` and timeouts.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Captured result of a finished child process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        combined.push_str(&self.stderr);
        combined
    }
}

/// Spawns a program and waits for it
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Kill the child when it runs longer than this
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// Runner without a time limit
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Runner that kills children after `limit` (zero means no limit)
    pub fn with_timeout(limit: Duration) -> Self {
        Self {
            timeout: (!limit.is_zero()).then_some(limit),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run `program` with `args` to completion
    pub fn run<P, S>(&self, program: P, args: &[S]) -> Result<ProcessOutput>
    where
        P: AsRef<OsStr>,
        S: AsRef<OsStr>,
    {
        let program = program.as_ref();
        let program_name = program.to_string_lossy().into_owned();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let mut command = Command::new(program);
            command.args(args).kill_on_drop(true);

            let output = match self.timeout {
                Some(limit) => timeout(limit, command.output()).await.map_err(|_| {
                    Error::CommandTimeout {
                        command: program_name.clone(),
                        duration: limit,
                    }
                })?,
                None => command.output().await,
            }
            .map_err(|e| Error::CommandSpawnFailed {
                command: program_name.clone(),
                reason: e.to_string(),
            })?;

            let exit_code = exit_code_of(output.status);
            debug!("{} exited with {}", program_name, exit_code);

            Ok::<_, Error>(ProcessOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code,
            })
        })
    }
}

/// Numeric exit code; signals map to 128 + signal on Unix
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
