//! Command Result
//!
//! The uniform outcome of every dispatch, whatever back-end handled it.

use std::time::Duration;

/// Outcome of dispatching one line or one multi-line block
///
/// `success` and `exit_code` are independent: a builtin can report
/// `success == false` with exit code 1 without any process having run, and a
/// shell command can succeed from the dispatcher's point of view while its
/// exit code is propagated unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Whether the command succeeded
    pub success: bool,
    /// Captured or generated output
    pub output: String,
    /// Error description (empty on success)
    pub error: String,
    /// Wall-clock time from dispatch entry to result construction
    pub execution_time: Duration,
    /// Process exit code, or 0/1 for builtins
    pub exit_code: i32,
}

impl CommandResult {
    /// The canonical no-op: success, no output, zero time
    pub fn noop() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    /// A successful informational result
    pub fn message(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            ..Default::default()
        }
    }

    /// A failed result with exit code 1
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            exit_code: 1,
            ..Default::default()
        }
    }

    /// Set the measured execution time
    pub fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = elapsed;
        self
    }

    /// Whether this is indistinguishable from [`CommandResult::noop`]
    pub fn is_noop(&self) -> bool {
        *self == Self::noop()
    }
}

/// Format an execution time for display
///
/// Sub-millisecond times are shown in microseconds, sub-second times in
/// milliseconds with one decimal, anything longer in seconds with two.
pub fn format_execution_time(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}
