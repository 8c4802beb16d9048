//! Dispatcher state
//!
//! A dispatcher is either idle in a persistent mode or capturing lines for
//! one deferred execution. The persistent mode survives a capture.

use crate::models::{CaptureKind, ConsoleMode, MultiLineMode};

/// Lines accumulated during a multi-line capture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiLineBuffer {
    contents: String,
    lines: usize,
}

impl MultiLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line, separated by a newline once the text is non-empty
    pub fn push(&mut self, line: &str) {
        if !self.contents.is_empty() {
            self.contents.push('\n');
        }
        self.contents.push_str(line);
        self.lines += 1;
    }

    pub fn contents(&self) -> String {
        self.contents.clone()
    }

    /// Number of appended lines
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    pub fn clear(&mut self) {
        self.contents.clear();
        self.lines = 0;
    }
}

/// The single tagged state of a dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    Idle {
        mode: ConsoleMode,
    },
    Capturing {
        mode: ConsoleMode,
        kind: CaptureKind,
        buffer: MultiLineBuffer,
    },
}

impl DispatchState {
    pub fn new(mode: ConsoleMode) -> Self {
        DispatchState::Idle { mode }
    }

    /// Persistent mode, whether or not a capture is running
    pub fn mode(&self) -> ConsoleMode {
        match self {
            DispatchState::Idle { mode } | DispatchState::Capturing { mode, .. } => *mode,
        }
    }

    pub fn set_mode(&mut self, new_mode: ConsoleMode) {
        match self {
            DispatchState::Idle { mode } | DispatchState::Capturing { mode, .. } => {
                *mode = new_mode
            }
        }
    }

    /// Capture view derived from the state
    pub fn multi_line_mode(&self) -> MultiLineMode {
        match self {
            DispatchState::Idle { .. } => MultiLineMode::None,
            DispatchState::Capturing { kind, .. } => MultiLineMode::from(Some(*kind)),
        }
    }

    /// Begin a fresh capture, discarding any running one
    pub fn start_capture(&mut self, kind: CaptureKind) {
        *self = DispatchState::Capturing {
            mode: self.mode(),
            kind,
            buffer: MultiLineBuffer::new(),
        };
    }

    /// Drop any capture and return to idle
    pub fn end_capture(&mut self) {
        *self = DispatchState::Idle { mode: self.mode() };
    }

    /// Append to the running capture; false when idle
    pub fn append(&mut self, line: &str) -> bool {
        match self {
            DispatchState::Capturing { buffer, .. } => {
                buffer.push(line);
                true
            }
            DispatchState::Idle { .. } => false,
        }
    }

    /// End the capture, handing back what was captured
    ///
    /// Returns `None` and leaves the state alone when idle.
    pub fn take_capture(&mut self) -> Option<(CaptureKind, String)> {
        match self {
            DispatchState::Idle { .. } => None,
            DispatchState::Capturing { kind, buffer, .. } => {
                let taken = (*kind, buffer.contents());
                self.end_capture();
                Some(taken)
            }
        }
    }

    /// Captured text so far, if capturing
    pub fn buffer(&self) -> Option<&MultiLineBuffer> {
        match self {
            DispatchState::Capturing { buffer, .. } => Some(buffer),
            DispatchState::Idle { .. } => None,
        }
    }
}

impl Default for DispatchState {
    fn default() -> Self {
        Self::new(ConsoleMode::default())
    }
}
