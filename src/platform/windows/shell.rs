//! Windows shell operations

use crate::platform::traits::ShellOps;
use std::path::PathBuf;

pub struct WindowsShell;

impl WindowsShell {
    pub fn new() -> Self {
        Self
    }

    fn cmd_path() -> PathBuf {
        std::env::var_os("ComSpec")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Windows\System32\cmd.exe"))
    }
}

impl ShellOps for WindowsShell {
    fn interpreter(&self) -> (PathBuf, Vec<String>) {
        (Self::cmd_path(), vec!["/C".to_string()])
    }

    fn is_available(&self) -> bool {
        Self::cmd_path().exists()
    }
}
