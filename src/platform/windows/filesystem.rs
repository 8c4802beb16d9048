//! Windows filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::path::{Path, PathBuf};

pub struct WindowsFilesystem;

impl WindowsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for WindowsFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                matches!(
                    ext.to_lowercase().as_str(),
                    "exe" | "bat" | "cmd" | "ps1" | "com"
                )
            })
            .unwrap_or(false)
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        if command.is_empty() {
            return Ok(None);
        }

        let Some(path_env) = env::var_os("PATH") else {
            return Ok(None);
        };

        let executable_extensions = [".exe", ".bat", ".cmd", ".ps1", ".com"];
        for dir in env::split_paths(&path_env) {
            for ext in &executable_extensions {
                let candidate = dir.join(format!("{}{}", command, ext));
                if self.is_executable(&candidate) {
                    return Ok(Some(candidate));
                }
            }
        }

        Ok(None)
    }
}
