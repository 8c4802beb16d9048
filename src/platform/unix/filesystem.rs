//! Unix filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct UnixFilesystem;

impl UnixFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for UnixFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if let Ok(metadata) = path.metadata() {
            if metadata.is_file() {
                let permissions = metadata.permissions();
                return (permissions.mode() & 0o111) != 0;
            }
        }
        false
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        if command.is_empty() {
            return Ok(None);
        }

        // Explicit paths are checked as-is
        if command.contains('/') {
            let path = PathBuf::from(command);
            return Ok(self.is_executable(&path).then_some(path));
        }

        let Some(path_env) = env::var_os("PATH") else {
            return Ok(None);
        };

        for dir in env::split_paths(&path_env) {
            let candidate = dir.join(command);
            if self.is_executable(&candidate) {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }
}
