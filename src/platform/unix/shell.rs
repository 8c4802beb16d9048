//! Unix shell operations

use crate::platform::traits::ShellOps;
use std::path::{Path, PathBuf};

const POSIX_SHELL: &str = "/bin/sh";

pub struct UnixShell;

impl UnixShell {
    pub fn new() -> Self {
        Self
    }
}

impl ShellOps for UnixShell {
    fn interpreter(&self) -> (PathBuf, Vec<String>) {
        // POSIX shell regardless of $SHELL
        (PathBuf::from(POSIX_SHELL), vec!["-c".to_string()])
    }

    fn is_available(&self) -> bool {
        Path::new(POSIX_SHELL).exists()
    }
}
