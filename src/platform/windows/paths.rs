//! Windows path operations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::path::PathBuf;

pub struct WindowsPaths;

impl WindowsPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for WindowsPaths {
    fn config_dir(&self) -> Result<PathBuf> {
        // AppData\Roaming
        dirs::config_dir().ok_or(Error::ConfigDirUnavailable)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        dirs::home_dir().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine home directory",
            ))
        })
    }
}
