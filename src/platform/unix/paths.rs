//! Unix path operations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::path::PathBuf;

pub struct UnixPaths;

impl UnixPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for UnixPaths {
    fn config_dir(&self) -> Result<PathBuf> {
        // Use XDG_CONFIG_HOME if set, otherwise ~/.config
        if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            Ok(PathBuf::from(xdg_config))
        } else if let Some(home) = dirs::home_dir() {
            Ok(home.join(".config"))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir)
        } else {
            Err(Error::ConfigDirUnavailable)
        }
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
