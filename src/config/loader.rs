//! Configuration File Loading
//!
//! Handles locating the configuration directory, loading and saving the main
//! configuration file in TOML or JSON, and seeding a fresh directory with
//! defaults.

use super::aliases::{serialize_aliases, AliasStore};
use super::Config;
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform configuration directory
pub const APP_DIR_NAME: &str = "cll";

/// Directory holding aliases shared between tools
pub const SHARED_DIR_NAME: &str = "shared";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CLL_CONFIG_DIR";

/// Alias file name, both in the app and the shared directory
pub const ALIASES_FILE_NAME: &str = "aliases";

/// Persisted history file name
pub const HISTORY_FILE_NAME: &str = "history";

/// Configuration file loader
pub struct ConfigLoader {
    /// Application configuration directory
    config_dir: PathBuf,
    /// Supported configuration file formats, in search order
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

impl ConfigLoader {
    /// Create a loader for the default configuration directory
    ///
    /// `CLL_CONFIG_DIR` wins over the platform directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_dir(Self::default_config_dir()?))
    }

    /// Create a loader rooted at an explicit directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Resolve the default configuration directory
    pub fn default_config_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let base = Platform::paths().config_dir()?;
        Ok(base.join(APP_DIR_NAME))
    }

    /// Load the configuration, falling back to defaults when no file exists
    pub fn load(&mut self) -> Result<Config> {
        let config = match self.find_and_load_config()? {
            Some((path, config)) => {
                debug!("Loaded configuration from {}", path.display());
                self.current_path = Some(path);
                config
            }
            None => {
                debug!(
                    "No configuration file in {}, using defaults",
                    self.config_dir.display()
                );
                Config::default()
            }
        };

        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to the current path or `config.toml`
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(|| self.config_file_path(ConfigFormat::Toml));

        self.save_to_path(config, &path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    ///
    /// The format follows the extension; anything but `.json` is TOML.
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::ConfigSaveFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let content = match super::get_config_format(path) {
            Some(ConfigFormat::Json) => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: ConfigFormat::Json.name().to_string(),
                    reason: e.to_string(),
                }
            })?,
            _ => toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: ConfigFormat::Toml.name().to_string(),
                reason: e.to_string(),
            })?,
        };

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Create the configuration directory and seed missing default files
    ///
    /// Existing files are never overwritten.
    pub fn initialize_config_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir).map_err(|e| Error::ConfigSaveFailed {
            path: self.config_dir.clone(),
            reason: e.to_string(),
        })?;

        let has_config = self
            .supported_formats
            .iter()
            .any(|format| self.config_file_path(*format).exists());
        if !has_config {
            let path = self.config_file_path(ConfigFormat::Toml);
            self.save_to_path(&Config::default(), &path)?;
            info!("Created default configuration at {}", path.display());
        }

        let aliases_path = self.aliases_path();
        if !aliases_path.exists() {
            fs::write(&aliases_path, serialize_aliases(&default_aliases())).map_err(|e| {
                Error::ConfigSaveFailed {
                    path: aliases_path.clone(),
                    reason: e.to_string(),
                }
            })?;
            info!("Created default aliases at {}", aliases_path.display());
        }

        Ok(())
    }

    /// Alias persistence bound to this loader's directories
    pub fn alias_store(&self) -> AliasStore {
        AliasStore::new(self.aliases_path(), self.shared_aliases_path())
    }

    /// Find and load the first configuration file present
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for format in &self.supported_formats {
            let config_path = self.config_file_path(*format);
            if config_path.exists() {
                let config = self.load_config_file(&config_path, *format)?;
                return Ok(Some((config_path, config)));
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: format.name().to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Validate configuration
    pub fn validate_config(config: &Config) -> Result<()> {
        if config.general.history_size == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "general.history_size".to_string(),
                reason: "History size must be greater than 0".to_string(),
            });
        }

        if config.general.history_size > 1_000_000 {
            return Err(Error::ConfigValidationFailed {
                field: "general.history_size".to_string(),
                reason: "History size cannot exceed 1,000,000".to_string(),
            });
        }

        if config.prompt.format.is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "prompt.format".to_string(),
                reason: "Prompt format cannot be empty".to_string(),
            });
        }

        if config.ask.command.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ask.command".to_string(),
                reason: "Query command cannot be empty".to_string(),
            });
        }

        // Timeout validation
        if config.ask.timeout_secs > 3600 {
            return Err(Error::ConfigValidationFailed {
                field: "ask.timeout_secs".to_string(),
                reason: "Query timeout cannot exceed 1 hour (3600 seconds)".to_string(),
            });
        }

        if config.script.timeout_secs > 3600 {
            return Err(Error::ConfigValidationFailed {
                field: "script.timeout_secs".to_string(),
                reason: "Script timeout cannot exceed 1 hour (3600 seconds)".to_string(),
            });
        }

        Ok(())
    }

    /// Application configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the main configuration file for a format
    pub fn config_file_path(&self, format: ConfigFormat) -> PathBuf {
        self.config_dir
            .join("config")
            .with_extension(format.extension())
    }

    /// Path of the application alias file
    pub fn aliases_path(&self) -> PathBuf {
        self.config_dir.join(ALIASES_FILE_NAME)
    }

    /// Path of the shared alias file, next to the application directory
    pub fn shared_aliases_path(&self) -> PathBuf {
        let base = self
            .config_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config_dir.clone());
        base.join(SHARED_DIR_NAME).join(ALIASES_FILE_NAME)
    }

    /// Path of the persisted command history
    pub fn history_path(&self) -> PathBuf {
        self.config_dir.join(HISTORY_FILE_NAME)
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }
}

/// Aliases written into a freshly initialized directory
pub fn default_aliases() -> BTreeMap<String, String> {
    [
        ("ll", "ls -la"),
        ("la", "ls -la"),
        ("...", "cd ../.."),
        ("cls", "clear"),
        ("q", "quit"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}
