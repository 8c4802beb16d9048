//! Alias Files
//!
//! Aliases live in flat `name=value` files: one in the application directory
//! and an optional shared one read first so the application file wins.

use crate::backends::AliasPersistence;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

const ALIASES_HEADER: &str = "# cll aliases\n# Format: alias_name=command\n";

/// Malformed `name=value` assignment
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AliasSyntaxError {
    #[error("missing '=' in alias assignment '{0}'")]
    MissingEquals(String),

    #[error("alias name cannot be empty")]
    EmptyName,
}

/// Parse an assignment such as `ll=ls -la` or `greet="echo hi"`
///
/// The name is everything before the first `=`; a value wrapped in double
/// quotes on both ends has them stripped.
pub fn parse_alias_assignment(
    text: &str,
) -> std::result::Result<(String, String), AliasSyntaxError> {
    let text = text.trim();
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| AliasSyntaxError::MissingEquals(text.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AliasSyntaxError::EmptyName);
    }

    let value = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    };

    Ok((name.to_string(), value.to_string()))
}

/// Parse the contents of an alias file
///
/// Blank lines, `#` comments and lines without `=` are skipped; later
/// definitions of a name replace earlier ones.
pub fn parse_aliases(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Render aliases in file form, header first, sorted by name
pub fn serialize_aliases(aliases: &BTreeMap<String, String>) -> String {
    let mut content = String::from(ALIASES_HEADER);
    for (name, value) in aliases {
        content.push_str(name);
        content.push('=');
        content.push_str(value);
        content.push('\n');
    }
    content
}

/// File-backed alias persistence
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
    shared_path: Option<PathBuf>,
}

impl AliasStore {
    /// Store reading `shared_path` before `path`
    pub fn new(path: impl Into<PathBuf>, shared_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            shared_path: Some(shared_path.into()),
        }
    }

    /// Store with no shared file
    pub fn without_shared(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            shared_path: None,
        }
    }

    /// Application alias file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<Option<BTreeMap<String, String>>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(parse_aliases(&content))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

impl AliasPersistence for AliasStore {
    fn load(&self) -> Result<BTreeMap<String, String>> {
        let mut aliases = BTreeMap::new();

        if let Some(shared) = &self.shared_path {
            if let Some(shared_aliases) = Self::read_file(shared)? {
                debug!(
                    "Loaded {} shared aliases from {}",
                    shared_aliases.len(),
                    shared.display()
                );
                aliases.extend(shared_aliases);
            }
        }

        if let Some(own) = Self::read_file(&self.path)? {
            debug!("Loaded {} aliases from {}", own.len(), self.path.display());
            aliases.extend(own);
        }

        Ok(aliases)
    }

    fn save(&self, aliases: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serialize_aliases(aliases)).map_err(|e| Error::ConfigSaveFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn config_directory(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}
