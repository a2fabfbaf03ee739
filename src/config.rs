//! Configuration loaded from `~/.config/dartdoc-search/config.toml`.
//!
//! Every key is optional. A missing file yields [`Config::default`]; command
//! line flags are applied on top by the caller.

use crate::error::Result;
use crate::search::WeightTable;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Number of suggestions shown when neither the request nor the config says otherwise.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Index payload loaded at startup.
    pub index_path: Option<PathBuf>,
    /// Maximum suggestions rendered per query.
    pub display_limit: usize,
    pub weights: WeightTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            weights: WeightTable::default(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dartdoc-search").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(index_path) = config.index_path.take() {
            config.index_path = Some(PathBuf::from(
                expand_tilde(&index_path.to_string_lossy()).as_ref(),
            ));
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
