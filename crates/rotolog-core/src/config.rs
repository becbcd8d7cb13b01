//! Logger configuration and config-file parsing
//!
//! Supports two configuration file formats for the driver:
//! - TOML (.toml)
//! - JSON (.json)

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::level::Verbosity;

/// Process-wide mutable logger configuration.
///
/// Setters never fail: invalid verbosity values coerce to `DEFAULT` and
/// negative sizes/counts are ignored. Each setter returns the effective
/// value after the call. Changes take effect on the next write.
#[derive(Debug, Clone)]
pub struct LogConfig {
    path: PathBuf,
    verbosity: Verbosity,
    max_size: u64,
    max_backups: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            verbosity: Verbosity::DEFAULT,
            max_size: DEFAULT_MAX_SIZE,
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base path of the active log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Rotation threshold in bytes
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Maximum number of retained rotated files
    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &Path {
        self.path = path.into();
        &self.path
    }

    /// Out-of-domain values silently become `DEFAULT`.
    pub fn set_verbosity(&mut self, raw: i64) -> Verbosity {
        self.verbosity = Verbosity::from_raw(raw);
        self.verbosity
    }

    /// Negative values are ignored and leave the threshold unchanged.
    pub fn set_max_size(&mut self, bytes: i64) -> u64 {
        if bytes >= 0 {
            self.max_size = bytes as u64;
        }
        self.max_size
    }

    /// Negative values are ignored and leave the count unchanged.
    pub fn set_max_backups(&mut self, count: i64) -> usize {
        if count >= 0 {
            self.max_backups = count as usize;
        }
        self.max_backups
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration file structure (rotolog.toml / rotolog.json)
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub path: Option<PathBuf>,
    pub verbosity: Option<i64>,
    pub max_size: Option<i64>,
    pub max_backups: Option<i64>,
}

impl ConfigFile {
    /// Load config from file, automatically detecting format from extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::config(format!(
                "Unsupported config file extension: {}. Expected .toml or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Look for a config file in `dir`. Absence is not an error.
    pub fn find_and_load(dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                let config = Self::load(&path)?;
                return Ok(Some((config, path)));
            }
        }
        Ok(None)
    }

    /// Apply file values on top of `config`, with the same coercion
    /// rules as the setters.
    pub fn apply(&self, config: &mut LogConfig) {
        if let Some(path) = &self.path {
            config.set_path(path.clone());
        }
        if let Some(v) = self.verbosity {
            config.set_verbosity(v);
        }
        if let Some(s) = self.max_size {
            config.set_max_size(s);
        }
        if let Some(b) = self.max_backups {
            config.set_max_backups(b);
        }
    }
}
