//! Tool configuration parsing (locus.toml)
//!
//! Provides structures and parsing for the optional `locus.toml` file that
//! pre-seeds the resolver: search path, simulated builtin/frozen tables,
//! extension-library directories, and policy switches.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// `[resolver]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
    /// Directories (and archives) to search, in order.
    #[serde(default, rename = "search-path")]
    pub search_path: Vec<PathBuf>,

    /// Module names satisfied by the simulated builtin loader.
    #[serde(default)]
    pub builtins: Vec<String>,

    /// Module names satisfied by the simulated frozen loader.
    #[serde(default)]
    pub frozen: Vec<String>,

    /// Known extension-library directories.
    #[serde(default, rename = "ext-lib-dirs")]
    pub ext_lib_dirs: Vec<PathBuf>,

    /// Whether the distutils re-resolution workaround is applied.
    #[serde(default = "default_distutils_workaround", rename = "distutils-workaround")]
    pub distutils_workaround: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            search_path: Vec::new(),
            builtins: Vec::new(),
            frozen: Vec::new(),
            ext_lib_dirs: Vec::new(),
            distutils_workaround: default_distutils_workaround(),
        }
    }
}

fn default_distutils_workaround() -> bool {
    true
}

impl Config {
    /// Load a configuration file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load `locus.toml` from the current directory if present.
    pub fn load_default() -> Result<Option<Self>, ConfigError> {
        let path = Path::new("locus.toml");
        if !path.exists() {
            return Ok(None);
        }
        Config::load(path).map(Some)
    }
}
