// src/config.rs

//! Configuration file handling
//!
//! # Example config.toml
//!
//! ```toml
//! [source]
//! # Checked in order, first existing file wins
//! paths = ["/etc/os-release", "/usr/lib/os-release"]
//!
//! # Pin the package manager for IDs that family detection does not cover
//! [package_manager.overrides]
//! kylin = "rpm"
//! deepin = "apt"
//! ```

use crate::error::{Error, Result};
use crate::package_manager::{PackageManager, PackageManagerSelector};
use crate::source::default_search_paths;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/osrelease/config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
    pub package_manager: PackageManagerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// os-release search order
    pub paths: Vec<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            paths: default_search_paths(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerConfig {
    /// Exact `ID` → package manager
    pub overrides: HashMap<String, PackageManager>,
}

impl Config {
    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("No config at {}, using defaults", DEFAULT_CONFIG_PATH);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::parse(&content).map_err(|e| match e {
            Error::ConfigError(msg) => Error::ConfigError(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))?;

        if config.source.paths.is_empty() {
            return Err(Error::ConfigError(
                "source.paths must list at least one file".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn package_manager_selector(&self) -> PackageManagerSelector {
        PackageManagerSelector::from_overrides(self.package_manager.overrides.clone())
    }
}
