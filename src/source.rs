// src/source.rs

//! Locating and reading os-release files
//!
//! The parser only ever sees text. This module is the thin layer that finds
//! the file on the local filesystem, following the freedesktop convention of
//! `/etc/os-release` with `/usr/lib/os-release` as fallback.

use crate::error::{Error, Result};
use crate::parser::{self, ParseReport};
use crate::release::OsRelease;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Search order used when nothing else is configured
pub const DEFAULT_OS_RELEASE_PATHS: &[&str] = &["/etc/os-release", "/usr/lib/os-release"];

pub fn default_search_paths() -> Vec<PathBuf> {
    DEFAULT_OS_RELEASE_PATHS.iter().map(PathBuf::from).collect()
}

/// Raw os-release content and where it came from
#[derive(Debug, Clone)]
pub struct OsReleaseFile {
    pub path: PathBuf,
    pub content: String,
}

impl OsReleaseFile {
    /// Read one file
    ///
    /// Content is decoded lossily; no encoding validation is done.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Read the first existing file from a search list
    pub fn find(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.exists() {
                info!("Using os-release file {}", path.display());
                return Self::read(path);
            }
            debug!("{} does not exist", path.display());
        }

        let searched: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        Err(Error::NotFoundError(searched.join(", ")))
    }

    pub fn parse(&self) -> OsRelease {
        parser::parse(&self.content)
    }

    pub fn parse_with_report(&self) -> ParseReport {
        parser::parse_with_report(&self.content)
    }
}
