// src/package_manager.rs

//! Package manager selection from an os-release record
//!
//! Hosts are provisioned with either the deb toolchain (apt) or the rpm
//! toolchain (yum). Detection goes by distribution family; IDs that the
//! family checks miss can be pinned through configured overrides. When
//! neither applies the caller has to probe the host (e.g. `which apt`).

use crate::classify::{CENTOS, RHEL};
use crate::release::OsRelease;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Package tooling family used on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PackageManager {
    /// dpkg/apt based
    Deb,
    /// rpm/yum based
    Rpm,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deb => "deb",
            Self::Rpm => "rpm",
        }
    }

    /// Front-end command used to install packages
    pub fn tool(&self) -> &'static str {
        match self {
            Self::Deb => "apt",
            Self::Rpm => "yum",
        }
    }

    /// Parse a format name or front-end command
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deb" | "apt" | "apt-get" | "dpkg" => Some(Self::Deb),
            "rpm" | "yum" | "dnf" => Some(Self::Rpm),
            _ => None,
        }
    }

    /// Detect the package manager from distribution lineage
    pub fn detect(release: &OsRelease) -> Option<Self> {
        if release.is_debian_family() {
            return Some(Self::Deb);
        }
        if release.is_fedora_family()
            || release.is_rhel()
            || release.is_centos()
            || release.id_like().contains(RHEL)
            || release.id_like().contains(CENTOS)
        {
            return Some(Self::Rpm);
        }
        None
    }
}

impl TryFrom<String> for PackageManager {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| {
            format!(
                "unknown package manager '{}' (expected deb, apt, rpm, yum or dnf)",
                value
            )
        })
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detection with per-ID overrides applied first
#[derive(Debug, Clone, Default)]
pub struct PackageManagerSelector {
    overrides: HashMap<String, PackageManager>,
}

impl PackageManagerSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector from an ID → package manager map
    pub fn from_overrides(overrides: HashMap<String, PackageManager>) -> Self {
        Self { overrides }
    }

    /// Pin a package manager for an exact `ID`
    pub fn with_override(mut self, id: impl Into<String>, manager: PackageManager) -> Self {
        self.overrides.insert(id.into(), manager);
        self
    }

    /// Select the package manager for a host
    pub fn select(&self, release: &OsRelease) -> Option<PackageManager> {
        if let Some(manager) = self.overrides.get(release.id()) {
            debug!("Using configured package manager {} for {}", manager, release.id());
            return Some(*manager);
        }

        let detected = PackageManager::detect(release);
        match detected {
            Some(manager) => debug!("Detected package manager {} for {}", manager, release.id()),
            None => debug!("No package manager known for '{}'", release.id()),
        }
        detected
    }
}
