// src/layout.rs

//! Per-release artifact naming
//!
//! Offline provisioning ships one repository ISO and one package bundle per
//! distribution release and architecture. Their names are derived from `ID`
//! and `VERSION_ID`:
//!
//! - ISO: `repository/{arch}/{ID}/{VERSION_ID}/{ID}-{VERSION_ID}-{arch}.iso`
//! - Bundle: `{ID}-{VERSION_ID}-{arch}-debs` or `...-rpms`, shipped as `.tar.gz`

use crate::error::Result;
use crate::package_manager::PackageManager;
use crate::release::OsRelease;
use std::path::PathBuf;

/// Map a Rust target architecture to the name used in artifact paths
///
/// Unknown architectures are returned unchanged.
pub fn normalize_arch(arch: &str) -> &str {
    match arch {
        "x86_64" | "amd64" => "amd64",
        "aarch64" | "arm64" => "arm64",
        other => other,
    }
}

/// Architecture of the running host, normalized
pub fn host_arch() -> &'static str {
    normalize_arch(std::env::consts::ARCH)
}

/// Artifact names for one release on one architecture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout<'a> {
    id: &'a str,
    version_id: &'a str,
    arch: &'a str,
}

impl<'a> ArtifactLayout<'a> {
    /// Fails if the record has no `ID` or `VERSION_ID`
    pub fn new(release: &'a OsRelease, arch: &'a str) -> Result<Self> {
        release.ensure_identified()?;
        Ok(Self {
            id: release.id(),
            version_id: release.version_id(),
            arch: normalize_arch(arch),
        })
    }

    pub fn arch(&self) -> &str {
        self.arch
    }

    /// e.g. `ubuntu-20.04-amd64.iso`
    pub fn iso_file_name(&self) -> String {
        format!("{}-{}-{}.iso", self.id, self.version_id, self.arch)
    }

    /// Directory holding the ISO, relative to the work directory
    pub fn repository_dir(&self) -> PathBuf {
        PathBuf::from("repository")
            .join(self.arch)
            .join(self.id)
            .join(self.version_id)
    }

    pub fn iso_path(&self) -> PathBuf {
        self.repository_dir().join(self.iso_file_name())
    }

    /// e.g. `centos-7-amd64-rpms`
    pub fn package_bundle_name(&self, manager: PackageManager) -> String {
        let suffix = match manager {
            PackageManager::Deb => "debs",
            PackageManager::Rpm => "rpms",
        };
        format!("{}-{}-{}-{}", self.id, self.version_id, self.arch, suffix)
    }

    pub fn package_bundle_archive(&self, manager: PackageManager) -> String {
        format!("{}.tar.gz", self.package_bundle_name(manager))
    }
}
