// src/classify.rs

//! Distribution classification
//!
//! Read-only predicates over an [`OsRelease`] that callers use to branch on
//! distribution-specific behavior. Family checks match `ID` exactly or look
//! for the family name anywhere in `ID_LIKE`, so derivatives we have never
//! heard of (Rocky, Alma, Pop!_OS, ...) are still recognized through their
//! lineage.

use crate::release::OsRelease;
use serde::Serialize;
use std::fmt;

pub const DEBIAN: &str = "debian";
pub const UBUNTU: &str = "ubuntu";
pub const FEDORA: &str = "fedora";
pub const RHEL: &str = "rhel";
pub const CENTOS: &str = "centos";

/// Distributions with dedicated handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KnownDistro {
    Debian,
    Ubuntu,
    Fedora,
    Rhel,
    Centos,
}

impl KnownDistro {
    /// The `ID` value for this distribution
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debian => DEBIAN,
            Self::Ubuntu => UBUNTU,
            Self::Fedora => FEDORA,
            Self::Rhel => RHEL,
            Self::Centos => CENTOS,
        }
    }

    /// Parse an exact `ID` value
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            DEBIAN => Some(Self::Debian),
            UBUNTU => Some(Self::Ubuntu),
            FEDORA => Some(Self::Fedora),
            RHEL => Some(Self::Rhel),
            CENTOS => Some(Self::Centos),
            _ => None,
        }
    }

    pub fn all() -> &'static [KnownDistro] {
        &[
            Self::Debian,
            Self::Ubuntu,
            Self::Fedora,
            Self::Rhel,
            Self::Centos,
        ]
    }
}

impl fmt::Display for KnownDistro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OsRelease {
    /// `ID` is debian, or `ID_LIKE` mentions debian
    pub fn is_debian_family(&self) -> bool {
        self.is_family(DEBIAN)
    }

    /// `ID` is fedora, or `ID_LIKE` mentions fedora
    pub fn is_fedora_family(&self) -> bool {
        self.is_family(FEDORA)
    }

    pub fn is_ubuntu(&self) -> bool {
        self.id() == UBUNTU
    }

    pub fn is_rhel(&self) -> bool {
        self.id() == RHEL
    }

    pub fn is_centos(&self) -> bool {
        self.id() == CENTOS
    }

    /// The known distribution matching `ID` exactly, if any
    pub fn known_distro(&self) -> Option<KnownDistro> {
        KnownDistro::parse(self.id())
    }

    // Substring match on ID_LIKE, not a token match
    fn is_family(&self, family: &str) -> bool {
        self.id() == family || self.id_like().contains(family)
    }
}

/// Snapshot of every predicate for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub known_distro: Option<KnownDistro>,
    pub debian_family: bool,
    pub fedora_family: bool,
    pub ubuntu: bool,
    pub rhel: bool,
    pub centos: bool,
}

impl Classification {
    pub fn of(release: &OsRelease) -> Self {
        Self {
            known_distro: release.known_distro(),
            debian_family: release.is_debian_family(),
            fedora_family: release.is_fedora_family(),
            ubuntu: release.is_ubuntu(),
            rhel: release.is_rhel(),
            centos: release.is_centos(),
        }
    }
}
