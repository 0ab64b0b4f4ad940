// src/lib.rs

//! os-release parsing and distribution classification
//!
//! Reads the `/etc/os-release` family of files and answers the questions
//! provisioning code asks before touching a host: which distribution is
//! this, which family does it belong to, which package manager does it use,
//! and what are its offline artifacts called.
//!
//! # Architecture
//!
//! - Pure core: text in, immutable [`OsRelease`] out, never fails
//! - Fixed record: six well-known keys, everything else is dropped
//! - Classification: exact `ID` checks plus substring lineage checks on `ID_LIKE`
//! - I/O and configuration live outside the core ([`source`], [`config`])

pub mod classify;
pub mod config;
mod error;
pub mod layout;
pub mod package_manager;
pub mod parser;
pub mod release;
pub mod source;

pub use classify::{Classification, KnownDistro};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use layout::{host_arch, normalize_arch, ArtifactLayout};
pub use package_manager::{PackageManager, PackageManagerSelector};
pub use parser::{parse, parse_line, parse_reader, parse_with_report, split_lines, ParseReport, SkipReason, SkippedLine};
pub use release::OsRelease;
pub use source::{OsReleaseFile, DEFAULT_OS_RELEASE_PATHS};
