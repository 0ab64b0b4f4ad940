// src/commands/mod.rs
//! Command handlers for the osrelease CLI

mod classify;
mod diagnose;
mod show;

pub use classify::cmd_classify;
pub use diagnose::cmd_diagnose;
pub use show::cmd_show;

use anyhow::{Context, Result};
use osrelease::{Config, OsReleaseFile};
use std::path::{Path, PathBuf};

/// Read an explicit file, or the first configured os-release path
fn read_os_release(file: Option<&Path>, config: &Config) -> Result<OsReleaseFile> {
    let paths: Vec<PathBuf> = match file {
        Some(file) => vec![file.to_path_buf()],
        None => config.source.paths.clone(),
    };
    OsReleaseFile::find(&paths).context("Unable to read os-release")
}
