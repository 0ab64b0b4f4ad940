// src/commands/show.rs

//! `osrelease show`

use super::read_os_release;
use anyhow::Result;
use osrelease::Config;
use std::path::Path;
use tracing::warn;

/// Print the six os-release attributes
pub fn cmd_show(file: Option<&Path>, json: bool, config: &Config) -> Result<()> {
    let source = read_os_release(file, config)?;
    let release = source.parse();

    if !release.is_identified() {
        warn!("{} contains no os-release attributes", source.path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&release)?);
        return Ok(());
    }

    for (key, value) in release.entries() {
        println!("{}={}", key, value);
    }
    Ok(())
}
