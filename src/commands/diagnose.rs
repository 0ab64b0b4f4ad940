// src/commands/diagnose.rs

//! `osrelease diagnose`

use super::read_os_release;
use anyhow::Result;
use osrelease::Config;
use std::path::Path;

/// Report lines the parser ignored
pub fn cmd_diagnose(file: Option<&Path>, config: &Config) -> Result<()> {
    let source = read_os_release(file, config)?;
    let report = source.parse_with_report();
    let lines: Vec<&str> = osrelease::split_lines(&source.content).collect();

    println!("{}", source.path.display());
    println!("  Lines:     {}", lines.len());
    println!("  Skipped:   {}", report.skipped.len());
    println!("  Malformed: {}", report.malformed().count());

    for skipped in report.malformed() {
        let text = lines.get(skipped.line_number - 1).copied().unwrap_or_default();
        println!("  line {}: {} ({})", skipped.line_number, text, skipped.reason);
    }

    if !report.release.is_identified() {
        println!("No os-release attributes found.");
    } else if report.malformed().next().is_none() {
        println!("No malformed lines.");
    }
    Ok(())
}
