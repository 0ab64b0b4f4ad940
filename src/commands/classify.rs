// src/commands/classify.rs

//! `osrelease classify`

use super::read_os_release;
use anyhow::Result;
use osrelease::{host_arch, ArtifactLayout, Classification, Config, PackageManager};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    id: &'a str,
    id_like: &'a str,
    #[serde(flatten)]
    classification: Classification,
    package_manager: Option<PackageManager>,
    artifacts: Option<ArtifactNames>,
}

#[derive(Serialize)]
struct ArtifactNames {
    arch: String,
    iso: String,
    iso_path: String,
    package_bundle: Option<String>,
}

/// Classify the host distribution
pub fn cmd_classify(
    file: Option<&Path>,
    arch: Option<&str>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let source = read_os_release(file, config)?;
    info!("Classifying {}", source.path.display());
    let release = source.parse();
    let classification = Classification::of(&release);
    let package_manager = config.package_manager_selector().select(&release);

    let arch = arch.unwrap_or(host_arch());
    let artifacts = match ArtifactLayout::new(&release, arch) {
        Ok(layout) => Some(ArtifactNames {
            arch: layout.arch().to_string(),
            iso: layout.iso_file_name(),
            iso_path: layout.iso_path().display().to_string(),
            package_bundle: package_manager.map(|pm| layout.package_bundle_archive(pm)),
        }),
        Err(e) => {
            warn!("No artifact names for {}: {}", source.path.display(), e);
            None
        }
    };

    if json {
        let output = ClassifyOutput {
            id: release.id(),
            id_like: release.id_like(),
            classification,
            package_manager,
            artifacts,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let name = if release.pretty_name().is_empty() {
        release.id()
    } else {
        release.pretty_name()
    };
    println!("Distribution: {}", name);
    println!("  ID:             {}", release.id());
    println!("  ID_LIKE:        {}", release.id_like());
    println!("  Debian family:  {}", classification.debian_family);
    println!("  Fedora family:  {}", classification.fedora_family);
    println!("  Ubuntu:         {}", classification.ubuntu);
    println!("  RHEL:           {}", classification.rhel);
    println!("  CentOS:         {}", classification.centos);

    match package_manager {
        Some(pm) => println!("Package manager: {} ({})", pm, pm.tool()),
        None => println!("Package manager: unknown (probe the host for apt or yum)"),
    }

    if let Some(artifacts) = artifacts {
        println!("Artifacts ({}):", artifacts.arch);
        println!("  ISO:            {}", artifacts.iso_path);
        if let Some(bundle) = artifacts.package_bundle {
            println!("  Package bundle: {}", bundle);
        }
    }
    Ok(())
}
