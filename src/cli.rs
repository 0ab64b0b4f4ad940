// src/cli.rs
//! CLI definitions for osrelease
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osrelease")]
#[command(author = "osrelease Contributors")]
#[command(version)]
#[command(about = "Inspect and classify /etc/os-release", long_about = None)]
pub struct Cli {
    /// Configuration file (default: /etc/osrelease/config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the parsed os-release attributes
    Show {
        /// Read this file instead of the configured search paths
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print JSON instead of KEY=value lines
        #[arg(long)]
        json: bool,
    },

    /// Classify the distribution and derive package manager and artifact names
    Classify {
        /// Read this file instead of the configured search paths
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Target architecture for artifact names (default: this host)
        #[arg(short, long)]
        arch: Option<String>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List lines that were skipped while parsing
    Diagnose {
        /// Read this file instead of the configured search paths
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the roff man page
    Man,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
