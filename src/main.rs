// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use osrelease::Config;
use tracing::debug;

/// Rendered by build.rs
const MAN_PAGE: &str = include_str!(concat!(env!("OUT_DIR"), "/man/osrelease.1"));

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging; stdout is reserved for output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let load_config = || -> Result<Config> {
        let config = Config::load(cli.config.as_deref())?;
        debug!("Searching os-release in {:?}", config.source.paths);
        Ok(config)
    };

    match cli.command {
        Commands::Show { file, json } => commands::cmd_show(file.as_deref(), json, &load_config()?),
        Commands::Classify { file, arch, json } => {
            commands::cmd_classify(file.as_deref(), arch.as_deref(), json, &load_config()?)
        }
        Commands::Diagnose { file } => commands::cmd_diagnose(file.as_deref(), &load_config()?),
        Commands::Man => {
            print!("{}", MAN_PAGE);
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "osrelease", &mut std::io::stdout());
            Ok(())
        }
    }
}
