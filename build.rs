// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: explicit os-release file
fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("PATH")
        .help("Read this file instead of the configured search paths")
}

/// Common argument: JSON output
fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(clap::ArgAction::SetTrue)
        .help("Print JSON")
}

fn build_cli() -> Command {
    Command::new("osrelease")
        .version(env!("CARGO_PKG_VERSION"))
        .author("osrelease Contributors")
        .about("Inspect and classify /etc/os-release")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file (default: /etc/osrelease/config.toml if present)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("show")
                .about("Show the parsed os-release attributes")
                .arg(file_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify the distribution and derive package manager and artifact names")
                .arg(file_arg())
                .arg(
                    Arg::new("arch")
                        .short('a')
                        .long("arch")
                        .help("Target architecture for artifact names (default: this host)"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("diagnose")
                .about("List lines that were skipped while parsing")
                .arg(file_arg()),
        )
        .subcommand(Command::new("man").about("Print the roff man page"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // `osrelease man` embeds this file, so it must exist even if rendering fails
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("Failed to create man directory");

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        buffer.clear();
    }

    let man_path = man_dir.join("osrelease.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");
}
