//! Build script for arbor-cli.
//!
//! Renders the man page into `OUT_DIR/man/arbor.1` with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .help("Tree document")
}

fn write_arg() -> Arg {
    Arg::new("write")
        .long("write")
        .action(ArgAction::SetTrue)
        .help("Rewrite FILE instead of printing the result")
}

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit JSON tree documents")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Read configuration from this file in addition to the discovered ones")
                .global(true)
                .env("ARBOR_CONFIG"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print a tree or subtree as JSON")
                .arg(file_arg())
                .arg(Arg::new("path").long("path").value_name("PATH")),
            Command::new("flatten")
                .about("List every node by its path")
                .arg(file_arg())
                .arg(Arg::new("path").long("path").value_name("PATH"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("put")
                .about("Set the value (and attributes) at a path, creating nodes as needed")
                .arg(file_arg())
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(Arg::new("value").value_name("VALUE").required(true))
                .arg(Arg::new("data").long("data").value_name("JSON"))
                .arg(write_arg()),
            Command::new("move")
                .about("Move the node at one path to another")
                .arg(file_arg())
                .arg(Arg::new("from").value_name("FROM").required(true))
                .arg(Arg::new("to").value_name("TO").required(true))
                .arg(write_arg()),
            Command::new("remove")
                .about("Detach the node at a path")
                .arg(file_arg())
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(write_arg()),
            Command::new("validate")
                .about("Check that a file is a well-formed tree document")
                .arg(file_arg()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true)),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("arbor.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
