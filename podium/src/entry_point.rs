//! Shared entry point: argument parsing, config discovery, dispatch.

use crate::cli::Cli;
use crate::commands::{self, ProcessOptions};
use crate::config::Config;
use crate::constants::DEFAULT_INPUT;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Run podium with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or written, or if an
/// explicitly named config file is unusable.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run podium with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or written, or if an
/// explicitly named config file is unusable.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["podium".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    // Config discovery starts from the input file's directory when a file is
    // given, otherwise from the current directory.
    let config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => cli
            .file
            .as_deref()
            .map_or_else(Config::load, Config::load_from_path),
    };

    let file: PathBuf = cli
        .file
        .clone()
        .or_else(|| config.podium.input.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let sections = config.effective_sections();

    if cli.output.verbose {
        eprintln!("[VERBOSE] podium v{}", env!("CARGO_PKG_VERSION"));
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config loaded from {}", path.display());
        }
        eprintln!("[VERBOSE] Input file: {}", file.display());
    }

    if cli.list_sections {
        commands::run_list_sections(&sections, writer)?;
        return Ok(0);
    }

    if !file.exists() {
        eprintln!("Error: The file '{}' does not exist.", file.display());
        return Ok(1);
    }

    let options = ProcessOptions {
        dry_run: cli.dry_run,
        strict: cli.strict || config.podium.strict.unwrap_or(false),
        json: cli.output.json,
        quiet: cli.output.quiet,
        verbose: cli.output.verbose,
    };
    commands::run_process(&file, &sections, &options, writer)
}
