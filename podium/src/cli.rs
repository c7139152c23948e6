use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.podium.toml):
  Create this file next to the results page to override defaults.

  [podium]
  input = \"index.html\"       # Page to process
  strict = false             # Exit 1 when a section marker is missing

  # Replace the built-in section list
  [[podium.sections]]
  name = \"20m Sprint\"
  start = '<h5 class=\"mb-3 text-center\">20m Sprint Results</h5>'
  end = '<h5 class=\"mb-3 text-center\">Gewandtheit Results</h5>'
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output the run report as raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (shows config and input details).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: show only the one-line summary.
    #[arg(long)]
    pub quiet: bool,
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "podium",
    version,
    about = "Stamp rank numbers into the result tables of a static results page",
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// HTML file to process in place.
    /// Defaults to the configured input, then index.html.
    pub file: Option<PathBuf>,

    /// Report what would change without writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Treat a missing section marker as a failure (exit code 1).
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (default: .podium.toml found next to FILE or above).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective section list and exit.
    #[arg(long)]
    pub list_sections: bool,

    /// Output options.
    #[command(flatten)]
    pub output: OutputOptions,
}
