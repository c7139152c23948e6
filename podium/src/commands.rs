//! CLI command execution: read the page, transform it, write it back, report.

use crate::output;
use crate::report::SectionReport;
use crate::rewrite;
use crate::section::SectionSpec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options controlling a processing run.
#[derive(Debug, Default, Clone)]
pub struct ProcessOptions {
    /// Report without writing the file back.
    pub dry_run: bool,
    /// Exit nonzero when a section marker is missing.
    pub strict: bool,
    /// Emit the run report as JSON instead of tables.
    pub json: bool,
    /// One-line summary only.
    pub quiet: bool,
    /// Extra diagnostics on stderr.
    pub verbose: bool,
}

/// Executes a processing run over one file and returns the process exit code.
///
/// The file is written back only after every in-memory transform has
/// succeeded, so a failure mid-run leaves the original untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn run_process<W: Write>(
    file: &Path,
    sections: &[SectionSpec],
    options: &ProcessOptions,
    writer: &mut W,
) -> Result<i32> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    if options.verbose {
        eprintln!(
            "[VERBOSE] Loaded {} bytes from {}",
            content.len(),
            file.display()
        );
        eprintln!("[VERBOSE] Processing {} sections", sections.len());
    }

    let chatty = !options.json && !options.quiet;
    if chatty {
        writeln!(writer, "Updating table headers and ranks in {}...", file.display())?;
    }

    let (updated, report) = rewrite::apply(&content, sections);
    warn_missing_markers(sections, &report.sections);

    if options.dry_run {
        if chatty {
            writeln!(writer, "{}", "[DRY RUN] No changes written.".cyan())?;
        }
    } else {
        fs::write(file, &updated)
            .with_context(|| format!("failed to write {}", file.display()))?;
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if options.quiet {
        output::print_summary_quiet(writer, &report)?;
    } else {
        output::print_summary(writer, &report)?;
    }

    if options.strict && report.skipped_sections() > 0 {
        return Ok(1);
    }
    Ok(0)
}

/// Prints the effective section list without touching any file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn run_list_sections<W: Write>(sections: &[SectionSpec], writer: &mut W) -> Result<()> {
    output::print_section_list(writer, sections)?;
    Ok(())
}

/// One warning per skipped section, naming the marker that was not found.
fn warn_missing_markers(sections: &[SectionSpec], entries: &[SectionReport]) {
    use crate::report::SectionStatus;

    for (spec, entry) in sections.iter().zip(entries) {
        match entry.status {
            SectionStatus::MissingStartMarker => eprintln!(
                "{} could not find start marker: {}",
                "Warning:".yellow().bold(),
                spec.start
            ),
            SectionStatus::MissingEndMarker => eprintln!(
                "{} could not find end marker: {}",
                "Warning:".yellow().bold(),
                spec.end
            ),
            SectionStatus::Ranked { .. } => {}
        }
    }
}
