use crate::report::{RunReport, SectionStatus};
use crate::section::SectionSpec;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print the full run summary: header count, per-section table, verdict line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        format!("Headers rewritten: {}", report.headers_rewritten).dimmed()
    )?;

    let mut table = create_table(vec!["Section", "Status", "Entries"]);
    for entry in &report.sections {
        let (status, color, entries) = match entry.status {
            SectionStatus::Ranked { fragments } => ("ranked", Color::Green, fragments.to_string()),
            SectionStatus::MissingStartMarker => {
                ("start marker missing", Color::Yellow, "-".to_owned())
            }
            SectionStatus::MissingEndMarker => {
                ("end marker missing", Color::Yellow, "-".to_owned())
            }
        };
        table.add_row(vec![
            Cell::new(&entry.name).add_attribute(Attribute::Bold),
            Cell::new(status).fg(color),
            Cell::new(entries),
        ]);
    }
    writeln!(writer, "{table}")?;

    let skipped = report.skipped_sections();
    if skipped == 0 {
        writeln!(
            writer,
            "{}",
            format!(
                "[OK] Added rank numbers to {} sections ({} entries)",
                report.sections.len(),
                report.total_fragments()
            )
            .green()
        )?;
    } else {
        writeln!(
            writer,
            "{}",
            format!(
                "[WARN] {skipped} of {} sections skipped (missing markers)",
                report.sections.len()
            )
            .yellow()
            .bold()
        )?;
    }
    Ok(())
}

/// Print a one-line summary for CI/CD mode.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary_quiet(writer: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "[SUMMARY] {} entries ranked in {} sections, {} skipped",
        report.total_fragments(),
        report.sections.len() - report.skipped_sections(),
        report.skipped_sections()
    )?;
    Ok(())
}

/// Print the effective section list in styled format.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_section_list(
    writer: &mut impl Write,
    sections: &[SectionSpec],
) -> std::io::Result<()> {
    writeln!(writer, "{}", "Configured sections".bold().underline())?;

    // Markers are long; skip dynamic arrangement so nothing wraps.
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Section", "Start marker", "End marker"]);
    for spec in sections {
        table.add_row(vec![
            Cell::new(&spec.name).add_attribute(Attribute::Bold),
            Cell::new(&spec.start).add_attribute(Attribute::Dim),
            Cell::new(&spec.end).add_attribute(Attribute::Dim),
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}
