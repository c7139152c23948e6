//! The text rewriter: header rewriting and per-section rank injection.
//!
//! Both operations are pure string transformations. Nothing outside a located
//! section range is touched, and a second pass over already-rewritten markup
//! is a no-op: rewritten headers no longer start with the `Name` label, and
//! ranked cards no longer open their flex row with the name span.

use crate::constants::{card_re, header_re, HIGHLIGHT_CLASSES};
use crate::report::{RunReport, SectionReport, SectionStatus};
use crate::section::{self, SectionSpec};

/// Rewrites every two-column header block to the three-column form
/// `RANK | NAME | RESULT`, upper-casing the labels and preserving a
/// parenthesized unit annotation (upper-cased) when present.
///
/// Returns the rewritten document and the number of headers rewritten.
pub fn rewrite_headers(document: &str) -> (String, usize) {
    let mut count = 0usize;
    let out = header_re().replace_all(document, |caps: &regex::Captures<'_>| {
        count += 1;
        let prefix = &caps["prefix"];
        let result_label = caps.name("unit").map_or_else(
            || "RESULT".to_owned(),
            |unit| format!("RESULT ({})", unit.as_str().to_uppercase()),
        );
        format!(
            r#"{prefix}<span class="sprint-card-label">RANK</span>
                                    <span class="sprint-card-label">NAME</span>
                                    <span class="sprint-card-label">{result_label}</span>"#
        )
    });
    (out.into_owned(), count)
}

/// Adds rank labels to every unranked card inside the section bounded by the
/// spec's markers. Cards are numbered `1.`, `2.`, … in document order, with
/// the counter local to this section.
///
/// When either marker is absent the document is returned unchanged and the
/// status names which marker was missing; text outside the located range is
/// copied byte-for-byte in every case.
pub fn add_ranks_to_section(document: &str, spec: &SectionSpec) -> (String, SectionStatus) {
    let range = match section::locate(document, &spec.start, &spec.end) {
        Ok(range) => range,
        Err(err) => return (document.to_owned(), SectionStatus::from(&err)),
    };

    let mut rank = 1usize;
    let rewritten = card_re().replace_all(&document[range.clone()], |caps: &regex::Captures<'_>| {
        let classes = &caps["classes"];
        let pair = &caps["pair"];

        // Player cards with highlighted spans get the matching rank styling.
        let rank_span = if classes.contains("player-card") && pair.contains(HIGHLIGHT_CLASSES) {
            format!(r#"<span class="sprint-card-rank {HIGHLIGHT_CLASSES}">{rank}.</span>"#)
        } else {
            format!(r#"<span class="sprint-card-rank">{rank}.</span>"#)
        };

        let card = format!(
            r#"<div class="sprint-card {classes}">
                                <div class="d-flex justify-content-between align-items-center">
                                    {rank_span}
                                    {pair}
                                </div>
                            </div>"#
        );
        rank += 1;
        card
    });
    let fragments = rank - 1;

    let mut out = String::with_capacity(document.len() + fragments * 64);
    out.push_str(&document[..range.start]);
    out.push_str(&rewritten);
    out.push_str(&document[range.end..]);
    (out, SectionStatus::Ranked { fragments })
}

/// Applies the full transform: headers once over the whole document, then
/// rank injection once per section in list order, threading the document
/// through sequentially.
pub fn apply(document: &str, sections: &[SectionSpec]) -> (String, RunReport) {
    let (mut doc, headers_rewritten) = rewrite_headers(document);
    let mut report = RunReport {
        headers_rewritten,
        sections: Vec::with_capacity(sections.len()),
    };
    for spec in sections {
        let (next, status) = add_ranks_to_section(&doc, spec);
        doc = next;
        report.sections.push(SectionReport {
            name: spec.name.clone(),
            status,
        });
    }
    (doc, report)
}
