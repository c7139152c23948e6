//! Run-report data model: per-section outcomes plus the header count.

use crate::section::MarkerError;
use serde::Serialize;

/// Outcome of processing one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    /// The section was located and its cards were ranked in document order.
    Ranked {
        /// Number of cards that received a rank label. Zero when every card
        /// already carried one.
        fragments: usize,
    },
    /// The start marker was absent; the section was left untouched.
    MissingStartMarker,
    /// The end marker was absent; the section was left untouched.
    MissingEndMarker,
}

impl SectionStatus {
    /// Whether the section was located at all.
    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        matches!(self, Self::Ranked { .. })
    }
}

impl From<&MarkerError> for SectionStatus {
    fn from(err: &MarkerError) -> Self {
        match err {
            MarkerError::StartNotFound(_) => Self::MissingStartMarker,
            MarkerError::EndNotFound(_) => Self::MissingEndMarker,
        }
    }
}

/// Per-section entry in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// Display name of the section.
    pub name: String,
    /// Outcome for this section.
    #[serde(flatten)]
    pub status: SectionStatus,
}

/// Summary of a full run over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of header blocks rewritten to the three-column form.
    pub headers_rewritten: usize,
    /// Per-section outcomes, in processing order.
    pub sections: Vec<SectionReport>,
}

impl RunReport {
    /// Total number of cards ranked across all sections.
    #[must_use]
    pub fn total_fragments(&self) -> usize {
        self.sections
            .iter()
            .map(|s| match s.status {
                SectionStatus::Ranked { fragments } => fragments,
                _ => 0,
            })
            .sum()
    }

    /// Number of sections skipped because a marker was missing.
    #[must_use]
    pub fn skipped_sections(&self) -> usize {
        self.sections.iter().filter(|s| !s.status.is_ranked()).count()
    }
}
