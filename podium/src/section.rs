//! Marker-bounded range location over the document.
//!
//! Sections are delimited by literal marker substrings, not patterns. The
//! located range starts at the end of the first start-marker occurrence and
//! runs to the first end-marker occurrence at or after that position.

use serde::Deserialize;
use std::ops::Range;

/// A named table section: a display name plus two literal marker substrings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SectionSpec {
    /// Display name used in diagnostics and the summary.
    pub name: String,
    /// Literal substring that opens the section.
    pub start: String,
    /// Literal substring that closes the section.
    pub end: String,
}

/// Errors related to locating a section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    /// The start marker does not occur in the document.
    #[error("start marker not found: {0}")]
    StartNotFound(String),
    /// The end marker does not occur at or after the start marker.
    #[error("end marker not found: {0}")]
    EndNotFound(String),
}

/// Locates the half-open byte range `[start, end)` bounded by the given
/// markers. First occurrences only; the end-marker search begins at the end
/// of the start marker.
///
/// # Errors
///
/// Returns a [`MarkerError`] naming the missing marker when either literal
/// is absent.
pub fn locate(
    document: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<Range<usize>, MarkerError> {
    let at = document
        .find(start_marker)
        .ok_or_else(|| MarkerError::StartNotFound(start_marker.to_owned()))?;
    let start = at + start_marker.len();
    let len = document[start..]
        .find(end_marker)
        .ok_or_else(|| MarkerError::EndNotFound(end_marker.to_owned()))?;
    Ok(start..start + len)
}
