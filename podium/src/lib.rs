//! Core library for the `podium` rank stamping tool.
//!
//! podium post-processes a static results page: it rewrites the pre-rendered
//! table headers to carry a RANK column, then stamps a sequential rank label
//! into every result card of each configured, marker-bounded table section.
//! The whole transform runs over one in-memory string; the page is read once
//! at start and written back once at the end.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the text rewriter: header rewriting and rank injection.
pub mod rewrite;

/// Module for locating marker-bounded sections of the document.
pub mod section;

/// Module defining the run-report data structures.
pub mod report;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for rich CLI output formatting with colored text and tables.
pub mod output;

/// Module defining the entry point logic shared by the binaries.
pub mod entry_point;

/// Module containing test utilities.
/// This helps in writing tests against realistic page markup.
pub mod test_utils;
