//! Output formatters for duplicate scan results.
//!
//! This module provides different output formats for scan results:
//! - Text listing for human review
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::duplicates::DuplicateFinder;
//! use dupesweep::output::TextOutput;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let report = finder.scan(Path::new(".")).unwrap();
//! TextOutput::new(&report.index)
//!     .write_to(&mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod json;
pub mod text;

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::duplicates::{DuplicateFinder, ScanReport};

// Re-export main types
pub use json::JsonOutput;
pub use text::TextOutput;

/// Output format for report-only runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Scan `root` and write the duplicate listing without touching any file.
///
/// An unusable root is reported the same way deletion reports it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_duplicates<W: Write>(
    finder: &DuplicateFinder,
    root: &Path,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> io::Result<ScanReport> {
    let report = finder.scan_or_empty(root, out)?;
    match format {
        OutputFormat::Text => {
            TextOutput::new(&report.index)
                .with_color(color)
                .write_to(out)?;
        }
        OutputFormat::Json => JsonOutput::new(&report).write_to(out)?,
    }
    Ok(report)
}
