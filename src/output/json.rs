//! JSON output formatter for duplicate scan results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "fingerprint": "abc123...",
//!       "size": 1024,
//!       "original": "/a/1.txt",
//!       "duplicates": ["/b/1.txt"]
//!     }
//!   ],
//!   "duplicate_groups": 1,
//!   "duplicate_files": 1,
//!   "files_scanned": 3,
//!   "reclaimable_bytes": 1024,
//!   "skipped_unreadable": []
//! }
//! ```

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, FileOutcome, ScanReport};

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// BLAKE3 fingerprint (64 hex characters)
    pub fingerprint: String,
    /// File size in bytes
    pub size: u64,
    /// The copy deletion would keep
    pub original: PathBuf,
    /// The copies deletion would remove
    pub duplicates: Vec<PathBuf>,
}

impl From<&DuplicateGroup> for JsonDuplicateGroup {
    fn from(group: &DuplicateGroup) -> Self {
        Self {
            fingerprint: group.fingerprint.to_string(),
            size: group.size,
            original: group.original().clone(),
            duplicates: group.duplicates().to_vec(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Duplicate groups in first-seen order
    pub groups: Vec<JsonDuplicateGroup>,
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Number of removable copies across all groups
    pub duplicate_files: usize,
    /// Number of files fingerprinted
    pub files_scanned: usize,
    /// Bytes that removing every duplicate would reclaim
    pub reclaimable_bytes: u64,
    /// Files that could not be read
    pub skipped_unreadable: Vec<FileOutcome>,
}

impl JsonOutput {
    /// Build the JSON view of a scan.
    #[must_use]
    pub fn new(report: &ScanReport) -> Self {
        let groups = report.duplicate_groups();
        Self {
            duplicate_groups: groups.len(),
            duplicate_files: groups.iter().map(|g| g.duplicates().len()).sum(),
            files_scanned: report.files_scanned,
            reclaimable_bytes: groups.iter().map(DuplicateGroup::wasted_space).sum(),
            groups: groups.iter().map(JsonDuplicateGroup::from).collect(),
            skipped_unreadable: report.skipped.clone(),
        }
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)
    }
}
