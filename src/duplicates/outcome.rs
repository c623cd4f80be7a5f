//! Per-file results of scanning and deletion.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single file during a scan or a deletion run.
///
/// Files that were hashed and grouped without incident are not recorded;
/// only removals and skips are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was removed.
    Deleted {
        /// Removed path
        path: PathBuf,
        /// Bytes reclaimed
        size: u64,
    },
    /// The file could not be read for fingerprinting and was left out of
    /// every group.
    SkippedUnreadable {
        /// Unreadable path
        path: PathBuf,
        /// Error message
        reason: String,
    },
    /// The file was a duplicate but could not be removed.
    SkippedUndeletable {
        /// Path that is still on disk
        path: PathBuf,
        /// Error message
        reason: String,
    },
}

impl FileOutcome {
    /// Path this outcome refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Deleted { path, .. }
            | Self::SkippedUnreadable { path, .. }
            | Self::SkippedUndeletable { path, .. } => path,
        }
    }

    /// Whether the file was removed.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// Whether the file was skipped for any reason.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        !self.is_deleted()
    }
}
