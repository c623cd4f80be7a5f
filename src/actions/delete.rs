//! Duplicate removal.
//!
//! # Overview
//!
//! [`delete_duplicates`] rescans a root, asks for confirmation, keeps the
//! first path of every duplicate group and removes the rest. Removal is
//! permanent by default; [`DeleteConfig::trash`] moves files to the system
//! trash instead.
//!
//! A removal that fails is recorded as [`FileOutcome::SkippedUndeletable`]
//! and the run carries on. Only successful removals are printed and counted.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::actions::confirm::AssumeYes;
//! use dupesweep::actions::delete::{delete_duplicates, DeleteConfig};
//! use dupesweep::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let summary = delete_duplicates(
//!     &finder,
//!     Path::new("/home/user/Downloads"),
//!     &mut AssumeYes,
//!     &DeleteConfig::default(),
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! println!("{}", summary.summary());
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::actions::confirm::Confirm;
use crate::duplicates::{DuplicateFinder, DuplicateGroup, FileOutcome};

/// Prompt shown before any file is removed.
pub const CONFIRM_PROMPT: &str = "\nDelete duplicates? (yes/no): ";

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Trash operation failed.
    #[error("trash operation failed for {path}: {message}")]
    TrashFailed { path: PathBuf, message: String },

    /// Permanent delete operation failed.
    #[error("permanent delete failed for {path}: {message}")]
    PermanentDeleteFailed { path: PathBuf, message: String },

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    fn from_metadata(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::TrashFailed { path: p, .. }
            | Self::PermanentDeleteFailed { path: p, .. }
            | Self::Io { path: p, .. } => p,
        }
    }
}

/// Configuration for deletion operations.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfig {
    /// Move files to the system trash instead of removing them.
    pub use_trash: bool,
}

impl DeleteConfig {
    /// Create config for permanent deletion.
    #[must_use]
    pub fn permanent() -> Self {
        Self { use_trash: false }
    }

    /// Create config for trash deletion.
    #[must_use]
    pub fn trash() -> Self {
        Self { use_trash: true }
    }
}

/// How a deletion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionStatus {
    /// No duplicate groups were found; nothing was asked.
    NothingToDelete,
    /// Confirmation was declined; nothing was touched.
    Cancelled,
    /// Every duplicate was attempted.
    Completed,
}

/// Results of one deletion run.
#[derive(Debug, Clone)]
pub struct DeletionSummary {
    /// How the run ended
    pub status: DeletionStatus,
    /// Number of duplicate groups found by the scan
    pub groups: usize,
    /// Per-file outcomes in processing order
    pub outcomes: Vec<FileOutcome>,
    /// Files the scan could not read
    pub unreadable: Vec<FileOutcome>,
}

impl DeletionSummary {
    fn new(status: DeletionStatus, groups: usize, unreadable: Vec<FileOutcome>) -> Self {
        Self {
            status,
            groups,
            outcomes: Vec::new(),
            unreadable,
        }
    }

    /// Number of files removed.
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_deleted()).count()
    }

    /// Number of duplicates that could not be removed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Total bytes reclaimed.
    #[must_use]
    pub fn bytes_freed(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Deleted { size, .. } => *size,
                _ => 0,
            })
            .sum()
    }

    /// Whether any file was skipped during the scan or the removal.
    #[must_use]
    pub fn had_failures(&self) -> bool {
        self.failed_count() > 0 || !self.unreadable.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.status {
            DeletionStatus::NothingToDelete => "No duplicates found".to_string(),
            DeletionStatus::Cancelled => format!("Cancelled with {} group(s) found", self.groups),
            DeletionStatus::Completed if self.failed_count() == 0 => format!(
                "Deleted {} file(s), freed {}",
                self.deleted_count(),
                bytesize::ByteSize(self.bytes_freed())
            ),
            DeletionStatus::Completed => format!(
                "Deleted {} file(s), {} failed, freed {}",
                self.deleted_count(),
                self.failed_count(),
                bytesize::ByteSize(self.bytes_freed())
            ),
        }
    }
}

/// Move a single file to the system trash, returning its size.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if the file cannot be inspected
/// - `TrashFailed` if the trash operation fails
pub fn delete_to_trash(path: &Path) -> Result<u64, DeleteError> {
    let size = fs::symlink_metadata(path)
        .map_err(|e| DeleteError::from_metadata(path, e))?
        .len();

    trash::delete(path).map_err(|e| DeleteError::TrashFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::info!("Moved to trash: {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Permanently remove a single file, returning its size.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if the file cannot be inspected
/// - `PermanentDeleteFailed` if the removal fails
pub fn permanent_delete(path: &Path) -> Result<u64, DeleteError> {
    let size = fs::symlink_metadata(path)
        .map_err(|e| DeleteError::from_metadata(path, e))?
        .len();

    fs::remove_file(path).map_err(|e| DeleteError::PermanentDeleteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::info!("Permanently deleted: {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Remove every duplicate of `group`, keeping its original.
///
/// Successful removals are printed as `Deleted: <path>`.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub fn remove_group<W: Write>(
    group: &DuplicateGroup,
    config: &DeleteConfig,
    out: &mut W,
) -> io::Result<Vec<FileOutcome>> {
    log::debug!(
        "Keeping {} ({})",
        group.original().display(),
        group.fingerprint.short()
    );

    let mut outcomes = Vec::with_capacity(group.duplicates().len());
    for path in group.duplicates() {
        let result = if config.use_trash {
            delete_to_trash(path)
        } else {
            permanent_delete(path)
        };

        match result {
            Ok(size) => {
                writeln!(out, "Deleted: {}", path.display())?;
                outcomes.push(FileOutcome::Deleted {
                    path: path.clone(),
                    size,
                });
            }
            Err(e) => {
                log::debug!("Leaving {} in place: {}", path.display(), e);
                outcomes.push(FileOutcome::SkippedUndeletable {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(outcomes)
}

/// Rescan `root` and remove duplicate copies after confirmation.
///
/// Prints `No duplicate files to delete` without prompting when there is
/// nothing to do, `Operation cancelled` when `confirm` declines, and one
/// `Deleted: <path>` line per removal followed by the total otherwise.
///
/// # Errors
///
/// Fails if writing to `out` fails or if `confirm` cannot obtain an answer.
pub fn delete_duplicates<C, W>(
    finder: &DuplicateFinder,
    root: &Path,
    confirm: &mut C,
    config: &DeleteConfig,
    out: &mut W,
) -> io::Result<DeletionSummary>
where
    C: Confirm + ?Sized,
    W: Write,
{
    let report = finder.scan_or_empty(root, out)?;
    let groups = report.duplicate_groups();

    if groups.is_empty() {
        writeln!(out, "No duplicate files to delete")?;
        return Ok(DeletionSummary::new(
            DeletionStatus::NothingToDelete,
            0,
            report.skipped,
        ));
    }

    out.flush()?;
    if !confirm.confirm(CONFIRM_PROMPT)? {
        writeln!(out, "Operation cancelled")?;
        return Ok(DeletionSummary::new(
            DeletionStatus::Cancelled,
            groups.len(),
            report.skipped,
        ));
    }

    let mut summary =
        DeletionSummary::new(DeletionStatus::Completed, groups.len(), report.skipped);
    for group in &groups {
        summary.outcomes.extend(remove_group(group, config, out)?);
    }

    writeln!(out, "\nTotal Deleted Files: {}", summary.deleted_count())?;
    log::info!("{}", summary.summary());

    Ok(summary)
}
