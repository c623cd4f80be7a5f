//! Exit codes.

use crate::actions::{DeletionStatus, DeletionSummary};
use crate::duplicates::ScanReport;

/// Exit codes for the dupesweep application.
///
/// - 0: Success (completed normally)
/// - 1: General error (unexpected failure)
/// - 2: No duplicates found (also used when the root was unusable)
/// - 3: Partial success (some files could not be read or removed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the run completed without skipping any file.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// No duplicates: the scan found nothing to report or delete.
    NoDuplicates = 2,
    /// Partial success: some files were skipped.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::NoDuplicates => "DS002",
            Self::PartialSuccess => "DS003",
        }
    }

    /// Exit code for a report-only run.
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        if report.duplicate_groups().is_empty() {
            Self::NoDuplicates
        } else if report.had_errors() {
            Self::PartialSuccess
        } else {
            Self::Success
        }
    }

    /// Exit code for a deletion run.
    #[must_use]
    pub fn from_deletion(summary: &DeletionSummary) -> Self {
        match summary.status {
            DeletionStatus::NothingToDelete => Self::NoDuplicates,
            DeletionStatus::Cancelled => Self::Success,
            DeletionStatus::Completed if summary.had_failures() => Self::PartialSuccess,
            DeletionStatus::Completed => Self::Success,
        }
    }
}
