//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Fingerprinting every file under a root ([`finder`])
//! - The fingerprint index and duplicate groups ([`groups`])
//! - Per-file scan and deletion results ([`outcome`])

pub mod finder;
pub mod groups;
pub mod outcome;

pub use finder::{DuplicateFinder, FinderConfig, ScanReport};
pub use groups::{DuplicateGroup, DuplicateIndex};
pub use outcome::FileOutcome;
