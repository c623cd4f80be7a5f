//! File actions module.
//!
//! This module provides functionality for:
//! - Confirmation capabilities for destructive operations ([`confirm`])
//! - Permanent deletion or removal to the system trash ([`delete`])
//!
//! # Deletion
//!
//! Deletion only ever removes duplicates: the first path of every group is
//! kept. Nothing is removed until a [`confirm::Confirm`] implementation
//! approves, and a file that cannot be removed is recorded and skipped.
//!
//! ```no_run
//! use dupesweep::actions::{delete_duplicates, DeleteConfig, LinePrompt};
//! use dupesweep::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let mut prompt = LinePrompt::new(std::io::stdin().lock(), std::io::stdout());
//! let summary = delete_duplicates(
//!     &DuplicateFinder::with_defaults(),
//!     Path::new("."),
//!     &mut prompt,
//!     &DeleteConfig::default(),
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! println!("{}", summary.summary());
//! ```

pub mod confirm;
pub mod delete;

// Re-export commonly used types
pub use confirm::{is_affirmative, AssumeYes, Confirm, LinePrompt};
pub use delete::{
    delete_duplicates, delete_to_trash, permanent_delete, remove_group, DeleteConfig,
    DeleteError, DeletionStatus, DeletionSummary,
};
