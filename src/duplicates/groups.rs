//! Fingerprint index and duplicate group management.
//!
//! # Overview
//!
//! [`DuplicateIndex`] maps each [`Fingerprint`] to the paths that produced it.
//! Paths within an entry keep traversal order, and entries keep the order in
//! which their fingerprint was first seen. A [`DuplicateGroup`] is any entry
//! holding two or more paths; its first path is the original that deletion
//! keeps.
//!
//! # Example
//!
//! ```
//! use dupesweep::duplicates::DuplicateIndex;
//! use dupesweep::scanner::fingerprint_bytes;
//! use std::path::PathBuf;
//!
//! let mut index = DuplicateIndex::new();
//! index.insert(fingerprint_bytes(b"one"), PathBuf::from("/a/1.txt"), 3);
//! index.insert(fingerprint_bytes(b"one"), PathBuf::from("/b/1.txt"), 3);
//! index.insert(fingerprint_bytes(b"two"), PathBuf::from("/c/2.txt"), 3);
//!
//! let groups = index.duplicate_groups();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].original(), &PathBuf::from("/a/1.txt"));
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::Fingerprint;

#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    fingerprint: Fingerprint,
    size: u64,
    paths: Vec<PathBuf>,
}

/// Mapping from content fingerprint to the ordered paths sharing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<Fingerprint, usize>,
}

impl DuplicateIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the entry for `fingerprint`, creating it if absent.
    ///
    /// `size` is recorded when the entry is created; files with equal
    /// fingerprints have equal sizes.
    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf, size: u64) {
        if let Some(&pos) = self.positions.get(&fingerprint) {
            self.entries[pos].paths.push(path);
            return;
        }

        self.positions.insert(fingerprint.clone(), self.entries.len());
        self.entries.push(IndexEntry {
            fingerprint,
            size,
            paths: vec![path],
        });
    }

    /// Paths recorded for a fingerprint, in traversal order.
    #[must_use]
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&[PathBuf]> {
        self.positions
            .get(fingerprint)
            .map(|&pos| self.entries[pos].paths.as_slice())
    }

    /// Fingerprints in first-seen order.
    pub fn fingerprints(&self) -> impl Iterator<Item = &Fingerprint> {
        self.entries.iter().map(|e| &e.fingerprint)
    }

    /// Iterate `(fingerprint, paths)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &[PathBuf])> {
        self.entries
            .iter()
            .map(|e| (&e.fingerprint, e.paths.as_slice()))
    }

    /// Number of distinct fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of paths across all entries.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.paths.len()).sum()
    }

    /// Entries with two or more paths, in first-seen order.
    #[must_use]
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        self.entries
            .iter()
            .filter(|e| e.paths.len() > 1)
            .map(|e| DuplicateGroup::new(e.fingerprint.clone(), e.size, e.paths.clone()))
            .collect()
    }
}

/// Files sharing one fingerprint, two or more of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// Content fingerprint shared by every file in the group
    pub fingerprint: Fingerprint,
    /// File size in bytes
    pub size: u64,
    /// Paths in traversal order; the first one is the original
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    ///
    /// # Panics
    ///
    /// Debug assertion fails if `files` is empty.
    #[must_use]
    pub fn new(fingerprint: Fingerprint, size: u64, files: Vec<PathBuf>) -> Self {
        debug_assert!(!files.is_empty(), "duplicate group without files");
        Self {
            fingerprint,
            size,
            files,
        }
    }

    /// The retained copy.
    #[must_use]
    pub fn original(&self) -> &PathBuf {
        &self.files[0]
    }

    /// Copies eligible for deletion.
    #[must_use]
    pub fn duplicates(&self) -> &[PathBuf] {
        &self.files[1..]
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Space reclaimed by removing every duplicate.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicates().len() as u64
    }
}
