//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Sorted, single-threaded directory walking using walkdir
//! - Content fingerprinting with BLAKE3
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

pub use hasher::{
    fingerprint_bytes, Fingerprint, Hasher, DEFAULT_CHUNK_SIZE, FINGERPRINT_LEN, MAX_CHUNK_SIZE,
};
pub use walker::Walker;

/// A regular file discovered during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file (root joined with the relative path)
    pub path: PathBuf,
    /// File size in bytes at discovery time
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Visit directory entries in lexicographic file-name order.
    /// When false, raw directory-listing order is used.
    pub sort_entries: bool,

    /// Skip zero-length files.
    pub skip_empty: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            sort_entries: true,
            skip_empty: false,
        }
    }
}

impl WalkerConfig {
    /// Create a new walker configuration.
    #[must_use]
    pub fn new(sort_entries: bool, skip_empty: bool) -> Self {
        Self {
            sort_entries,
            skip_empty,
        }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("Directory does not exist")]
    NotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("Path is not a directory")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while reading a directory.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Whether this error means the scan root itself is unusable.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }

    /// Path of the file that could not be hashed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }
}
