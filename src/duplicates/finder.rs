//! Duplicate finder: walk, fingerprint, group.
//!
//! # Overview
//!
//! [`DuplicateFinder::scan`] validates the root, walks it with
//! [`crate::scanner::Walker`], fingerprints every regular file with
//! [`crate::scanner::Hasher`] and collects the results in a
//! [`DuplicateIndex`]. Files that cannot be read are recorded as
//! [`FileOutcome::SkippedUnreadable`] and left out of the index; the scan
//! itself only fails when the root is unusable.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! match finder.scan(Path::new(".")) {
//!     Ok(report) => {
//!         for group in report.duplicate_groups() {
//!             println!("{} copies of {}", group.len(), group.original().display());
//!         }
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::scanner::{Hasher, ScanError, Walker, WalkerConfig, DEFAULT_CHUNK_SIZE};

use super::{DuplicateGroup, DuplicateIndex, FileOutcome};

/// Configuration for a duplicate scan.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Read buffer size used when fingerprinting.
    pub chunk_size: usize,
    /// Directory traversal settings.
    pub walker_config: WalkerConfig,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            walker_config: WalkerConfig::default(),
        }
    }
}

impl FinderConfig {
    /// Set the fingerprint read buffer size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }
}

/// Result of one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Fingerprint index of every file that could be read
    pub index: DuplicateIndex,
    /// Files left out because they could not be read
    pub skipped: Vec<FileOutcome>,
    /// Number of files fingerprinted
    pub files_scanned: usize,
    /// Total bytes of the fingerprinted files
    pub bytes_scanned: u64,
    /// Directory entries that could not be read
    pub walk_errors: usize,
}

impl ScanReport {
    /// Duplicate groups, in first-seen order.
    #[must_use]
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        self.index.duplicate_groups()
    }

    /// Whether any file or directory entry was skipped.
    #[must_use]
    pub fn had_errors(&self) -> bool {
        !self.skipped.is_empty() || self.walk_errors > 0
    }
}

/// Scans a directory tree for files with identical content.
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let hasher = Hasher::with_chunk_size(config.chunk_size);
        Self { config, hasher }
    }

    /// Create a finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Scan `root` and build a fresh fingerprint index.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `root` does not exist
    /// - `NotADirectory` if `root` is not a directory
    /// - `Io` if `root` cannot be inspected
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        validate_root(root)?;

        log::info!("Starting duplicate scan of {}", root.display());

        let mut report = ScanReport::default();
        let walker = Walker::new(root, self.config.walker_config.clone());

        for result in walker.walk() {
            let file = match result {
                Ok(file) => file,
                Err(e) => {
                    log::debug!("Skipping entry: {}", e);
                    report.walk_errors += 1;
                    continue;
                }
            };

            match self.hasher.fingerprint(&file.path) {
                Ok(fingerprint) => {
                    report.files_scanned += 1;
                    report.bytes_scanned += file.size;
                    report.index.insert(fingerprint, file.path, file.size);
                }
                Err(e) => {
                    log::debug!("Skipping unreadable file: {}", e);
                    report.skipped.push(FileOutcome::SkippedUnreadable {
                        path: file.path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!(
            "Scanned {} files ({}), {} distinct, {} skipped",
            report.files_scanned,
            bytesize::ByteSize(report.bytes_scanned),
            report.index.len(),
            report.skipped.len()
        );

        Ok(report)
    }

    /// Scan `root`, printing the diagnostic and returning an empty report
    /// when the scan cannot start.
    ///
    /// # Errors
    ///
    /// Only fails if writing the diagnostic to `out` fails.
    pub fn scan_or_empty<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<ScanReport> {
        match self.scan(root) {
            Ok(report) => Ok(report),
            Err(e) => {
                log::debug!("Scan of {} not started: {:?}", root.display(), e);
                writeln!(out, "{e}")?;
                Ok(ScanReport::default())
            }
        }
    }
}

fn validate_root(root: &Path) -> Result<(), ScanError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ScanError::NotFound(root.to_path_buf()))
        }
        Err(e) => Err(ScanError::Io {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}
