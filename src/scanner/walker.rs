//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! [`Walker`] traverses a directory tree depth-first and yields every regular
//! file it finds as a [`FileEntry`]. Traversal order is part of the contract:
//! with [`WalkerConfig::sort_entries`] set (the default) the entries of each
//! directory are visited in lexicographic file-name order, so the first path
//! yielded for a piece of content is the same on every platform.
//!
//! Symbolic links are never followed and never yielded. Unreadable directory
//! entries are yielded as [`ScanError`] values so iteration can continue.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::default());
//! let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
//! println!("Found {} files", files.len());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Root directory this walker starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory tree, yielding file entries.
    ///
    /// Errors are yielded as [`ScanError`] values rather than stopping
    /// iteration.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        let mut walk_dir = WalkDir::new(&self.root).follow_links(false);
        if self.config.sort_entries {
            walk_dir = walk_dir.sort_by_file_name();
        }

        walk_dir
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_symlink() {
                        log::trace!("Skipping symlink: {}", entry.path().display());
                        return None;
                    }
                    if !file_type.is_file() {
                        return None;
                    }

                    let metadata = match entry.metadata() {
                        Ok(m) => m,
                        Err(e) => return Some(Err(self.convert_error(e))),
                    };

                    let size = metadata.len();
                    if size == 0 && self.config.skip_empty {
                        log::debug!("Skipping empty file: {}", entry.path().display());
                        return None;
                    }

                    Some(Ok(FileEntry::new(entry.into_path(), size)))
                }
                Err(e) => Some(Err(self.convert_error(e))),
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn convert_error(&self, e: walkdir::Error) -> ScanError {
        let path = e
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if e.depth() == 0 {
            if let Some(io_err) = e.io_error() {
                match io_err.kind() {
                    io::ErrorKind::NotFound => return ScanError::NotFound(path),
                    io::ErrorKind::NotADirectory => return ScanError::NotADirectory(path),
                    _ => {}
                }
            }
        }

        let source = e
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        log::warn!("Cannot read {}: {}", path.display(), source);
        ScanError::Io { path, source }
    }
}
