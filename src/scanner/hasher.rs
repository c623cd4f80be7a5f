//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! [`Hasher`] reads a file through a fixed-size buffer and feeds every chunk
//! into a BLAKE3 accumulator, so memory use is bounded by the chunk size no
//! matter how large the file is. The digest is rendered as a lowercase hex
//! [`Fingerprint`].
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::Hasher;
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! match hasher.fingerprint(Path::new("photo.jpg")) {
//!     Ok(fp) => println!("{fp}"),
//!     Err(e) => eprintln!("skipped: {e}"),
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use super::HashError;

/// Default read buffer size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest accepted read buffer size in bytes (64 MiB).
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Length of a fingerprint in hex characters (256-bit digest).
pub const FINGERPRINT_LEN: usize = 64;

/// Hex digest identifying a file's byte content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    fn from_hash(hash: &blake3::Hash) -> Self {
        Self(hash.to_hex().to_string())
    }

    /// The lowercase hex representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for log lines.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Streaming content hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher that reads [`DEFAULT_CHUNK_SIZE`] bytes at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom read buffer size.
    ///
    /// The size is clamped to `1..=MAX_CHUNK_SIZE`.
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.clamp(1, MAX_CHUNK_SIZE),
        }
    }

    /// Read buffer size in bytes.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Compute the fingerprint of a file's full content.
    ///
    /// The file handle is closed on return, whether hashing succeeded or not.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the file vanished or is a broken link
    /// - `PermissionDenied` if the file cannot be opened or read
    /// - `Io` for any other read failure
    pub fn fingerprint(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(HashError::from_io(path, e)),
            };
            hasher.update(&buffer[..read]);
        }

        let fingerprint = Fingerprint::from_hash(&hasher.finalize());
        log::trace!("{} {}", fingerprint.short(), path.display());
        Ok(fingerprint)
    }
}

/// Fingerprint an in-memory buffer.
///
/// Produces the same value as [`Hasher::fingerprint`] on a file with the same
/// bytes.
///
/// ```
/// use dupesweep::scanner::fingerprint_bytes;
///
/// assert_eq!(fingerprint_bytes(b"abc"), fingerprint_bytes(b"abc"));
/// assert_ne!(fingerprint_bytes(b"abc"), fingerprint_bytes(b"abd"));
/// ```
#[must_use]
pub fn fingerprint_bytes(data: &[u8]) -> Fingerprint {
    Fingerprint::from_hash(&blake3::hash(data))
}
