//! Command-line interface definitions for dupesweep.
//!
//! # Example
//!
//! ```bash
//! # Prompt for a directory, list duplicates, confirm, delete
//! dupesweep
//!
//! # Same, for a given directory
//! dupesweep ~/Downloads
//!
//! # Only list the groups, as JSON
//! dupesweep ~/Downloads --report-only --output json
//!
//! # Unattended run that moves duplicates to the trash
//! dupesweep ~/Downloads --yes --trash
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::scanner::MAX_CHUNK_SIZE;

/// Find files with identical content and remove the redundant copies.
///
/// The first copy of each content group (in lexicographic traversal order)
/// is always kept.
#[derive(Debug, Parser)]
#[command(name = "dupesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (prompted for when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// List duplicate groups without deleting anything
    #[arg(short, long)]
    pub report_only: bool,

    /// Listing format for --report-only
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, requires = "report_only")]
    pub output: OutputFormat,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long, conflicts_with = "report_only")]
    pub yes: bool,

    /// Move duplicates to the system trash instead of removing them
    #[arg(long, conflicts_with = "report_only")]
    pub trash: bool,

    /// Read buffer size for fingerprinting (e.g., 4096, 64KiB, 1MB)
    #[arg(long, value_name = "SIZE", value_parser = parse_size)]
    pub chunk_size: Option<usize>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Parse a human-readable size string into bytes.
///
/// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB (case-insensitive).
/// Numbers without suffix are treated as bytes. Zero and anything above
/// [`MAX_CHUNK_SIZE`] are rejected.
///
/// # Examples
///
/// ```
/// use dupesweep::cli::parse_size;
///
/// assert_eq!(parse_size("4096").unwrap(), 4096);
/// assert_eq!(parse_size("4KiB").unwrap(), 4096);
/// assert_eq!(parse_size("1MB").unwrap(), 1_000_000);
/// ```
///
/// # Errors
///
/// Returns an error if the string is empty, zero, not a number, or has an
/// unknown suffix.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    let bytes = num * multiplier as f64;
    if bytes > MAX_CHUNK_SIZE as f64 {
        return Err(format!(
            "Size exceeds the chunk size limit of {MAX_CHUNK_SIZE} bytes (64 MiB)"
        ));
    }
    let bytes = bytes as usize;
    if bytes == 0 {
        return Err("Size must be at least one byte".to_string());
    }
    Ok(bytes)
}
