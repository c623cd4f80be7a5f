//! Application configuration management.
//!
//! Settings are layered with `figment`, lowest priority first:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. A TOML file: `--config <FILE>`, or `config.toml` in the platform
//!    config directory when present
//! 3. Environment variables prefixed `DUPESWEEP_` (e.g. `DUPESWEEP_CHUNK_SIZE`)
//! 4. CLI flags, applied by [`Config::apply_cli`]
//!
//! ```toml
//! chunk_size = 65536
//! sort_entries = true
//! skip_empty = false
//! use_trash = false
//! color = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::duplicates::FinderConfig;
use crate::scanner::{WalkerConfig, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DUPESWEEP_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Read buffer size for fingerprinting, in bytes.
    pub chunk_size: usize,
    /// Visit directory entries in lexicographic order.
    pub sort_entries: bool,
    /// Leave zero-length files out of the scan.
    pub skip_empty: bool,
    /// Move duplicates to the system trash instead of removing them.
    pub use_trash: bool,
    /// Style console output when stdout is a terminal.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            sort_entries: true,
            skip_empty: false,
            use_trash: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `explicit` must exist when given; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing, a file cannot be parsed,
    /// or a value fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Self::default_path().filter(|p| p.is_file()),
        };

        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(ref path) = file {
            log::debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Self = figment
            .extract()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key. `chunk_size` must lie in
    /// `1..=MAX_CHUNK_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            bail!("chunk_size must be greater than zero");
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            bail!(
                "chunk_size must be at most {} bytes, got {}",
                MAX_CHUNK_SIZE,
                self.chunk_size
            );
        }
        Ok(())
    }

    /// Apply CLI flags on top of the loaded values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(size) = cli.chunk_size {
            self.chunk_size = size;
        }
        if cli.trash {
            self.use_trash = true;
        }
        if cli.no_color {
            self.color = false;
        }
    }

    /// Scanner settings derived from this configuration.
    #[must_use]
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_walker_config(WalkerConfig::new(self.sort_entries, self.skip_empty))
    }

    /// Platform-specific location of the default config file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dupesweep").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
