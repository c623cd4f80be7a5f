//! dupesweep - duplicate file remover
//!
//! Scans a directory tree, groups files by a BLAKE3 fingerprint of their
//! content, and removes every copy but the first of each group after
//! confirmation.
//!
//! The pipeline is walk ([`scanner::Walker`]), fingerprint
//! ([`scanner::Hasher`]), group ([`duplicates::DuplicateFinder`]), report
//! ([`output`]), confirm ([`actions::Confirm`]) and delete
//! ([`actions::delete_duplicates`]).

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::actions::{delete_duplicates, AssumeYes, Confirm, DeleteConfig, LinePrompt};
use crate::cli::Cli;
use crate::config::Config;
use crate::duplicates::DuplicateFinder;
use crate::error::ExitCode;

/// Prompt used when no path is given on the command line.
pub const PATH_PROMPT: &str = "Enter directory path: ";

/// Run the application against the real terminal.
///
/// # Errors
///
/// Returns an error if configuration loading fails or the console cannot be
/// read or written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    if !config.color || !io::stdout().is_terminal() {
        config.color = false;
        yansi::disable();
    }
    log::debug!("Effective configuration: {:?}", config);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    run(&cli, &config, stdin, io::stdout(), &mut stdout)
}

/// Run one scan with explicit console streams.
///
/// `input` supplies the directory path (when `cli.path` is absent) and the
/// confirmation answer. Prompts are written to `prompt_out`; everything else
/// goes to `out`.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn run<R, P, W>(
    cli: &Cli,
    config: &Config,
    input: R,
    prompt_out: P,
    out: &mut W,
) -> Result<ExitCode>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let finder = DuplicateFinder::new(config.finder_config());
    let mut prompt = LinePrompt::new(input, prompt_out);

    let root = match &cli.path {
        Some(path) => path.clone(),
        None => PathBuf::from(
            prompt
                .ask(PATH_PROMPT)
                .context("Failed to read directory path")?,
        ),
    };

    if cli.report_only {
        let report = output::report_duplicates(&finder, &root, cli.output, config.color, out)
            .context("Failed to write report")?;
        return Ok(ExitCode::from_report(&report));
    }

    let delete_config = DeleteConfig {
        use_trash: config.use_trash,
    };
    let mut assume_yes = AssumeYes;
    let confirm: &mut dyn Confirm = if cli.yes {
        &mut assume_yes
    } else {
        &mut prompt
    };

    let summary = delete_duplicates(&finder, &root, confirm, &delete_config, out)
        .context("Deletion run failed")?;
    out.flush()?;

    Ok(ExitCode::from_deletion(&summary))
}
