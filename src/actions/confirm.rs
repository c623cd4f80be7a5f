//! Confirmation capabilities for destructive operations.
//!
//! Deletion never reads the console directly. It asks a [`Confirm`]
//! implementation, which may prompt on a terminal ([`LinePrompt`]), answer
//! unconditionally ([`AssumeYes`]), or be any closure taking the prompt text.
//!
//! ```
//! use dupesweep::actions::confirm::{is_affirmative, Confirm, LinePrompt};
//!
//! let mut prompt = LinePrompt::new(&b"YES\n"[..], std::io::sink());
//! assert!(prompt.confirm("Delete duplicates? (yes/no): ").unwrap());
//!
//! assert!(is_affirmative("Yes\r\n"));
//! assert!(!is_affirmative("y"));
//! ```

use std::io::{self, BufRead, Write};

/// Something that can approve or decline an operation.
pub trait Confirm {
    /// Ask for approval with `prompt`; `Ok(true)` means go ahead.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer could not be obtained.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self(prompt))
    }
}

/// Strip the trailing line terminator from a console answer.
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Whether a typed answer is an exact, case-insensitive `yes`.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    strip_line_ending(answer).eq_ignore_ascii_case("yes")
}

/// Prompts on `output` and reads one line from `input`.
///
/// End of input counts as a decline.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt` and return the next line with its terminator removed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(strip_line_ending(&line).to_string())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?;
        log::debug!("Confirmation answer: {:?}", answer);
        Ok(is_affirmative(&answer))
    }
}

/// Approves every request without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        log::info!("Confirmation skipped (--yes)");
        Ok(true)
    }
}
