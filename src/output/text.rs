//! Plain-text listing of duplicate groups.
//!
//! The listing is a header followed by one block per group: a dashed
//! separator line, then every path of the group in index order. The first
//! path of each block is the one deletion keeps.

use std::io::{self, Write};

use yansi::Paint;

use crate::duplicates::{DuplicateGroup, DuplicateIndex};

/// Line printed above every group.
pub const SEPARATOR: &str = "--------------------------------";

/// Text reporter over a fingerprint index.
#[derive(Debug)]
pub struct TextOutput {
    groups: Vec<DuplicateGroup>,
    color: bool,
}

impl TextOutput {
    /// Prepare a listing of the duplicate groups in `index`.
    #[must_use]
    pub fn new(index: &DuplicateIndex) -> Self {
        Self {
            groups: index.duplicate_groups(),
            color: false,
        }
    }

    /// Enable or disable ANSI styling.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Groups that will be listed.
    #[must_use]
    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    /// Write the listing, or `No duplicate files found` when there are no
    /// groups. Returns the number of groups written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        if self.groups.is_empty() {
            writeln!(out, "No duplicate files found")?;
            return Ok(0);
        }

        if self.color {
            writeln!(out, "\n{}\n", "Duplicate Files:".bold())?;
        } else {
            writeln!(out, "\nDuplicate Files:\n")?;
        }

        for group in &self.groups {
            if self.color {
                writeln!(out, "{}", SEPARATOR.dim())?;
            } else {
                writeln!(out, "{SEPARATOR}")?;
            }
            for path in &group.files {
                writeln!(out, "{}", path.display())?;
            }
        }

        Ok(self.groups.len())
    }
}
