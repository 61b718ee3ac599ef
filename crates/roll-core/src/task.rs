//! The task record produced by line scanning.

use chrono::NaiveDate;

/// A checkbox line extracted from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Date context at the point the line was scanned. `None` when neither
    /// the file nor any preceding header supplied a date.
    pub date: Option<NaiveDate>,
    /// Whether the checkbox was ticked.
    pub complete: bool,
    /// Link path of the originating file.
    pub source_path: String,
    /// Nearest preceding header text, empty if none was seen.
    pub section_header: String,
    /// Display text with the bullet and checkbox removed.
    pub text: String,
}

impl Task {
    /// The checkbox marker used when rendering: `[x]` or `[ ]`.
    #[must_use]
    pub const fn checkbox(&self) -> &'static str {
        if self.complete { "[x]" } else { "[ ]" }
    }
}
