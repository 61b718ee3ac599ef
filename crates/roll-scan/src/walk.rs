//! File walker factory for discovery.
//!
//! Uses the `ignore` crate for directory walking. Entries within each
//! directory are visited in file-name order, so the walk is deterministic for
//! a given filesystem state.
//!
//! ## Walking modes
//!
//! - `All`: disables every standard filter. Hidden files and directories are
//!   visited and no ignore files are consulted. This is the default: every
//!   markdown file beneath the root is a task source.
//! - `Filtered`: honors `.gitignore`, `.ignore` and `.taskrollignore` (no git
//!   repository required) and skips hidden entries.

use ignore::WalkBuilder;
use std::path::Path;

/// Custom ignore file consulted in [`WalkMode::Filtered`].
pub const IGNORE_FILENAME: &str = ".taskrollignore";

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// No filters: every file under the root.
    #[default]
    All,
    /// Respect ignore files and skip hidden entries.
    Filtered,
}

impl WalkMode {
    /// Pick the mode matching a "respect ignore files" switch.
    #[must_use]
    pub const fn from_respect_ignore(respect_ignore_files: bool) -> Self {
        if respect_ignore_files {
            Self::Filtered
        } else {
            Self::All
        }
    }
}

/// Build a file walker over `root` with the given mode.
///
/// Symlinks are not followed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use roll_scan::walk::{build_walker, WalkMode};
///
/// for entry in build_walker(Path::new("."), WalkMode::All) {
///     println!("{}", entry.expect("walk").path().display());
/// }
/// ```
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::All => {
            builder.standard_filters(false);
            builder.hidden(false);
        }
        WalkMode::Filtered => {
            builder.standard_filters(true);
            builder.require_git(false);
            builder.add_custom_ignore_filename(IGNORE_FILENAME);
        }
    }

    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}
