//! Discovered markdown source files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// A markdown file found beneath the scan root.
///
/// Created once during discovery and never modified. The inferred date seeds
/// the date context when the file is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Location used to open the file.
    pub path: PathBuf,
    /// Path relative to the scan root with `/` separators, e.g. `notes/todo.md`.
    pub link_path: String,
    /// Date from the file name or creation time, if any.
    pub inferred_date: Option<NaiveDate>,
}

impl SourceFile {
    /// Build a source file, deriving `link_path` from `path` relative to `root`.
    ///
    /// Falls back to the full path when `path` is not under `root`.
    #[must_use]
    pub fn new(root: &Path, path: PathBuf, inferred_date: Option<NaiveDate>) -> Self {
        let link_path = link_path(root, &path);
        Self {
            path,
            link_path,
            inferred_date,
        }
    }
}

fn link_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
