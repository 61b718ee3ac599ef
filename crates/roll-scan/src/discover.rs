//! Markdown file discovery.

use std::ffi::OsStr;
use std::path::Path;

use roll_core::SourceFile;

use crate::error::ScanError;
use crate::file_date::{CreationDate, infer_file_date};
use crate::walk::{WalkMode, build_walker};

/// Options controlling which files [`discover`] returns.
#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
    pub mode: WalkMode,
    /// File name skipped at every depth, normally the report's own name.
    pub excluded_file_name: Option<String>,
}

impl DiscoverOptions {
    fn is_excluded(&self, file_name: &OsStr) -> bool {
        self.excluded_file_name
            .as_deref()
            .is_some_and(|name| file_name == OsStr::new(name))
    }
}

/// Whether `path` has an `md` extension, compared case-insensitively.
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

// Symlinks to files count; symlinked directories are never descended into.
fn is_file_entry(entry: &ignore::DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    })
}

/// List every markdown file beneath `root` in walk order.
///
/// Each file's date is inferred once here, using `creation` as the fallback
/// when the name carries no date.
///
/// # Errors
///
/// [`ScanError::RootUnreadable`] if `root` cannot be listed, and
/// [`ScanError::Walk`] if any directory beneath it cannot be listed. Either
/// aborts discovery with no partial result.
pub fn discover(
    root: &Path,
    options: &DiscoverOptions,
    creation: &impl CreationDate,
) -> Result<Vec<SourceFile>, ScanError> {
    std::fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in build_walker(root, options.mode) {
        let entry = entry?;
        if !is_file_entry(&entry) {
            continue;
        }
        if !is_markdown(entry.path()) || options.is_excluded(entry.file_name()) {
            continue;
        }

        let inferred_date = infer_file_date(entry.path(), creation);
        tracing::debug!(path = %entry.path().display(), ?inferred_date, "discovered markdown file");
        files.push(SourceFile::new(root, entry.into_path(), inferred_date));
    }

    Ok(files)
}
