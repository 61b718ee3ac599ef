//! Writing the report to disk.

use std::path::Path;

use crate::error::ReportError;

/// Create or truncate `path` and write `contents` verbatim.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the file cannot be created or written.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
