//! Scan error types for roll-scan.

use std::path::PathBuf;

/// Errors that abort discovery. Per-file read problems are not represented
/// here; they are logged and the file contributes no tasks.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root is missing, not a directory, or not readable.
    #[error("cannot list scan root {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory beneath the root could not be listed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
}
