//! # roll-scan
//!
//! Finds markdown files under a root and extracts checkbox tasks from them.
//!
//! Pipeline per run:
//! - [`discover`] walks the tree and returns every markdown [`SourceFile`]
//!   with its inferred date ([`file_date`])
//! - [`scan_file`] folds each file's lines through a [`ScanState`], tracking
//!   the current date context and section header, and hands task lines to
//!   [`extract_task`]
//!
//! Only a failure to list directories is an error. Unreadable files are
//! logged and contribute no tasks.
//!
//! [`SourceFile`]: roll_core::SourceFile

pub mod discover;
pub mod error;
pub mod extract;
pub mod file_date;
pub mod scanner;
pub mod walk;

pub use discover::{DiscoverOptions, discover, is_markdown};
pub use error::ScanError;
pub use extract::{TaskMarker, classify, extract_task};
pub use file_date::{CreationDate, FsCreationDate, NoCreationDate, infer_file_date};
pub use scanner::{ScanState, scan_file, scan_lines};
pub use walk::WalkMode;
