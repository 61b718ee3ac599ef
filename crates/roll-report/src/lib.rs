//! # roll-report
//!
//! Turns extracted tasks into the rolled-up markdown report:
//! - [`aggregate`] merges per-file task lists and stable-sorts them by day
//! - [`render`] groups tasks under `# YYYY-MM-DD` headers, optionally linking
//!   each task back to its source file and section
//! - [`write_report`] replaces the report file on disk
//! - [`TaskSummary`] is the one-line count shown to the operator

pub mod aggregate;
pub mod error;
pub mod render;
pub mod slug;
pub mod write;

pub use aggregate::{TaskSummary, aggregate};
pub use error::ReportError;
pub use render::{RenderOptions, link_target, render};
pub use slug::slugify;
pub use write::write_report;
