//! # roll-core
//!
//! Core types shared across the taskroll crates:
//! - [`SourceFile`]: a discovered markdown file and its inferred date
//! - [`Task`]: a checkbox line extracted from a source file
//! - ISO calendar date helpers used for filename and header date detection

pub mod date;
pub mod source;
pub mod task;

pub use date::{ISO_DATE_FORMAT, format_iso_date, parse_iso_date, parse_leading_iso_date};
pub use source::SourceFile;
pub use task::Task;
