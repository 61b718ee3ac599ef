//! Markdown rendering of the sorted task list.
//!
//! ```text
//! # 2023-01-02
//!
//! - [x] [buy milk](2023-01-02-notes.md)
//! - [ ] [call mom](2023-01-02-notes.md#Family)
//!
//! # 2023-01-03
//!
//! - [ ] [file taxes](inbox.md)
//! ```
//!
//! Undated tasks sort first and are written before the first header, with no
//! header of their own.

use chrono::NaiveDate;
use roll_core::{Task, format_iso_date};

use crate::slug::slugify;

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render task text as a link to its source file and section.
    pub links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { links: true }
    }
}

/// Render tasks (already sorted) into the report document.
#[must_use]
pub fn render(tasks: &[Task], options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut current_group: Option<Option<NaiveDate>> = None;

    for task in tasks {
        if current_group != Some(task.date) {
            if let Some(date) = task.date {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str("# ");
                out.push_str(&format_iso_date(date));
                out.push_str("\n\n");
            }
            current_group = Some(task.date);
        }

        out.push_str(&render_task(task, options));
        out.push('\n');
    }

    out
}

fn render_task(task: &Task, options: &RenderOptions) -> String {
    if options.links {
        format!(
            "- {} [{}]({})",
            task.checkbox(),
            task.text,
            link_target(&task.source_path, &task.section_header)
        )
    } else {
        format!("- {} {}", task.checkbox(), task.text)
    }
}

/// Link target for a task: the source path, plus `#slug` when the section
/// header yields a non-empty slug.
#[must_use]
pub fn link_target(source_path: &str, section_header: &str) -> String {
    let slug = slugify(section_header);
    if slug.is_empty() {
        source_path.to_string()
    } else {
        format!("{source_path}#{slug}")
    }
}
