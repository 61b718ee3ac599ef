//! Checkbox task classification.
//!
//! A task line is optional leading whitespace, an optional bullet (`-`, `+`
//! or `*`), optional whitespace, then a checkbox:
//!
//! ```text
//! - [x] done          complete (x or X)
//!   * [ ] pending     incomplete (one or more whitespace characters)
//! [ ] no bullet       incomplete
//! - [-] cancelled     not a task
//! ```

use std::sync::LazyLock;

use regex::Regex;
use roll_core::Task;

use crate::scanner::ScanState;

static COMPLETE_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[-+*]?\s*\[x\]").expect("complete task pattern is valid")
});

static INCOMPLETE_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+*]?\s*\[\s+\]").expect("incomplete task pattern is valid")
});

/// Checkbox state of a task line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMarker {
    Complete,
    Incomplete,
}

impl TaskMarker {
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Classify a line as a complete task, an incomplete task, or neither.
#[must_use]
pub fn classify(line: &str) -> Option<TaskMarker> {
    if COMPLETE_TASK.is_match(line) {
        Some(TaskMarker::Complete)
    } else if INCOMPLETE_TASK.is_match(line) {
        Some(TaskMarker::Incomplete)
    } else {
        None
    }
}

/// Build a [`Task`] from `line` if it is a checkbox line.
///
/// The display text is everything after the first `]`, trimmed. Date and
/// header come from the scan state as it stands after this line was applied.
#[must_use]
pub fn extract_task(state: &ScanState, source_path: &str, line: &str) -> Option<Task> {
    let marker = classify(line)?;
    let text = line
        .split_once(']')
        .map_or("", |(_, rest)| rest)
        .trim()
        .to_string();

    Some(Task {
        date: state.date,
        complete: marker.is_complete(),
        source_path: source_path.to_string(),
        section_header: state.header.clone(),
        text,
    })
}
