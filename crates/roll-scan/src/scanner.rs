//! Single-pass line scanning with date and header tracking.
//!
//! Scanning is a fold over a file's lines carrying a [`ScanState`]. Each line
//! first updates the state and is then offered to the task extractor, so a
//! task always sees the date and header in effect at its own line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use roll_core::{SourceFile, Task, parse_iso_date};

use crate::extract::extract_task;

static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s+(\d{4}-\d{2}-\d{2})").expect("date header pattern is valid")
});

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#+\s+").expect("header pattern is valid"));

/// Running state of a file scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Current date context.
    pub date: Option<NaiveDate>,
    /// Text of the most recent header, without the leading `#` markup.
    pub header: String,
}

impl ScanState {
    /// Initial state for a file: its inferred date and no header.
    #[must_use]
    pub const fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            header: String::new(),
        }
    }

    /// Apply one line to the state.
    ///
    /// A `# YYYY-MM-DD` header moves the date context (an impossible date is
    /// ignored). Any header, dated or not, replaces the current header text.
    #[must_use]
    pub fn advance(self, line: &str) -> Self {
        let date = DATE_HEADER
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_iso_date(m.as_str()))
            .or(self.date);

        let header = if HEADER.is_match(line) {
            header_text(line).to_string()
        } else {
            self.header
        };

        Self { date, header }
    }
}

fn header_text(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
}

/// Extract every task from `lines`, seeding the date context from `file`.
pub fn scan_lines<I, S>(file: &SourceFile, lines: I) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (_, tasks) = lines.into_iter().fold(
        (ScanState::new(file.inferred_date), Vec::new()),
        |(state, mut tasks), line| {
            let line = line.as_ref();
            let state = state.advance(line);
            if let Some(task) = extract_task(&state, &file.link_path, line) {
                tasks.push(task);
            }
            (state, tasks)
        },
    );
    tasks
}

/// Read and scan one file.
///
/// An unopenable file yields no tasks. A read error part-way through keeps
/// the tasks found before it. Both cases are logged at `warn`.
#[must_use]
pub fn scan_file(file: &SourceFile) -> Vec<Task> {
    let handle = match File::open(&file.path) {
        Ok(handle) => handle,
        Err(error) => {
            tracing::warn!(path = %file.path.display(), %error, "skipping unreadable file");
            return Vec::new();
        }
    };

    let lines = BufReader::new(handle)
        .split(b'\n')
        .map_while(|chunk| match chunk {
            Ok(bytes) => Some(decode_line(&bytes)),
            Err(error) => {
                tracing::warn!(path = %file.path.display(), %error, "stopped reading file early");
                None
            }
        });

    let tasks = scan_lines(file, lines);
    tracing::debug!(path = %file.path.display(), tasks = tasks.len(), "scanned file");
    tasks
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
