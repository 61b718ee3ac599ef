//! Fallback date inference for a whole file.
//!
//! Precedence:
//! 1. a `YYYY-MM-DD` prefix on the file name
//! 2. the filesystem creation time, through a [`CreationDate`] capability
//! 3. nothing
//!
//! Birth time is not available on every platform or filesystem. When it is
//! missing the file simply starts without a date context.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};
use roll_core::parse_leading_iso_date;

/// Something that can report the calendar day a file was created.
pub trait CreationDate {
    /// Creation day of `path`, or `None` when it cannot be determined.
    fn creation_date(&self, path: &Path) -> Option<NaiveDate>;
}

/// Reads birth time from filesystem metadata, in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCreationDate;

impl CreationDate for FsCreationDate {
    fn creation_date(&self, path: &Path) -> Option<NaiveDate> {
        let created = std::fs::metadata(path).ok()?.created().ok()?;
        Some(DateTime::<Local>::from(created).date_naive())
    }
}

/// Never reports a creation date.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCreationDate;

impl CreationDate for NoCreationDate {
    fn creation_date(&self, _path: &Path) -> Option<NaiveDate> {
        None
    }
}

/// Infer the fallback date for a file.
///
/// A file name that starts with a date wins regardless of metadata. A prefix
/// that looks like a date but is not a real day (`2023-13-45-notes.md`) is
/// treated as absent and falls through to the creation time.
#[must_use]
pub fn infer_file_date(path: &Path, creation: &impl CreationDate) -> Option<NaiveDate> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(parse_leading_iso_date)
        .or_else(|| creation.creation_date(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    struct FixedCreation {
        date: Option<NaiveDate>,
        calls: Cell<u32>,
    }

    impl FixedCreation {
        fn new(date: Option<NaiveDate>) -> Self {
            Self {
                date,
                calls: Cell::new(0),
            }
        }
    }

    impl CreationDate for FixedCreation {
        fn creation_date(&self, _path: &Path) -> Option<NaiveDate> {
            self.calls.set(self.calls.get() + 1);
            self.date
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2023-01-02-notes.md")]
    #[case("2023-01-02.md")]
    #[case("2023-01-02 standup.MD")]
    fn filename_date_wins_over_metadata(#[case] name: &str) {
        let creation = FixedCreation::new(Some(ymd(1999, 12, 31)));
        let inferred = infer_file_date(&Path::new("journal").join(name), &creation);

        assert_eq!(inferred, Some(ymd(2023, 1, 2)));
        assert_eq!(creation.calls.get(), 0);
    }

    #[test]
    fn falls_back_to_creation_date() {
        let creation = FixedCreation::new(Some(ymd(2021, 6, 7)));
        assert_eq!(
            infer_file_date(Path::new("notes.md"), &creation),
            Some(ymd(2021, 6, 7))
        );
        assert_eq!(creation.calls.get(), 1);
    }

    #[test]
    fn invalid_filename_date_falls_through() {
        let creation = FixedCreation::new(Some(ymd(2021, 6, 7)));
        assert_eq!(
            infer_file_date(Path::new("2023-13-45-notes.md"), &creation),
            Some(ymd(2021, 6, 7))
        );
    }

    #[test]
    fn no_source_means_no_date() {
        assert_eq!(infer_file_date(Path::new("notes.md"), &NoCreationDate), None);
    }

    #[test]
    fn date_inside_name_is_not_a_prefix() {
        assert_eq!(
            infer_file_date(Path::new("notes-2023-01-02.md"), &NoCreationDate),
            None
        );
    }

    #[test]
    fn fs_creation_date_is_absent_for_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            FsCreationDate.creation_date(&tmp.path().join("missing.md")),
            None
        );
    }
}
