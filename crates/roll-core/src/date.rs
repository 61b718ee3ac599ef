//! ISO `YYYY-MM-DD` date helpers.
//!
//! All dates in taskroll are day-resolution [`NaiveDate`] values. Parsing is
//! strict: a string that has the right shape but names an impossible day
//! (`2023-02-30`) yields `None`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `chrono` format string for `YYYY-MM-DD`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

static LEADING_ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})").expect("leading ISO date pattern is valid")
});

/// Parse an exact `YYYY-MM-DD` string.
#[must_use]
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD` date at the very start of `text`.
///
/// Returns `None` when the prefix is missing or when it does not name a real
/// calendar day.
///
/// # Examples
///
/// ```
/// use roll_core::parse_leading_iso_date;
///
/// assert!(parse_leading_iso_date("2023-01-02-notes.md").is_some());
/// assert!(parse_leading_iso_date("notes-2023-01-02.md").is_none());
/// assert!(parse_leading_iso_date("2023-13-01.md").is_none());
/// ```
#[must_use]
pub fn parse_leading_iso_date(text: &str) -> Option<NaiveDate> {
    LEADING_ISO_DATE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_iso_date(m.as_str()))
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-01-02", Some((2023, 1, 2)))]
    #[case("2023-01-02-standup.md", Some((2023, 1, 2)))]
    #[case("2024-02-29 leap", Some((2024, 2, 29)))]
    #[case("2023-02-29", None)]
    #[case("2023-13-01", None)]
    #[case("23-01-02", None)]
    #[case(" 2023-01-02", None)]
    #[case("notes.md", None)]
    #[case("", None)]
    fn leading_date_cases(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        assert_eq!(parse_leading_iso_date(input), expected);
    }

    #[test]
    fn exact_parse_rejects_trailing_text() {
        assert!(parse_iso_date("2023-01-02x").is_none());
        assert!(parse_iso_date("2023-01-02").is_some());
    }

    #[test]
    fn format_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2022, 5, 1).unwrap();
        assert_eq!(format_iso_date(date), "2022-05-01");
    }
}
