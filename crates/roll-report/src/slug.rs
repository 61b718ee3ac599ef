//! Section anchors for source links.

/// Build an anchor from a header: runs of characters that are neither letters
/// nor digits become single hyphens, and leading/trailing runs are dropped.
/// Case is kept as written.
///
/// ```
/// use roll_report::slugify;
///
/// assert_eq!(slugify("Work Items: Q1"), "Work-Items-Q1");
/// assert_eq!(slugify("  --  "), "");
/// ```
#[must_use]
pub fn slugify(header: &str) -> String {
    header
        .split(|c: char| !c.is_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
