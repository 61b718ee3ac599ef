//! One full run: discover, scan, aggregate, render.

use std::io::{self, Write};
use std::path::Path;

use roll_config::RollConfig;
use roll_report::{RenderOptions, TaskSummary, aggregate, render};
use roll_scan::{
    DiscoverOptions, FsCreationDate, NoCreationDate, ScanError, WalkMode, discover, scan_file,
};

/// Rendered report plus the counts shown to the operator.
#[derive(Debug)]
pub struct Report {
    pub summary: TaskSummary,
    pub document: String,
}

/// Build the report for everything beneath `root`.
///
/// Files are scanned one at a time in discovery order.
///
/// # Errors
///
/// Propagates [`ScanError`] when the tree cannot be listed. Unreadable files
/// are skipped inside the scanner and never fail the run.
pub fn build_report(root: &Path, config: &RollConfig) -> Result<Report, ScanError> {
    let options = DiscoverOptions {
        mode: WalkMode::from_respect_ignore(config.scan.respect_ignore_files),
        excluded_file_name: config.report.output_file_name().map(str::to_string),
    };

    let files = if config.scan.creation_date_fallback {
        discover(root, &options, &FsCreationDate)?
    } else {
        discover(root, &options, &NoCreationDate)?
    };
    tracing::debug!(files = files.len(), root = %root.display(), "discovery finished");

    let tasks = aggregate(files.iter().map(scan_file));
    let summary = TaskSummary::from_tasks(&tasks);
    let document = render(
        &tasks,
        &RenderOptions {
            links: config.report.links,
        },
    );

    Ok(Report { summary, document })
}

/// Write the report to `output_path` and tell the operator how it went.
///
/// The summary line goes to `out` only after the file is written. A failed
/// write is reported on `err` and still counts as a finished run.
///
/// # Errors
///
/// Only fails when `out` or `err` themselves cannot be written.
pub fn publish(
    report: &Report,
    output_path: &Path,
    output_name: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match roll_report::write_report(output_path, &report.document) {
        Ok(()) => writeln!(
            out,
            "{}, writing to file '{output_name}'",
            report.summary
        ),
        Err(error) => writeln!(err, "taskroll: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn deterministic_config() -> RollConfig {
        let mut config = RollConfig::default();
        config.scan.creation_date_fallback = false;
        config
    }

    #[test]
    fn dated_file_name_report() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "2023-01-02-notes.md",
            "- [x] buy milk\n- [ ] call mom\n",
        );

        let report = build_report(tmp.path(), &deterministic_config()).unwrap();

        assert_eq!(
            report.document,
            "# 2023-01-02\n\
             \n\
             - [x] [buy milk](2023-01-02-notes.md)\n\
             - [ ] [call mom](2023-01-02-notes.md)\n"
        );
        assert_eq!(report.summary, TaskSummary { total: 2, completed: 1 });
    }

    #[test]
    fn headers_date_tasks_across_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "journal/log.md",
            "# 2022-05-03\n- [x] task B\n# 2022-05-01\n- [ ] task A\n",
        );
        write(tmp.path(), "2022-05-02.md", "## Home\n- [ ] water plants\n");

        let mut config = deterministic_config();
        config.report.links = false;
        let report = build_report(tmp.path(), &config).unwrap();

        assert_eq!(
            report.document,
            "# 2022-05-01\n\
             \n\
             - [ ] task A\n\
             \n\
             # 2022-05-02\n\
             \n\
             - [ ] water plants\n\
             \n\
             # 2022-05-03\n\
             \n\
             - [x] task B\n"
        );
    }

    #[test]
    fn links_point_at_nested_sections() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "projects/2024-02-10 launch.md",
            "# Launch Plan\n## Follow-ups!\n* [ ] email press\n",
        );

        let report = build_report(tmp.path(), &deterministic_config()).unwrap();

        assert_eq!(
            report.document,
            "# 2024-02-10\n\n- [ ] [email press](projects/2024-02-10 launch.md#Follow-ups)\n"
        );
    }

    #[test]
    fn previous_output_is_not_rescanned() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "2023-01-02.md", "- [ ] only task\n");
        write(tmp.path(), "TASKS.md", "# 2023-01-02\n\n- [ ] [stale](x.md)\n");

        let report = build_report(tmp.path(), &deterministic_config()).unwrap();

        assert_eq!(report.summary.total, 1);
        assert!(!report.document.contains("stale"));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b.md", "# 2023-01-01\n- [ ] b1\n");
        write(tmp.path(), "a.md", "# 2023-01-01\n- [x] a1\n");
        write(tmp.path(), "sub/2022-12-31.md", "- [ ] eve\n");

        let config = deterministic_config();
        let first = build_report(tmp.path(), &config).unwrap();
        roll_report::write_report(&tmp.path().join("TASKS.md"), &first.document).unwrap();
        let second = build_report(tmp.path(), &config).unwrap();

        assert_eq!(first.document, second.document);
        assert!(first.document.find("a1").unwrap() < first.document.find("b1").unwrap());
    }

    #[test]
    fn undated_tasks_are_kept() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "inbox.md", "- [ ] someday\n");

        let mut config = deterministic_config();
        config.report.links = false;
        let report = build_report(tmp.path(), &config).unwrap();

        assert_eq!(report.document, "- [ ] someday\n");
    }

    #[test]
    fn publish_writes_file_then_summary() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "2023-01-02.md", "- [x] done\n- [ ] open\n");
        let report = build_report(tmp.path(), &deterministic_config()).unwrap();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        publish(&report, &tmp.path().join("TASKS.md"), "TASKS.md", &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 completed out of 2 total tasks, writing to file 'TASKS.md'\n"
        );
        assert!(err.is_empty());
        assert_eq!(
            fs::read_to_string(tmp.path().join("TASKS.md")).unwrap(),
            report.document
        );
    }

    #[test]
    fn publish_failure_is_reported_not_raised() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "2023-01-02.md", "- [ ] open\n");
        let report = build_report(tmp.path(), &deterministic_config()).unwrap();
        let output = tmp.path().join("no-such-dir").join("TASKS.md");
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let result = publish(&report, &output, "no-such-dir/TASKS.md", &mut out, &mut err);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("taskroll: "));
        assert!(!output.exists());
    }

    #[test]
    fn missing_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = build_report(&tmp.path().join("missing"), &deterministic_config());
        assert!(matches!(result, Err(ScanError::RootUnreadable { .. })));
    }
}
