//! Filesystem validation source.
//!
//! Resolves the data files inside a directory and streams each one line by
//! line through its [`TableFormat`] validator. Files are opened one at a time
//! and closed before the next is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::config::ValidationConfig;
use crate::error::{ScanError, SetupError};
use crate::format::TableFormat;
use crate::output::{DONE_MARKER, Reporter, report_line};
use crate::report::{FileReport, LineFinding};

/// Fail unless `dir` is an existing directory.
///
/// # Errors
///
/// Returns [`SetupError::MissingDirectory`] when `dir` is absent or not a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), SetupError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SetupError::MissingDirectory(dir.to_path_buf()))
    }
}

/// Every entry of `names` that is not a regular file in `dir`, as full paths.
#[must_use]
pub fn find_missing_files(dir: &Path, names: &[String]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| !path.is_file())
        .collect()
}

/// Regular files directly inside `dir` whose name matches `pattern`, sorted.
///
/// Hidden files are not matched. Entries that cannot be read are returned as
/// scan errors, never dropped.
///
/// # Errors
///
/// Returns [`SetupError::InvalidPattern`] if `pattern` is not a valid glob.
pub fn find_matching_files(
    dir: &Path,
    pattern: &str,
) -> Result<(Vec<PathBuf>, Vec<ScanError>), SetupError> {
    let full_pattern = format!(
        "{}/{pattern}",
        Pattern::escape(&dir.to_string_lossy()).trim_end_matches('/')
    );

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries =
        glob::glob_with(&full_pattern, options).map_err(|source| SetupError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

    let mut files = Vec::new();
    let mut scan_errors = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => scan_errors.push(ScanError::walk(&err)),
        }
    }

    files.sort();
    Ok((files, scan_errors))
}

/// Check one file line by line.
///
/// Emits `Processing <file name>` first, every finding as it is found, and
/// [`DONE_MARKER`] once the file has been read to the end. A read failure
/// stops the file and is returned as a [`ScanError`]; findings reported up to
/// that point have already reached `reporter`.
///
/// # Errors
///
/// Returns a [`ScanError`] if the file cannot be opened or a line cannot be
/// read as UTF-8.
pub fn check_file(
    path: &Path,
    format: TableFormat,
    config: &ValidationConfig,
    reporter: &mut dyn Reporter,
) -> Result<FileReport, ScanError> {
    reporter.progress(&format!("Processing {}", display_name(path)));

    let file = File::open(path).map_err(|err| ScanError::open(path, &err))?;
    let mut report = FileReport::new(path.to_path_buf());

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|err| ScanError::read(path, line_number, &err))?;
        report.lines_checked += 1;

        let violations = format.validate(line_number, &line, config);
        if violations.is_empty() {
            continue;
        }

        let finding = LineFinding {
            line_number,
            line,
            messages: violations.iter().map(ToString::to_string).collect(),
        };
        report_line(reporter, &finding);
        report.findings.push(finding);
    }

    reporter.note(DONE_MARKER);
    debug!(
        file = %path.display(),
        lines = report.lines_checked,
        findings = report.findings.len(),
        "file checked"
    );
    Ok(report)
}

/// The file name alone, or the whole path when it has none.
fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Check several files in order; a file that cannot be read is reported and
/// skipped.
#[must_use]
pub fn check_files(
    files: &[(PathBuf, TableFormat)],
    config: &ValidationConfig,
    reporter: &mut dyn Reporter,
) -> (Vec<FileReport>, Vec<ScanError>) {
    let mut reports = Vec::with_capacity(files.len());
    let mut scan_errors = Vec::new();

    for (path, format) in files {
        match check_file(path, *format, config, reporter) {
            Ok(report) => reports.push(report),
            Err(scan_err) => {
                warn!(file = %path.display(), "{}", scan_err.message);
                reporter.error(&scan_err.format_human_readable());
                scan_errors.push(scan_err);
            }
        }
    }

    (reports, scan_errors)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::output::{CollectingReporter, ReportEvent};

    #[test]
    fn test_missing_files_in_manifest_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.tab"), "").unwrap();
        let names = vec!["a.tab".to_owned(), "b.tab".to_owned(), "c.tab".to_owned()];

        let missing = find_missing_files(tmp.path(), &names);
        assert_eq!(missing, vec![tmp.path().join("a.tab"), tmp.path().join("c.tab")]);
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("README")).unwrap();
        let missing = find_missing_files(tmp.path(), &["README".to_owned()]);
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_find_matching_files_is_flat_and_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(tmp.path().join(".hidden.txt"), "").unwrap();
        fs::write(tmp.path().join("c.csv"), "").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("d.txt"), "").unwrap();

        let (files, errors) = find_matching_files(tmp.path(), "*.txt").unwrap();
        assert!(errors.is_empty());
        assert_eq!(files, vec![tmp.path().join("a.txt"), tmp.path().join("b.txt")]);
    }

    #[test]
    fn test_invalid_pattern() {
        let tmp = TempDir::new().unwrap();
        let result = find_matching_files(tmp.path(), "[");
        assert!(matches!(result, Err(SetupError::InvalidPattern { .. })));
    }

    #[test]
    fn test_check_file_event_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("iota.tbl");
        fs::write(&path, "EU-005|Great Britain\nEU-5|Broken\n").unwrap();

        let mut reporter = CollectingReporter::new();
        let report =
            check_file(&path, TableFormat::Iota, &ValidationConfig::default(), &mut reporter)
                .unwrap();

        assert_eq!(report.lines_checked, 2);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].line_number, 2);
        assert_eq!(
            reporter.events,
            vec![
                ReportEvent::Progress("Processing iota.tbl".to_owned()),
                ReportEvent::Error("Wrong IOTA format: EU-5".to_owned()),
                ReportEvent::Note("EU-5|Broken".to_owned()),
                ReportEvent::Note(DONE_MARKER.to_owned()),
            ]
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/data/dxcc/Country.tab")), "Country.tab");
        assert_eq!(display_name(Path::new("Country.tab")), "Country.tab");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_check_file_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("iota.tbl");
        fs::write(&path, b"EU-005\n\xff\xfe\n").unwrap();

        let mut reporter = CollectingReporter::new();
        let err = check_file(&path, TableFormat::Iota, &ValidationConfig::default(), &mut reporter)
            .unwrap_err();
        assert_eq!(err.kind, crate::error::ScanErrorKind::InvalidEncoding);
        assert!(!reporter.events.contains(&ReportEvent::Note(DONE_MARKER.to_owned())));
    }

    #[test]
    fn test_check_files_continues_after_scan_error() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.tbl");
        fs::write(&good, "EU-005\n").unwrap();
        let files = vec![
            (tmp.path().join("absent.tbl"), TableFormat::Iota),
            (good, TableFormat::Iota),
        ];

        let mut reporter = CollectingReporter::new();
        let (reports, errors) = check_files(&files, &ValidationConfig::default(), &mut reporter);
        assert_eq!(reports.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(reporter.errors().len(), 1);
    }
}
