//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;

/// Every finding on one line, in the order the rules ran.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct LineFinding {
    /// Line number (1-indexed).
    pub line_number: usize,
    /// The line as read, without its terminator.
    pub line: String,
    /// Human-readable messages, never empty.
    pub messages: Vec<String>,
}

/// Result of checking one file.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileReport {
    pub file: PathBuf,
    /// Lines read, including skipped header lines.
    pub lines_checked: usize,
    pub findings: Vec<LineFinding>,
}

impl FileReport {
    pub(crate) fn new(file: PathBuf) -> Self {
        Self {
            file,
            lines_checked: 0,
            findings: Vec::new(),
        }
    }
}

/// Result of a validation run over a directory.
///
/// Line findings never fail a run; a non-empty `scan_errors` means some file
/// was not fully checked and should be treated as a failure.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Files read to the end.
    pub files: Vec<FileReport>,
    /// Files that could not be read completely.
    pub scan_errors: Vec<ScanError>,
    /// Whether no line had a finding and no scan error occurred.
    pub ok: bool,
}

impl ValidationReport {
    pub(crate) fn from_parts(files: Vec<FileReport>, scan_errors: Vec<ScanError>) -> Self {
        let ok = scan_errors.is_empty() && files.iter().all(|f| f.findings.is_empty());
        Self {
            files,
            scan_errors,
            ok,
        }
    }

    /// Number of files read to the end.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Total number of lines read.
    #[must_use]
    pub fn lines_checked(&self) -> usize {
        self.files.iter().map(|f| f.lines_checked).sum()
    }

    /// Number of lines with at least one finding.
    #[must_use]
    pub fn findings_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    /// Number of individual messages across all lines.
    #[must_use]
    pub fn messages_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.findings)
            .map(|finding| finding.messages.len())
            .sum()
    }
}
