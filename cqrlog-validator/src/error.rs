//! Error types for CQRLOG data validation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// A problem with the run itself, found before any line is validated.
///
/// These abort the run and should map to a non-zero exit code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetupError {
    /// The data directory does not exist or is not a directory.
    #[error("Directory {} does not exist!", .0.display())]
    MissingDirectory(PathBuf),

    /// One or more required files are absent. All of them are listed.
    #[error("{} required file(s) missing", .0.len())]
    MissingFiles(Vec<PathBuf>),

    /// The file name pattern could not be parsed.
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl SetupError {
    /// One human-readable line per problem, in discovery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::MissingFiles(files) => files
                .iter()
                .map(|file| format!("File {} does not exist", file.display()))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

/// The kind of scan-level failure that prevented a file from being validated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while opening or reading the file.
    IoError,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A directory entry matched the pattern but could not be read.
    WalkError,
}

/// A file that could not be validated completely.
///
/// Distinct from a line finding: a `ScanError` means the checker did not
/// cover the whole file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    pub(crate) fn open(file: &Path, err: &std::io::Error) -> Self {
        Self {
            file: file.to_owned(),
            kind: ScanErrorKind::IoError,
            message: format!("Failed to open file: {err}"),
        }
    }

    pub(crate) fn read(file: &Path, line_number: usize, err: &std::io::Error) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::InvalidData {
            ScanErrorKind::InvalidEncoding
        } else {
            ScanErrorKind::IoError
        };
        Self {
            file: file.to_owned(),
            kind,
            message: format!("Failed to read line {line_number}: {err}"),
        }
    }

    pub(crate) fn walk(err: &glob::GlobError) -> Self {
        Self {
            file: err.path().to_owned(),
            kind: ScanErrorKind::WalkError,
            message: format!("Directory listing error: {}", err.error()),
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
