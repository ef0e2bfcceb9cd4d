//! # cqrlog-validator
//!
//! Line-by-line structural checker for the CQRLOG DXCC tables and award
//! membership lists.
//!
//! This crate separates the **format validators** (pure functions from one
//! line to its findings) from the **filesystem strategy** that locates files
//! and streams them. Findings are pushed to a [`Reporter`] as they are found
//! and also collected into a [`ValidationReport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cqrlog_validator::{
//!     CollectingReporter, DxccSourceConfig, ValidationConfig, check_dxcc_dir,
//! };
//!
//! let source = DxccSourceConfig::new("dxcc_tables");
//! let mut reporter = CollectingReporter::new();
//!
//! let report = check_dxcc_dir(&source, &ValidationConfig::default(), &mut reporter).unwrap();
//! println!("Files checked: {}", report.files_checked());
//! println!("Lines with errors: {}", report.findings_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod format;
pub mod output;
mod report;
mod strategy;

pub use config::{
    DEFAULT_HEADER_LINES, DEFAULT_MEMBERSHIP_PATTERN, DxccSourceConfig, MembershipSourceConfig,
    REQUIRED_DXCC_FILES, ValidationConfig, YearCheck,
};
pub use error::{ScanError, ScanErrorKind, SetupError};
pub use format::{DXCC_TABLES, TableFormat};
pub use output::{CollectingReporter, Reporter, SilentReporter};
pub use report::{FileReport, LineFinding, ValidationReport};
pub use strategy::fs::check_file;

use std::path::PathBuf;

use strategy::fs::{check_files, ensure_directory, find_matching_files, find_missing_files};
use tracing::info;

/// Check a directory of DXCC tables.
///
/// Every file in `source.required_files` must exist before anything is
/// checked; the tables listed in [`DXCC_TABLES`] are then validated in order.
///
/// # Errors
///
/// Returns [`SetupError::MissingDirectory`] if `source.data_dir` is not a
/// directory, or [`SetupError::MissingFiles`] listing every absent required file.
/// Unreadable tables are reported in `report.scan_errors` instead.
pub fn check_dxcc_dir(
    source: &DxccSourceConfig,
    config: &ValidationConfig,
    reporter: &mut dyn Reporter,
) -> Result<ValidationReport, SetupError> {
    ensure_directory(&source.data_dir)?;

    let missing = find_missing_files(&source.data_dir, &source.required_files);
    if !missing.is_empty() {
        return Err(SetupError::MissingFiles(missing));
    }

    let files: Vec<(PathBuf, TableFormat)> = DXCC_TABLES
        .iter()
        .map(|&(name, format)| (source.data_dir.join(name), format))
        .collect();

    let (reports, scan_errors) = check_files(&files, config, reporter);
    let report = ValidationReport::from_parts(reports, scan_errors);
    info!(
        files = report.files_checked(),
        findings = report.findings_count(),
        "DXCC tables checked"
    );
    Ok(report)
}

/// Check every membership list matching `source.pattern` in `source.data_dir`.
///
/// An empty directory yields an empty, successful report.
///
/// # Errors
///
/// Returns [`SetupError::MissingDirectory`] if `source.data_dir` is not a
/// directory, or [`SetupError::InvalidPattern`] for a malformed pattern.
pub fn check_membership_dir(
    source: &MembershipSourceConfig,
    config: &ValidationConfig,
    reporter: &mut dyn Reporter,
) -> Result<ValidationReport, SetupError> {
    ensure_directory(&source.data_dir)?;

    let (paths, mut scan_errors) = find_matching_files(&source.data_dir, &source.pattern)?;
    for scan_err in &scan_errors {
        reporter.error(&scan_err.format_human_readable());
    }

    let format = TableFormat::Membership {
        header_lines: source.header_lines,
    };
    let files: Vec<(PathBuf, TableFormat)> = paths.into_iter().map(|path| (path, format)).collect();

    let (reports, file_errors) = check_files(&files, config, reporter);
    scan_errors.extend(file_errors);

    let report = ValidationReport::from_parts(reports, scan_errors);
    info!(
        files = report.files_checked(),
        findings = report.findings_count(),
        "membership lists checked"
    );
    Ok(report)
}
