//! Reporting of findings while files are checked, and rendering of the
//! finished report.
//!
//! Styling is not decided here: the [`Reporter`] sink only distinguishes
//! progress, error and note messages. Color/terminal formatting belongs to
//! the CLI layer.

use std::io::Write;

use crate::report::{LineFinding, ValidationReport};

/// Marker emitted after each file has been read to the end.
pub const DONE_MARKER: &str = "DONE";

/// Destination of the messages produced while a run is in progress.
pub trait Reporter {
    /// A "Processing ..." style status line.
    fn progress(&mut self, message: &str);
    /// A finding or a setup failure.
    fn error(&mut self, message: &str);
    /// Context for the preceding errors, such as the offending line.
    fn note(&mut self, message: &str);
}

/// One message captured by [`CollectingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Progress(String),
    Error(String),
    Note(String),
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    pub events: Vec<ReportEvent>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The error messages only.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn progress(&mut self, message: &str) {
        self.events.push(ReportEvent::Progress(message.to_owned()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(ReportEvent::Error(message.to_owned()));
    }

    fn note(&mut self, message: &str) {
        self.events.push(ReportEvent::Note(message.to_owned()));
    }
}

/// Discards everything. Used when only the final report is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn progress(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
    fn note(&mut self, _message: &str) {}
}

/// Emit every message of a finding as an error, then the line itself as a note.
pub fn report_line(reporter: &mut dyn Reporter, finding: &LineFinding) {
    if finding.messages.is_empty() {
        return;
    }
    for message in &finding.messages {
        reporter.error(message);
    }
    reporter.note(&finding.line);
}

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write a short plain-text summary of a finished run.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  Files checked:     {}", report.files_checked())?;
    writeln!(writer, "  Files failed:      {}", report.scan_errors.len())?;
    writeln!(writer, "  Lines checked:     {}", report.lines_checked())?;
    writeln!(writer, "  Lines with errors: {}", report.findings_count())?;
    writeln!(writer, "  Errors found:      {}", report.messages_count())?;
    writeln!(writer, "{}", "=".repeat(60))?;

    for scan_err in &report.scan_errors {
        writeln!(writer, "{}", scan_err.format_human_readable())?;
    }

    if report.ok {
        writeln!(writer, "All {} files passed validation", report.files_checked())?;
    } else if !report.scan_errors.is_empty() {
        writeln!(
            writer,
            "{} file(s) could not be read completely",
            report.scan_errors.len()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_errors_then_note() {
        let finding = LineFinding {
            line_number: 3,
            line: "XX|".to_owned(),
            messages: vec!["first".to_owned(), "second".to_owned()],
        };
        let mut reporter = CollectingReporter::new();
        report_line(&mut reporter, &finding);
        assert_eq!(
            reporter.events,
            vec![
                ReportEvent::Error("first".to_owned()),
                ReportEvent::Error("second".to_owned()),
                ReportEvent::Note("XX|".to_owned()),
            ]
        );
    }

    #[test]
    fn test_report_line_clean_line_is_silent() {
        let finding = LineFinding {
            line_number: 1,
            line: "ok".to_owned(),
            messages: Vec::new(),
        };
        let mut reporter = CollectingReporter::new();
        report_line(&mut reporter, &finding);
        assert!(reporter.events.is_empty());
    }

    #[test]
    fn test_summary_for_empty_run() {
        let report = ValidationReport::from_parts(Vec::new(), Vec::new());
        let mut buf = Vec::new();
        write_summary(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Files checked:     0"));
        assert!(text.contains("All 0 files passed validation"));
    }
}
