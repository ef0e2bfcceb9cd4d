use colored::Colorize;
use cqrlog_validator::Reporter;

/// Prints findings to stdout as they are found.
///
/// Progress lines are bold green and underlined, errors bold red, and the
/// offending line or `DONE` marker bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self, message: &str) {
        println!("{}", message.bold().green().underline());
    }

    fn error(&mut self, message: &str) {
        println!("{}", message.bold().red());
    }

    fn note(&mut self, message: &str) {
        println!("{}", message.bold());
    }
}
