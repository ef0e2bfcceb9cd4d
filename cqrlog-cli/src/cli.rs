use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use cqrlog_validator::output::{write_json, write_summary};
use cqrlog_validator::{
    DEFAULT_HEADER_LINES, DxccSourceConfig, MembershipSourceConfig, Reporter, SetupError,
    SilentReporter, ValidationConfig, ValidationReport, YearCheck, check_dxcc_dir,
    check_membership_dir,
};
use tracing::debug;

use crate::console::ConsoleReporter;
use crate::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "cqrlog-check",
    version,
    about = "Check CQRLOG DXCC tables and membership lists for structural errors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format: streamed human-readable findings or a JSON report
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    pub format: OutputFormat,

    /// Reject membership start years outside 1900-2100
    #[arg(long, global = true)]
    pub strict_year: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check the DXCC tables in a directory
    Dxcc {
        /// Directory holding the DXCC tables
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Check the award membership lists (*.txt) in a directory
    Members {
        /// Directory holding the membership lists
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Number of header lines skipped at the top of each list
        #[arg(long, default_value_t = DEFAULT_HEADER_LINES)]
        header_lines: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Parse the command line and run the selected check.
///
/// Returns `Ok(false)` when the run failed in a way that was already
/// reported to the user (missing directory or files, unreadable files).
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the report cannot be written.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = ValidationConfig::default();
    if cli.strict_year {
        config.year_check = YearCheck::Bounded;
    }
    debug!(strict_year = cli.strict_year, "configuration loaded");

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(true);
    };

    match command {
        Command::Dxcc { dir } => {
            let Some(dir) = dir else {
                print_subcommand_help("dxcc")?;
                return Ok(true);
            };
            let source = DxccSourceConfig::new(dir);
            run_check(cli.format, |reporter| {
                check_dxcc_dir(&source, &config, reporter)
            })
        }
        Command::Members { dir, header_lines } => {
            let Some(dir) = dir else {
                print_subcommand_help("members")?;
                return Ok(true);
            };
            let mut source = MembershipSourceConfig::new(dir);
            source.header_lines = header_lines;
            run_check(cli.format, |reporter| {
                check_membership_dir(&source, &config, reporter)
            })
        }
    }
}

fn run_check<F>(format: OutputFormat, check: F) -> Result<bool>
where
    F: FnOnce(&mut dyn Reporter) -> Result<ValidationReport, SetupError>,
{
    let result = match format {
        OutputFormat::Human => check(&mut ConsoleReporter),
        OutputFormat::Json => check(&mut SilentReporter),
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            print_setup_error(format, &err);
            return Ok(false);
        }
    };

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Human => write_summary(&report, &mut stdout)?,
        OutputFormat::Json => write_json(&report, &mut stdout)?,
    }

    Ok(report.scan_errors.is_empty())
}

fn print_setup_error(format: OutputFormat, err: &SetupError) {
    for message in err.messages() {
        match format {
            OutputFormat::Human => ConsoleReporter.error(&message),
            // stdout is reserved for the JSON document
            OutputFormat::Json => eprintln!("{message}"),
        }
    }
    debug!(error = %err, "setup failed");
}

fn print_subcommand_help(name: &str) -> Result<()> {
    let mut command = Cli::command();
    command.build();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        subcommand.print_help()?;
    }
    Ok(())
}
