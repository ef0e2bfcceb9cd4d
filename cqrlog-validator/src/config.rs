//! Configuration types for CQRLOG data validation.
//!
//! Split into core validation config (rule behaviour, shared by every file
//! format) and source-specific config (where the files live and how they are
//! found). Command-line defaults live in the CLI, not here.

use std::path::PathBuf;

pub use cqrlog_rules::YearCheck;

/// Files that must all be present in a DXCC data directory.
///
/// Only a subset is checked line by line (see [`crate::format::DXCC_TABLES`]);
/// the rest are existence-checked.
pub const REQUIRED_DXCC_FILES: [&str; 14] = [
    "Ambiguous.tbl",
    "AreaOK1RR.tbl",
    "CallResolution.tbl",
    "Country.tab",
    "CountryDel.tab",
    "eqsl.txt",
    "Exceptions.tab",
    "iota.tbl",
    "lotw1.txt",
    "MASTER.SCP",
    "prop_mode.tab",
    "README",
    "sat_name.tab",
    "us_states.tab",
];

/// Number of header lines at the top of each membership list.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// File name pattern of membership lists.
pub const DEFAULT_MEMBERSHIP_PATTERN: &str = "*.txt";

/// Core validation config: applies regardless of input source.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// How membership start years are checked.
    pub year_check: YearCheck,
}

/// Where to find the DXCC tables.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DxccSourceConfig {
    /// Directory holding the tables.
    pub data_dir: PathBuf,
    /// File names that must exist before any file is checked.
    pub required_files: Vec<String>,
}

impl DxccSourceConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for DxccSourceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            required_files: REQUIRED_DXCC_FILES.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

/// Where to find the membership lists.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MembershipSourceConfig {
    /// Directory holding the lists. Not searched recursively.
    pub data_dir: PathBuf,
    /// Glob pattern matched against file names in `data_dir`.
    pub pattern: String,
    /// Leading lines of every list that are never validated.
    pub header_lines: usize,
}

impl MembershipSourceConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for MembershipSourceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            pattern: DEFAULT_MEMBERSHIP_PATTERN.to_owned(),
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}
