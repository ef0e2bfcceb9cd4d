//! Per-format line validators.
//!
//! Each sub-module handles one family of files:
//! - `dxcc`: `|`-separated tables (`AreaOK1RR.tbl`, `CallResolution.tbl`, `Country.tab`)
//! - `iota`: IOTA island designators
//! - `membership`: `;`-separated award membership lists

pub mod dxcc;
pub mod iota;
pub mod membership;

use cqrlog_rules::Violation;

use crate::config::ValidationConfig;

/// The closed set of file layouts the checker knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Regional sub-prefix table.
    AreaOk1rr,
    /// Call-sign override table, one or more `=CALL` tokens per line.
    CallResolution,
    /// DXCC entity list, current or deleted.
    Country,
    /// IOTA island list.
    Iota,
    /// Membership list whose first `header_lines` lines are skipped.
    Membership { header_lines: usize },
}

/// DXCC tables that are validated line by line, in processing order.
pub const DXCC_TABLES: [(&str, TableFormat); 5] = [
    ("AreaOK1RR.tbl", TableFormat::AreaOk1rr),
    ("CallResolution.tbl", TableFormat::CallResolution),
    ("Country.tab", TableFormat::Country),
    ("CountryDel.tab", TableFormat::Country),
    ("iota.tbl", TableFormat::Iota),
];

impl TableFormat {
    /// Validate one line; an empty result means the line is clean.
    ///
    /// `line_number` is 1-indexed and `line` excludes its terminator.
    #[must_use]
    pub fn validate(self, line_number: usize, line: &str, config: &ValidationConfig) -> Vec<Violation> {
        match self {
            Self::AreaOk1rr => dxcc::validate_area_ok1rr(line),
            Self::CallResolution => dxcc::validate_call_resolution(line),
            Self::Country => dxcc::validate_country(line),
            Self::Iota => iota::validate_iota(line),
            Self::Membership { header_lines } => {
                if line_number <= header_lines {
                    return Vec::new();
                }
                membership::validate_membership(line_number, line, config.year_check)
            }
        }
    }
}
