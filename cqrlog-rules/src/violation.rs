//! Rule violations reported for a single line.

use std::fmt;

use thiserror::Error;

use crate::geo::ZoneKind;

/// Which end of a validity window a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    /// A lone date with no range separator.
    Single,
    /// The first half of a range (`DATE-` or `DATE-DATE`).
    From,
    /// The second half of a range (`-DATE` or `DATE-DATE`).
    To,
}

impl fmt::Display for DateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("date"),
            Self::From => f.write_str("date_from"),
            Self::To => f.write_str("date_to"),
        }
    }
}

/// A single finding on one line of a data file.
///
/// The `Display` output is the message shown to the user; variants carry the
/// offending value so callers and tests can match on the kind of failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    #[error("Line has to have {expected} values separated by |, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Prefix is missing")]
    MissingPrefix,

    #[error("Line has to start with \"=\"")]
    MissingLeadingEquals,

    #[error("Line has no callsigns")]
    NoCallsigns,

    #[error("All callsigns have to start with \"=\"")]
    CallsignWithoutEquals,

    #[error("Ninth item in the structure has to be empty, now is {0}")]
    SpacerNotEmpty(String),

    #[error("Tenth item has to be letter R, now is {0}")]
    MarkerNotR(String),

    #[error("Invalid continent {0}")]
    InvalidContinent(String),

    #[error("Invalid UTC offset {0}")]
    InvalidUtcOffset(String),

    #[error("Latitude has to end with N or S {0}")]
    NorthSouthSuffix(String),

    #[error("Longitude has to end with W or E {0}")]
    EastWestSuffix(String),

    #[error("{kind} zone has wrong format, it has to be a number, now it is {value}")]
    ZoneFormat { kind: ZoneKind, value: String },

    #[error("{kind} zone has to be between 0-{max}, now it is {value}", max = .kind.max())]
    ZoneOutOfRange { kind: ZoneKind, value: String },

    #[error("Invalid {role}: {value}")]
    InvalidDate { role: DateRole, value: String },

    #[error("Invalid date range {0}")]
    MalformedDateRange(String),

    #[error("Wrong ADIF format: {0}")]
    AdifFormat(String),

    #[error("ADIF information is missing in {0}")]
    AdifMissing(String),

    #[error("ADIF number is not correct: {0}")]
    AdifNumber(String),

    #[error("Wrong IOTA format: {0}")]
    IotaFormat(String),

    #[error("Line number {line_number} has wrong date format: {line}")]
    MembershipDate { line_number: usize, line: String },
}
