//! Field-level checkers for CQRLOG data files.
//!
//! This crate holds the primitive rules shared by every table format: numeric
//! tests, continent codes, coordinate suffixes, ITU/WAZ zones, validity date
//! ranges, ADIF annotations and membership dates. It performs no I/O.
//!
//! Checkers come in two shapes, fixed per checker:
//! - `is_*` / `*_ok` functions return a plain verdict.
//! - `check_*` functions append zero or more [`Violation`]s to an accumulator,
//!   so a caller can run every rule on a line and report all findings at once.
//!
//! ```
//! use cqrlog_rules::{ZoneKind, check_zone};
//!
//! let mut errors = Vec::new();
//! check_zone("3-5", ZoneKind::Itu, &mut errors);
//! check_zone("41", ZoneKind::Waz, &mut errors);
//! assert_eq!(errors.len(), 1);
//! ```

mod dates;
mod fields;
mod geo;
mod numeric;
mod violation;

pub use dates::{
    DATE_FORMAT, YearCheck, check_adif, check_validity_range, is_calendar_date, membership_date_ok,
};
pub use fields::{DXCC_DELIMITER, DXCC_FIELD_COUNT, FieldSet, MEMBERSHIP_DELIMITER};
pub use geo::{
    CONTINENTS, ZoneKind, check_continent, check_east_west_suffix, check_north_south_suffix,
    check_utc_offset, check_zone, is_continent,
};
pub use numeric::{is_number, is_only_digits, parse_lenient_int};
pub use violation::{DateRole, Violation};
