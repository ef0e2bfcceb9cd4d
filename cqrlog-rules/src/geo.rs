//! Continent, UTC offset, coordinate and zone checks.

use std::fmt;

use crate::numeric::{is_number, is_only_digits, parse_lenient_int};
use crate::violation::Violation;

/// Continent codes accepted in DXCC and IOTA tables.
pub const CONTINENTS: [&str; 7] = ["AF", "AN", "AS", "EU", "NA", "OC", "SA"];

/// Zone numbering scheme, each with its own upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// International Telecommunication Union zones, 0-90.
    Itu,
    /// Worked All Zones (CQ) zones, 0-40.
    Waz,
}

impl ZoneKind {
    /// Highest zone number of the scheme, inclusive.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Itu => 90,
            Self::Waz => 40,
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Itu => f.write_str("ITU"),
            Self::Waz => f.write_str("WAZ"),
        }
    }
}

#[must_use]
pub fn is_continent(value: &str) -> bool {
    CONTINENTS.contains(&value)
}

pub fn check_continent(value: &str, errors: &mut Vec<Violation>) {
    if !is_continent(value) {
        errors.push(Violation::InvalidContinent(value.to_owned()));
    }
}

pub fn check_utc_offset(value: &str, errors: &mut Vec<Violation>) {
    if !is_number(value) {
        errors.push(Violation::InvalidUtcOffset(value.to_owned()));
    }
}

/// A non-empty latitude must end with `N` or `S`.
pub fn check_north_south_suffix(value: &str, errors: &mut Vec<Violation>) {
    if let Some(suffix) = value.chars().last()
        && !matches!(suffix, 'N' | 'S')
    {
        errors.push(Violation::NorthSouthSuffix(value.to_owned()));
    }
}

/// A non-empty longitude must end with `W` or `E`.
pub fn check_east_west_suffix(value: &str, errors: &mut Vec<Violation>) {
    if let Some(suffix) = value.chars().last()
        && !matches!(suffix, 'W' | 'E')
    {
        errors.push(Violation::EastWestSuffix(value.to_owned()));
    }
}

/// Check an optional zone field: empty, a single zone (`"38"`) or a range (`"3-5"`).
///
/// Each side of a range is checked on its own, so `"3-95"` for ITU yields one
/// bound error for `95`.
pub fn check_zone(value: &str, kind: ZoneKind, errors: &mut Vec<Violation>) {
    if value.is_empty() {
        return;
    }

    match value.split_once('-') {
        None => check_single_zone(value, kind, errors),
        Some((first, second)) if !second.contains('-') => {
            check_single_zone(first, kind, errors);
            check_single_zone(second, kind, errors);
        }
        Some(_) => errors.push(Violation::ZoneFormat {
            kind,
            value: value.to_owned(),
        }),
    }
}

fn check_single_zone(zone: &str, kind: ZoneKind, errors: &mut Vec<Violation>) {
    if zone.is_empty() || !is_only_digits(zone) {
        errors.push(Violation::ZoneFormat {
            kind,
            value: zone.to_owned(),
        });
        return;
    }

    // Overflowing digit strings are out of range as well.
    if !parse_lenient_int(zone).is_ok_and(|number| number <= kind.max()) {
        errors.push(Violation::ZoneOutOfRange {
            kind,
            value: zone.to_owned(),
        });
    }
}
