//! Validators for the `|`-separated DXCC tables.

use cqrlog_rules::{
    DXCC_DELIMITER, DXCC_FIELD_COUNT, FieldSet, Violation, ZoneKind, check_adif, check_continent,
    check_east_west_suffix, check_north_south_suffix, check_utc_offset, check_validity_range,
    check_zone,
};

const PREFIX: usize = 0;
const CONTINENT: usize = 2;
const UTC_OFFSET: usize = 3;
const LONGITUDE: usize = 4;
const LATITUDE: usize = 5;
const ITU_ZONE: usize = 6;
const WAZ_ZONE: usize = 7;
const SPACER: usize = 8;
const MARKER: usize = 9;
const ADIF: usize = 10;

const MARKER_VALUE: &str = "R";

/// `AreaOK1RR.tbl`: prefix, location columns and ADIF annotation.
#[must_use]
pub fn validate_area_ok1rr(line: &str) -> Vec<Violation> {
    let fields = FieldSet::split(line, DXCC_DELIMITER);
    let mut errors = Vec::new();

    check_field_count(&fields, &mut errors);
    check_prefix(&fields, &mut errors);
    check_common_parts(&fields, &mut errors);

    errors
}

/// `CallResolution.tbl`: every call sign in the first column is `=`-prefixed.
#[must_use]
pub fn validate_call_resolution(line: &str) -> Vec<Violation> {
    let fields = FieldSet::split(line, DXCC_DELIMITER);
    let mut errors = Vec::new();

    if !line.starts_with('=') {
        errors.push(Violation::MissingLeadingEquals);
    }
    check_field_count(&fields, &mut errors);

    let mut callsigns = fields
        .get(PREFIX)
        .split(' ')
        .filter(|callsign| !callsign.is_empty())
        .peekable();
    if callsigns.peek().is_none() {
        errors.push(Violation::NoCallsigns);
    } else if !callsigns.all(|callsign| callsign.starts_with('=')) {
        errors.push(Violation::CallsignWithoutEquals);
    }

    check_common_parts(&fields, &mut errors);

    errors
}

/// `Country.tab` and `CountryDel.tab`: location columns and a validity window
/// in the last column.
///
/// The window may be followed by the `=NUMBER` entity id; only the part before
/// `=` is checked here.
#[must_use]
pub fn validate_country(line: &str) -> Vec<Violation> {
    let fields = FieldSet::split(line, DXCC_DELIMITER);
    let mut errors = Vec::new();

    check_field_count(&fields, &mut errors);
    check_prefix(&fields, &mut errors);
    check_location(&fields, &mut errors);

    let last = fields.last().trim();
    let window = last.split_once('=').map_or(last, |(dates, _)| dates);
    check_validity_range(window, &mut errors);

    errors
}

fn check_field_count(fields: &FieldSet<'_>, errors: &mut Vec<Violation>) {
    if fields.len() != DXCC_FIELD_COUNT {
        errors.push(Violation::FieldCount {
            expected: DXCC_FIELD_COUNT,
            found: fields.len(),
        });
    }
}

fn check_prefix(fields: &FieldSet<'_>, errors: &mut Vec<Violation>) {
    if fields.get(PREFIX).trim().is_empty() {
        errors.push(Violation::MissingPrefix);
    }
}

fn check_location(fields: &FieldSet<'_>, errors: &mut Vec<Violation>) {
    check_continent(fields.get(CONTINENT), errors);
    check_utc_offset(fields.get(UTC_OFFSET), errors);
    check_east_west_suffix(fields.get(LONGITUDE), errors);
    check_north_south_suffix(fields.get(LATITUDE), errors);
    check_zone(fields.get(ITU_ZONE), ZoneKind::Itu, errors);
    check_zone(fields.get(WAZ_ZONE), ZoneKind::Waz, errors);
}

/// Columns shared by `AreaOK1RR.tbl` and `CallResolution.tbl`.
fn check_common_parts(fields: &FieldSet<'_>, errors: &mut Vec<Violation>) {
    let spacer = fields.get(SPACER);
    if !spacer.is_empty() {
        errors.push(Violation::SpacerNotEmpty(spacer.to_owned()));
    }

    let marker = fields.get(MARKER);
    if marker != MARKER_VALUE {
        errors.push(Violation::MarkerNotR(marker.to_owned()));
    }

    check_location(fields, errors);
    check_adif(fields.get(ADIF), errors);
}
