//! Validator for `iota.tbl`.

use cqrlog_rules::{DXCC_DELIMITER, FieldSet, Violation, is_continent, is_only_digits};

/// Length of the numeric part of an IOTA designator (`EU-005`).
const IOTA_NUMBER_LEN: usize = 3;

/// The first column must be an IOTA designator, `CONTINENT-NNN`.
#[must_use]
pub fn validate_iota(line: &str) -> Vec<Violation> {
    let fields = FieldSet::split(line, DXCC_DELIMITER);
    let designator = fields.get(0);

    if is_iota_designator(designator) {
        Vec::new()
    } else {
        vec![Violation::IotaFormat(designator.to_owned())]
    }
}

fn is_iota_designator(designator: &str) -> bool {
    let Some((continent, number)) = designator.split_once('-') else {
        return false;
    };
    is_continent(continent) && number.len() == IOTA_NUMBER_LEN && is_only_digits(number)
}
