//! Validator for award membership lists.
//!
//! Records are `;`-separated; the third column is the membership start date,
//! `YYYY-MM` or `YYYY-MM-DD`, or `-` when unknown.

use cqrlog_rules::{FieldSet, MEMBERSHIP_DELIMITER, Violation, YearCheck, membership_date_ok};

const START_DATE: usize = 2;

/// Marker for an unknown start date.
const NO_START_DATE: &str = "-";

/// Day used when the start date carries only year and month.
const DEFAULT_DAY: &str = "1";

/// Validate one record. Header lines must be filtered out by the caller.
///
/// Records with fewer than three columns, or with `-` as start date, carry
/// nothing to check and pass.
#[must_use]
pub fn validate_membership(line_number: usize, line: &str, year_check: YearCheck) -> Vec<Violation> {
    let fields = FieldSet::split(line, MEMBERSHIP_DELIMITER);
    if !fields.has(START_DATE) {
        return Vec::new();
    }

    let start_date = fields.get(START_DATE);
    if start_date == NO_START_DATE {
        return Vec::new();
    }

    let parts: Vec<&str> = start_date.split('-').collect();
    let valid = match parts.as_slice() {
        [year, month] => membership_date_ok(DEFAULT_DAY, month, year, year_check),
        [year, month, day] => membership_date_ok(day, month, year, year_check),
        _ => false,
    };

    if valid {
        Vec::new()
    } else {
        vec![Violation::MembershipDate {
            line_number,
            line: line.to_owned(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(line: &str) -> Vec<Violation> {
        validate_membership(3, line, YearCheck::Vestigial)
    }

    #[test]
    fn test_year_month_date() {
        assert!(check("1;OK1RR;2020-06").is_empty());
        assert!(check("1;OK1RR;2020-06;Praha").is_empty());
        assert!(check("1;OK1RR;2020-00").is_empty());
        assert_eq!(check("1;OK1RR;2020-13").len(), 1);
    }

    #[test]
    fn test_full_date() {
        assert!(check("7;DL1ABC;1999-12-31").is_empty());
        assert!(check("7;DL1ABC;1999-12-00").is_empty());
        assert!(check("7;DL1ABC;1999-02-32").is_empty());
        assert_eq!(check("7;DL1ABC;1999-02-33").len(), 1);
        assert_eq!(check("7;DL1ABC;1999-x-01").len(), 1);
    }

    #[test]
    fn test_skipped_records() {
        assert!(check("7;DL1ABC").is_empty());
        assert!(check("").is_empty());
        assert!(check("7;DL1ABC;-").is_empty());
        assert!(check("7;DL1ABC;-;2021-01-01").is_empty());
    }

    #[test]
    fn test_wrong_shape() {
        let errors = validate_membership(12, "7;DL1ABC;1999", YearCheck::Vestigial);
        assert_eq!(
            errors,
            vec![Violation::MembershipDate {
                line_number: 12,
                line: "7;DL1ABC;1999".to_owned(),
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "Line number 12 has wrong date format: 7;DL1ABC;1999"
        );

        assert_eq!(check("7;DL1ABC;1999-01-01-01").len(), 1);
        assert_eq!(check("7;DL1ABC;").len(), 1);
    }

    #[test]
    fn test_year_check_is_configurable() {
        assert!(validate_membership(3, "1;X;1850-01", YearCheck::Vestigial).is_empty());
        assert_eq!(validate_membership(3, "1;X;1850-01", YearCheck::Bounded).len(), 1);
    }
}
