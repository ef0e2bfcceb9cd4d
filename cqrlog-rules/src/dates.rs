//! Calendar dates, validity windows, ADIF annotations and membership dates.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::numeric::{is_number, is_only_digits, parse_lenient_int};
use crate::violation::{DateRole, Violation};

/// Format of every date in the DXCC tables.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Four-digit year; month and day may drop their leading zero.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid date regex: {err}"),
    });

/// How the year of a membership date is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearCheck {
    /// Accept any year that parses; only its digits are checked.
    #[default]
    Vestigial,
    /// Require `1900 <= year <= 2100`.
    Bounded,
}

impl YearCheck {
    #[must_use]
    pub fn accepts(self, year: u32) -> bool {
        match self {
            Self::Vestigial => true,
            Self::Bounded => (1900..=2100).contains(&year),
        }
    }
}

/// Whether `value` is a real calendar date in `YYYY/MM/DD` form.
///
/// Signs, padding and short years are rejected before chrono sees the value.
#[must_use]
pub fn is_calendar_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

fn check_date(value: &str, role: DateRole, errors: &mut Vec<Violation>) {
    if !is_calendar_date(value) {
        errors.push(Violation::InvalidDate {
            role,
            value: value.to_owned(),
        });
    }
}

/// Check a validity window: `DATE`, `-DATE`, `DATE-` or `DATE-DATE`.
///
/// A blank value means "no restriction" and passes.
pub fn check_validity_range(dates: &str, errors: &mut Vec<Violation>) {
    let trimmed = dates.trim();
    if trimmed.is_empty() {
        return;
    }

    if !dates.contains('-') {
        check_date(dates, DateRole::Single, errors);
    } else if let Some(end) = dates.strip_prefix('-') {
        check_date(end, DateRole::To, errors);
    } else if let Some(start) = trimmed.strip_suffix('-') {
        check_date(start, DateRole::From, errors);
    } else if let Some((from, to)) = dates.split_once('-')
        && !to.contains('-')
    {
        if !from.is_empty() {
            check_date(from, DateRole::From, errors);
        }
        if !to.is_empty() {
            check_date(to, DateRole::To, errors);
        }
    } else {
        errors.push(Violation::MalformedDateRange(dates.to_owned()));
    }
}

/// Check the ADIF column: `[RANGE]=NUMBER`, or `=NUMBER` for deleted entities.
pub fn check_adif(value: &str, errors: &mut Vec<Violation>) {
    if let Some(rest) = value.strip_prefix('=') {
        let id = rest.trim();
        if id.is_empty() || !is_only_digits(id) {
            errors.push(Violation::AdifFormat(value.trim().to_owned()));
        }
        return;
    }

    let Some((dates, id)) = value.split_once('=') else {
        errors.push(Violation::AdifMissing(value.trim().to_owned()));
        return;
    };
    if id.contains('=') {
        errors.push(Violation::AdifFormat(value.trim().to_owned()));
        return;
    }

    check_validity_range(dates, errors);

    let id = id.trim();
    if !is_number(id) {
        errors.push(Violation::AdifNumber(id.to_owned()));
    }
}

/// Whether a membership start date is acceptable.
///
/// All parts must be digits. A day of `"00"` or month of `"00"` stands for
/// "unknown" and is not range checked. The day bound is 32, not the length
/// of the month.
#[must_use]
pub fn membership_date_ok(day: &str, month: &str, year: &str, year_check: YearCheck) -> bool {
    if ![day, month, year].into_iter().all(is_only_digits) {
        return false;
    }

    if day != "00" && !parse_lenient_int(day).is_ok_and(|day| day <= 32) {
        return false;
    }
    if month != "00" && !parse_lenient_int(month).is_ok_and(|month| month <= 12) {
        return false;
    }

    parse_lenient_int(year).is_ok_and(|year| year_check.accepts(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_errors(dates: &str) -> Vec<Violation> {
        let mut errors = Vec::new();
        check_validity_range(dates, &mut errors);
        errors
    }

    fn adif_errors(value: &str) -> Vec<Violation> {
        let mut errors = Vec::new();
        check_adif(value, &mut errors);
        errors
    }

    #[test]
    fn test_calendar_date_is_strict() {
        assert!(is_calendar_date("2001/01/01"));
        assert!(is_calendar_date("2000/02/29"));
        assert!(!is_calendar_date("2001/02/29"));
        assert!(!is_calendar_date("2001/04/31"));
        assert!(!is_calendar_date("2001-01-01"));
        assert!(!is_calendar_date(""));
    }

    #[test]
    fn test_calendar_date_shape() {
        assert!(is_calendar_date("2001/1/9"));
        for bad in [
            "200/01/01",
            "+2001/01/01",
            "-2001/01/01",
            " 2001/01/01",
            "2001/01/01 ",
            "02001/01/01",
            "2001/001/01",
            "2001/+1/01",
        ] {
            assert!(!is_calendar_date(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_padded_range_half_is_reported() {
        assert_eq!(
            range_errors("1945/05/09- 1973/09/17"),
            vec![Violation::InvalidDate {
                role: DateRole::To,
                value: " 1973/09/17".to_owned(),
            }]
        );
        assert_eq!(adif_errors("+1993/01/01-=503").len(), 1);
    }

    #[test]
    fn test_validity_range_shapes() {
        assert!(range_errors("").is_empty());
        assert!(range_errors("  ").is_empty());
        assert!(range_errors("2001/01/01").is_empty());
        assert!(range_errors("-2001/01/01").is_empty());
        assert!(range_errors("2001/01/01-").is_empty());
        assert!(range_errors("2001/01/01-2002/01/01").is_empty());

        assert_eq!(
            range_errors("2001/01/01-2002/01/01-extra"),
            vec![Violation::MalformedDateRange(
                "2001/01/01-2002/01/01-extra".to_owned()
            )]
        );
    }

    #[test]
    fn test_validity_range_reports_each_half() {
        let errors = range_errors("2001/13/01-2002/02/30");
        assert_eq!(
            errors,
            vec![
                Violation::InvalidDate {
                    role: DateRole::From,
                    value: "2001/13/01".to_owned(),
                },
                Violation::InvalidDate {
                    role: DateRole::To,
                    value: "2002/02/30".to_owned(),
                },
            ]
        );

        assert_eq!(
            range_errors("-2001/00/01"),
            vec![Violation::InvalidDate {
                role: DateRole::To,
                value: "2001/00/01".to_owned(),
            }]
        );
        assert_eq!(
            range_errors("1990/1/32-"),
            vec![Violation::InvalidDate {
                role: DateRole::From,
                value: "1990/1/32".to_owned(),
            }]
        );
        assert_eq!(range_errors("garbage").len(), 1);
    }

    #[test]
    fn test_adif_bare_number() {
        assert!(adif_errors("=123").is_empty());
        assert!(adif_errors("=123 ").is_empty());
        assert_eq!(adif_errors("=12a"), vec![Violation::AdifFormat("=12a".to_owned())]);
        assert_eq!(adif_errors("=").len(), 1);
    }

    #[test]
    fn test_adif_with_dates() {
        assert!(adif_errors("2001/01/01-=123").is_empty());
        assert!(adif_errors("1960/01/01-1990/12/31=060").is_empty());
        assert!(adif_errors("-1990/12/31=60").is_empty());

        assert_eq!(
            adif_errors("2001/01/01"),
            vec![Violation::AdifMissing("2001/01/01".to_owned())]
        );
        assert_eq!(
            adif_errors("2001/01/01=abc"),
            vec![Violation::AdifNumber("abc".to_owned())]
        );
        assert_eq!(
            adif_errors("2001/01/01=1=2"),
            vec![Violation::AdifFormat("2001/01/01=1=2".to_owned())]
        );
    }

    #[test]
    fn test_adif_reports_date_and_number_together() {
        let errors = adif_errors("2001/02/30-=x");
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], Violation::InvalidDate { .. }));
        assert_eq!(errors[1], Violation::AdifNumber("x".to_owned()));
    }

    #[test]
    fn test_membership_day_and_month() {
        let vestigial = YearCheck::Vestigial;
        assert!(membership_date_ok("1", "6", "2020", vestigial));
        assert!(membership_date_ok("00", "00", "2020", vestigial));
        assert!(membership_date_ok("32", "12", "2020", vestigial));
        assert!(!membership_date_ok("33", "12", "2020", vestigial));
        assert!(!membership_date_ok("01", "13", "2020", vestigial));
        assert!(!membership_date_ok("1a", "1", "2020", vestigial));
        assert!(!membership_date_ok("", "1", "2020", vestigial));
        assert!(!membership_date_ok("1", "1", "", vestigial));
    }

    #[test]
    fn test_membership_year_check() {
        assert!(membership_date_ok("1", "1", "1850", YearCheck::Vestigial));
        assert!(membership_date_ok("1", "1", "2500", YearCheck::Vestigial));
        assert!(!membership_date_ok("1", "1", "1850", YearCheck::Bounded));
        assert!(!membership_date_ok("1", "1", "2101", YearCheck::Bounded));
        assert!(membership_date_ok("1", "1", "1900", YearCheck::Bounded));
        assert!(membership_date_ok("1", "1", "2100", YearCheck::Bounded));
    }
}
