//! Delimiter-split view of one raw line.

/// Separator between fields of the DXCC tables (`Country.tab`, `AreaOK1RR.tbl`, ...).
pub const DXCC_DELIMITER: char = '|';

/// Separator between fields of membership records.
pub const MEMBERSHIP_DELIMITER: char = ';';

/// Number of fields every DXCC table line must have.
///
/// Layout: prefix, unused, continent, UTC offset, longitude (`W`/`E`),
/// latitude (`N`/`S`), ITU zone, WAZ zone, empty spacer, literal `R`,
/// ADIF validity string.
pub const DXCC_FIELD_COUNT: usize = 11;

/// The fields of one line, borrowed from the line itself.
///
/// Lines with too few fields are still validated: [`FieldSet::get`] yields an
/// empty string for any index past the end instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet<'a> {
    fields: Vec<&'a str>,
}

impl<'a> FieldSet<'a> {
    /// Split `line` on `delimiter`. An empty line yields one empty field.
    #[must_use]
    pub fn split(line: &'a str, delimiter: char) -> Self {
        Self {
            fields: line.split(delimiter).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a field exists at `index`.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        index < self.fields.len()
    }

    /// The field at `index`, or `""` when the line is too short.
    #[must_use]
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// The last field, or `""` for a set without fields.
    #[must_use]
    pub fn last(&self) -> &'a str {
        self.fields.last().copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dxcc_line() {
        let fields = FieldSet::split("3Y/B|Bouvet|AN|+1.0|3.38E|54.42S|67|38||R|=24", DXCC_DELIMITER);
        assert_eq!(fields.len(), DXCC_FIELD_COUNT);
        assert_eq!(fields.get(0), "3Y/B");
        assert_eq!(fields.get(8), "");
        assert_eq!(fields.last(), "=24");
    }

    #[test]
    fn test_missing_index_reads_empty() {
        let fields = FieldSet::split("a;b", MEMBERSHIP_DELIMITER);
        assert!(fields.has(1));
        assert!(!fields.has(2));
        assert_eq!(fields.get(7), "");
    }

    #[test]
    fn test_empty_line_has_one_field() {
        let fields = FieldSet::split("", DXCC_DELIMITER);
        assert_eq!(fields.len(), 1);
        assert!(!fields.is_empty());
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![""]);
    }
}
