//! Raw-row access and per-family record normalizers.
//!
//! `ColumnIndex`/`RawRow` give header-indexed, default-tolerant access
//! to CSV records: absent or blank text fields read as empty strings,
//! absent or unparseable numeric fields read as 0, and required
//! coordinates read as `None` so the caller can drop the row. A
//! normalizer never fails a row for a malformed optional field.

pub mod climate;
pub mod meteorite;
pub mod vegetation;
pub mod wind;

use csv::StringRecord;
use std::collections::HashMap;

/// Header-name → column-position lookup built once per input file
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    name_to_index: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from a CSV header record, trimming whitespace
    pub fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();
        Self { name_to_index }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }
}

/// One CSV data record viewed through its file's column index
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    columns: &'a ColumnIndex,
    record: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(columns: &'a ColumnIndex, record: &'a StringRecord) -> Self {
        Self { columns, record }
    }

    /// Trimmed field value, `None` when the column is absent or blank
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.columns
            .position(name)
            .and_then(|index| self.record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Field value with the documented empty-string default
    pub fn text_or_empty(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// Finite numeric field value, `None` when absent or unparseable
    pub fn number(&self, name: &str) -> Option<f64> {
        self.text(name)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// Numeric field with the documented 0 default
    pub fn number_or_zero(&self, name: &str) -> f64 {
        self.number(name).unwrap_or(0.0)
    }

    /// Integer field coerced through f64 (handles "1880.0"), 0 default
    pub fn integer_or_zero(&self, name: &str) -> i64 {
        self.number(name).map(|value| value as i64).unwrap_or(0)
    }

    /// Required coordinate: finite value or `None` (row is then dropped)
    pub fn coordinate(&self, name: &str) -> Option<f64> {
        self.number(name)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::row_fixture;
    use super::*;

    #[test]
    fn test_text_defaults() {
        let (columns, record) = row_fixture(&["name", "blank"], &["  Hoba  ", "   "]);
        let row = RawRow::new(&columns, &record);
        assert_eq!(row.text("name"), Some("Hoba"));
        assert_eq!(row.text("blank"), None);
        assert_eq!(row.text("missing"), None);
        assert_eq!(row.text_or_empty("blank"), "");
    }

    #[test]
    fn test_number_defaults() {
        let (columns, record) = row_fixture(
            &["mass", "bad", "year", "inf"],
            &["9000.5", "heavy", "1880.0", "inf"],
        );
        let row = RawRow::new(&columns, &record);
        assert_eq!(row.number("mass"), Some(9000.5));
        assert_eq!(row.number("bad"), None);
        assert_eq!(row.number_or_zero("bad"), 0.0);
        assert_eq!(row.integer_or_zero("year"), 1880);
        assert_eq!(row.integer_or_zero("absent"), 0);
        // non-finite values never pass through
        assert_eq!(row.number("inf"), None);
    }

    #[test]
    fn test_coordinate_lookup() {
        let (columns, record) = row_fixture(&["reclat", "reclong"], &["-26.4", ""]);
        let row = RawRow::new(&columns, &record);
        assert_eq!(row.coordinate("reclat"), Some(-26.4));
        assert_eq!(row.coordinate("reclong"), None);
    }
}
