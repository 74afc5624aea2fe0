//! SQL seed file rendering.
//!
//! All string-literal escaping lives here: every embedded single quote
//! is doubled before interpolation, for every text field. Numeric
//! fields are rendered as bare decimal literals. An empty record set
//! renders to `None` so the caller can skip the file entirely.

use crate::models::{LegacyMeteoriteRow, UnifiedRecord};
use std::fmt::Write;

/// Double embedded single quotes for use inside a SQL string literal
pub fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// Render one `INSERT` statement per unified record, targeting the
/// unified column set. Returns `None` for an empty input.
pub fn render_unified(table: &str, records: &[UnifiedRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut out = String::new();
    for record in records {
        // writing to a String cannot fail
        let _ = writeln!(
            out,
            "INSERT INTO {} (dataset_type, name, lat, lon, value, unit, metadata) \
             VALUES ('{}', '{}', {}, {}, {}, '{}', '{}');",
            table,
            record.dataset_type,
            escape_literal(&record.name),
            record.lat,
            record.lon,
            record.value,
            escape_literal(&record.unit),
            escape_literal(&record.metadata),
        );
    }
    Some(out)
}

/// Render the legacy meteorite seed as a single multi-row `INSERT`
/// targeting the wide `locations` schema. Returns `None` for an empty
/// input.
pub fn render_legacy_seed(table: &str, rows: &[LegacyMeteoriteRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut out = format!(
        "INSERT INTO {} (id, name, nametype, recclass, mass, fall, year, latitude, longitude) VALUES\n",
        table
    );
    let tuples: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "({}, '{}', '{}', '{}', {}, '{}', {}, {}, {})",
                row.id,
                escape_literal(&row.name),
                escape_literal(&row.nametype),
                escape_literal(&row.recclass),
                row.mass,
                escape_literal(&row.fall),
                row.year,
                row.lat,
                row.lon,
            )
        })
        .collect();
    out.push_str(&tuples.join(",\n"));
    out.push_str(";\n");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatasetFamily;

    fn record(name: &str) -> UnifiedRecord {
        UnifiedRecord {
            dataset_type: DatasetFamily::Meteorite,
            name: name.to_string(),
            lat: -31.2,
            lon: 149.1,
            value: 1500.5,
            unit: "g".to_string(),
            metadata: r#"{"fall":"Found"}"#.to_string(),
        }
    }

    #[test]
    fn test_escape_literal_doubles_quotes() {
        assert_eq!(escape_literal("O'Brien"), "O''Brien");
        assert_eq!(escape_literal("''"), "''''");
        assert_eq!(escape_literal("plain"), "plain");
    }

    #[test]
    fn test_quote_round_trip() {
        let sql = render_unified("datasets", &[record("O'Brien")]).unwrap();
        assert!(sql.contains("'O''Brien'"));
        // un-doubling the emitted literal recovers the original name
        let literal = "O''Brien".replace("''", "'");
        assert_eq!(literal, "O'Brien");
    }

    #[test]
    fn test_one_statement_per_record() {
        let records = vec![record("A"), record("B"), record("C")];
        let sql = render_unified("datasets", &records).unwrap();
        assert_eq!(sql.matches("INSERT INTO datasets").count(), 3);
        assert_eq!(sql.lines().count(), 3);
        // input order is preserved
        let a = sql.find("'A'").unwrap();
        let b = sql.find("'B'").unwrap();
        let c = sql.find("'C'").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_numeric_fields_unquoted() {
        let sql = render_unified("datasets", &[record("X")]).unwrap();
        assert!(sql.contains("-31.2, 149.1, 1500.5,"));
        assert!(!sql.contains("'-31.2'"));
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert!(render_unified("datasets", &[]).is_none());
        assert!(render_legacy_seed("locations", &[]).is_none());
    }

    #[test]
    fn test_legacy_seed_is_single_statement() {
        let rows = vec![
            LegacyMeteoriteRow {
                id: 1,
                name: "Aachen".to_string(),
                nametype: "Valid".to_string(),
                recclass: "L5".to_string(),
                mass: 21.0,
                fall: "Fell".to_string(),
                year: 1880,
                lat: 50.775,
                lon: 6.08333,
            },
            LegacyMeteoriteRow {
                id: 2,
                name: "D'Orbigny".to_string(),
                nametype: "Valid".to_string(),
                recclass: "Angrite".to_string(),
                mass: 16550.0,
                fall: "Found".to_string(),
                year: 1979,
                lat: -35.1,
                lon: -58.8,
            },
        ];
        let sql = render_legacy_seed("locations", &rows).unwrap();
        assert_eq!(sql.matches("INSERT INTO locations").count(), 1);
        assert_eq!(sql.matches('(').count(), 3); // column list + two tuples
        assert!(sql.contains("'D''Orbigny'"));
        assert!(sql.ends_with(";\n"));
    }
}
