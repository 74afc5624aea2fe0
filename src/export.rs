//! Cleaned-CSV export rendering.
//!
//! Renders the cleaned meteorite landings table: the nine load-table
//! columns in fixed order, `NULL` markers for missing values, proper
//! CSV quoting for embedded commas and quotes.

use crate::constants::CLEANED_METEORITE_COLUMNS;
use crate::error::Result;
use crate::models::CleanedMeteoriteRow;

/// Render the cleaned rows as a UTF-8 CSV document with a header line.
pub fn render_cleaned_meteorites(rows: &[CleanedMeteoriteRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CLEANED_METEORITE_COLUMNS)?;
    for row in rows {
        writer.write_record([
            &row.id,
            &row.name,
            &row.nametype,
            &row.recclass,
            &row.mass,
            &row.fall,
            &row.year,
            &row.reclat,
            &row.reclong,
        ])?;
    }
    let bytes = writer.into_inner().map_err(|error| error.into_error())?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, mass: &str, reclat: &str) -> CleanedMeteoriteRow {
        CleanedMeteoriteRow {
            id: "1".to_string(),
            name: name.to_string(),
            nametype: "Valid".to_string(),
            recclass: "L5".to_string(),
            mass: mass.to_string(),
            fall: "Fell".to_string(),
            year: "1880".to_string(),
            reclat: reclat.to_string(),
            reclong: "6.08333".to_string(),
        }
    }

    #[test]
    fn test_header_uses_renamed_mass_column() {
        let bytes = render_cleaned_meteorites(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "id,name,nametype,recclass,mass,fall,year,reclat,reclong"
        );
    }

    #[test]
    fn test_rows_render_in_order_with_null_markers() {
        let rows = vec![row("Aachen", "21", "50.775"), row("Aarhus", "NULL", "NULL")];
        let text = String::from_utf8(render_cleaned_meteorites(&rows).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,Aachen,Valid,L5,21,Fell,1880,50.775,6.08333");
        assert_eq!(lines[2], "1,Aarhus,Valid,L5,NULL,Fell,1880,NULL,6.08333");
    }

    #[test]
    fn test_embedded_commas_are_quoted() {
        let rows = vec![row("Allan Hills, A77", "42", "-76.7")];
        let text = String::from_utf8(render_cleaned_meteorites(&rows).unwrap()).unwrap();
        assert!(text.contains("\"Allan Hills, A77\""));
    }
}
