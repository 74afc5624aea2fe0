//! Climate station normalizer.
//!
//! One source file per climate variable; the variable is classified
//! from the filename before rows are normalized. Rows without station
//! coordinates are dropped. The record value is the "Annual" seasonal
//! aggregate; the full seasonal set rides along in metadata.

use crate::constants::columns::climate as col;
use crate::metadata::{self, ClimateMetadata};
use crate::models::{ClimateVariable, DatasetFamily, UnifiedRecord};
use crate::normalize::RawRow;

/// Normalize one station row for the given climate variable, or skip
/// it when either coordinate is missing.
pub fn normalize(row: &RawRow, variable: ClimateVariable) -> Option<UnifiedRecord> {
    let lat = row.coordinate(col::LAT)?;
    let lon = row.coordinate(col::LON)?;

    let station_name = row.text(col::STATION_NAME).unwrap_or("Unknown");
    let name = format!("{}_{}", variable.label(), station_name);
    let annual = row.number_or_zero(col::ANNUAL);

    let metadata = metadata::encode(&ClimateMetadata {
        station_name: row.text_or_empty(col::STATION_NAME),
        station_id: row.text_or_empty(col::STN_ID),
        model: row.text_or_empty(col::MODEL),
        rcp: row.text_or_empty(col::RCP),
        annual,
        djf: row.number_or_zero(col::DJF),
        mam: row.number_or_zero(col::MAM),
        jja: row.number_or_zero(col::JJA),
        son: row.number_or_zero(col::SON),
        climate_type: variable.label().to_string(),
        unit: variable.unit().to_string(),
    });

    Some(UnifiedRecord {
        dataset_type: DatasetFamily::Climate,
        name,
        lat,
        lon,
        value: annual,
        unit: variable.unit().to_string(),
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::test_support::row_fixture;

    const HEADERS: &[&str] = &[
        "STN_ID",
        "STATION_NAME",
        "LAT",
        "LON",
        "MODEL",
        "RCP",
        "Annual",
        "DJF",
        "MAM",
        "JJA",
        "SON",
    ];

    #[test]
    fn test_normalizes_station_row() {
        let (columns, record) = row_fixture(
            HEADERS,
            &[
                "86338", "MELBOURNE", "-37.83", "144.98", "CSIRO-MnCh", "rcp45", "1.3", "1.5",
                "1.2", "1.1", "1.4",
            ],
        );
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row, ClimateVariable::MaxTemperature).unwrap();
        assert_eq!(unified.dataset_type, DatasetFamily::Climate);
        assert_eq!(unified.name, "max_temperature_MELBOURNE");
        assert_eq!(unified.value, 1.3);
        assert_eq!(unified.unit, "°C");
        assert!(unified.metadata.contains("\"climate_type\":\"max_temperature\""));
        assert!(unified.metadata.contains("\"djf\":1.5"));
    }

    #[test]
    fn test_drops_row_without_coordinates() {
        let (columns, record) = row_fixture(
            HEADERS,
            &["86338", "MELBOURNE", "", "144.98", "", "", "1.3", "", "", "", ""],
        );
        let row = RawRow::new(&columns, &record);
        assert!(normalize(&row, ClimateVariable::Humidity).is_none());
    }

    #[test]
    fn test_missing_annual_defaults_to_zero() {
        let (columns, record) = row_fixture(
            HEADERS,
            &["86338", "MELBOURNE", "-37.83", "144.98", "", "", "", "", "", "", ""],
        );
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row, ClimateVariable::Evaporation).unwrap();
        assert_eq!(unified.value, 0.0);
        assert_eq!(unified.unit, "mm");
    }

    #[test]
    fn test_unknown_station_name() {
        let (columns, record) = row_fixture(
            &["LAT", "LON", "Annual"],
            &["-37.0", "145.0", "15.2"],
        );
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row, ClimateVariable::AvgTemperature).unwrap();
        assert_eq!(unified.name, "avg_temperature_Unknown");
    }
}
