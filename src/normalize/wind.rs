//! Wind observation normalizer.
//!
//! The source export writes (0.0, 0.0) as a sentinel for stations with
//! no recorded placement, so exact-zero coordinates are filtered in
//! addition to missing ones.

use crate::constants::columns::wind as col;
use crate::metadata::{self, WindMetadata};
use crate::models::{DatasetFamily, UnifiedRecord};
use crate::normalize::RawRow;

const UNIT: &str = "m/s";

/// Normalize one observation row, or skip it when a coordinate is
/// missing or carries the zero sentinel.
pub fn normalize(row: &RawRow) -> Option<UnifiedRecord> {
    let lat = row.coordinate(col::LATITUDE)?;
    let lon = row.coordinate(col::LONGITUDE)?;
    if lat == 0.0 || lon == 0.0 {
        return None;
    }

    let location = row.text(col::LOCATION_DESCRIPTION).unwrap_or("Unknown");
    let name = format!("wind_{}", location);

    let metadata = metadata::encode(&WindMetadata {
        location_description: row.text_or_empty(col::LOCATION_DESCRIPTION),
        gust_speed: row.number_or_zero(col::GUST_SPEED),
        wind_direction: row.number_or_zero(col::WIND_DIRECTION),
        wind_direction_cardinal: row.text_or_empty(col::WIND_DIRECTION_CARDINAL),
        date_time: row.text_or_empty(col::DATE_TIME),
    });

    Some(UnifiedRecord {
        dataset_type: DatasetFamily::Wind,
        name,
        lat,
        lon,
        value: row.number_or_zero(col::AVERAGE_WIND_SPEED),
        unit: UNIT.to_string(),
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::test_support::row_fixture;

    const HEADERS: &[&str] = &[
        "latitude",
        "longitude",
        "location_description",
        "average_wind_speed",
        "gust_speed",
        "wind_direction",
        "wind_direction_cardinal",
        "date_time",
    ];

    #[test]
    fn test_normalizes_observation() {
        let (columns, record) = row_fixture(
            HEADERS,
            &[
                "-37.9",
                "144.7",
                "Laverton RAAF",
                "6.2",
                "11.0",
                "270",
                "W",
                "2021-06-01 09:00",
            ],
        );
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row).unwrap();
        assert_eq!(unified.dataset_type, DatasetFamily::Wind);
        assert_eq!(unified.name, "wind_Laverton RAAF");
        assert_eq!(unified.value, 6.2);
        assert_eq!(unified.unit, "m/s");
        assert!(unified.metadata.contains("\"wind_direction_cardinal\":\"W\""));
    }

    #[test]
    fn test_zero_sentinel_coordinates_excluded() {
        let (columns, record) = row_fixture(
            HEADERS,
            &["0.0", "0.0", "Unplaced station", "4.0", "", "", "", ""],
        );
        let row = RawRow::new(&columns, &record);
        assert!(normalize(&row).is_none());

        // a single zero coordinate is just as invalid
        let (columns, record) = row_fixture(
            HEADERS,
            &["-37.9", "0.0", "Half placed", "4.0", "", "", "", ""],
        );
        let row = RawRow::new(&columns, &record);
        assert!(normalize(&row).is_none());
    }

    #[test]
    fn test_missing_coordinate_excluded() {
        let (columns, record) =
            row_fixture(HEADERS, &["", "144.7", "Somewhere", "4.0", "", "", "", ""]);
        let row = RawRow::new(&columns, &record);
        assert!(normalize(&row).is_none());
    }

    #[test]
    fn test_missing_speed_defaults_to_zero() {
        let (columns, record) =
            row_fixture(HEADERS, &["-37.9", "144.7", "Calm spot", "", "", "", "", ""]);
        let row = RawRow::new(&columns, &record);
        assert_eq!(normalize(&row).unwrap().value, 0.0);
    }
}
