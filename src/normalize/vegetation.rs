//! Vegetation zone normalizer.
//!
//! The source rows are polygon attributes with no point location, so
//! every record is pinned to the regional placeholder centroid rather
//! than filtered on coordinates.

use crate::constants::columns::vegetation as col;
use crate::constants::{VEGETATION_PLACEHOLDER_LAT, VEGETATION_PLACEHOLDER_LON};
use crate::metadata::{self, VegetationMetadata};
use crate::models::{DatasetFamily, UnifiedRecord};
use crate::normalize::RawRow;

const UNIT: &str = "m²";

/// Normalize one zone row. Never skips: coordinates are fixed and all
/// attribute fields degrade to defaults.
pub fn normalize(row: &RawRow) -> UnifiedRecord {
    let zone_type = row.text(col::TYPE).unwrap_or("Unknown");
    let name = format!("vegetation_{}", zone_type);
    let shape_area = row.number_or_zero(col::SHAPE_AREA);

    let metadata = metadata::encode(&VegetationMetadata {
        zone: row.text_or_empty(col::ZONE),
        zone_type: row.text_or_empty(col::TYPE),
        shape_area,
        shape_length: row.number_or_zero(col::SHAPE_LEN),
        link: row.text_or_empty(col::LINK),
    });

    UnifiedRecord {
        dataset_type: DatasetFamily::Vegetation,
        name,
        lat: VEGETATION_PLACEHOLDER_LAT,
        lon: VEGETATION_PLACEHOLDER_LON,
        value: shape_area,
        unit: UNIT.to_string(),
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::test_support::row_fixture;

    const HEADERS: &[&str] = &["Zone", "Type", "SHAPE_area", "SHAPE_len", "Link"];

    #[test]
    fn test_every_row_gets_placeholder_coordinates() {
        let (columns, record) = row_fixture(
            HEADERS,
            &["12", "Grassland", "1528.75", "210.4", "http://example.org/zone/12"],
        );
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row);
        assert_eq!(unified.dataset_type, DatasetFamily::Vegetation);
        assert_eq!(unified.lat, VEGETATION_PLACEHOLDER_LAT);
        assert_eq!(unified.lon, VEGETATION_PLACEHOLDER_LON);
        assert_eq!(unified.name, "vegetation_Grassland");
        assert_eq!(unified.value, 1528.75);
        assert_eq!(unified.unit, "m²");
    }

    #[test]
    fn test_empty_row_still_produces_record() {
        let (columns, record) = row_fixture(HEADERS, &["", "", "", "", ""]);
        let row = RawRow::new(&columns, &record);
        let unified = normalize(&row);
        assert_eq!(unified.name, "vegetation_Unknown");
        assert_eq!(unified.value, 0.0);
        assert_eq!(unified.lat, VEGETATION_PLACEHOLDER_LAT);
        assert!(unified.metadata.contains("\"type\":\"\""));
    }
}
