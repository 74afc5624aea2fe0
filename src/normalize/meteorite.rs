//! Meteorite landings normalizer.
//!
//! Rows without a parseable latitude and longitude are dropped. Mass
//! defaults to 0 grams when unparseable; the year is coerced to an
//! integer with a 0 default. The same policy applies to the legacy
//! `locations` seed rows.

use crate::constants::columns::meteorite as col;
use crate::metadata::{self, MeteoriteMetadata};
use crate::models::{CleanedMeteoriteRow, DatasetFamily, LegacyMeteoriteRow, UnifiedRecord};
use crate::normalize::RawRow;

/// Grams, per the source export's `mass (g)` column
const UNIT: &str = "g";

/// Normalize one landings row into a unified record, or skip it when
/// either coordinate is missing.
pub fn normalize(row: &RawRow) -> Option<UnifiedRecord> {
    let lat = row.coordinate(col::RECLAT)?;
    let lon = row.coordinate(col::RECLONG)?;

    let name = row
        .text(col::NAME)
        .unwrap_or("Unknown")
        .to_string();
    let mass = mass(row);
    let year = row.integer_or_zero(col::YEAR);

    let metadata = metadata::encode(&MeteoriteMetadata {
        recclass: row.text_or_empty(col::RECCLASS),
        mass,
        year,
        nametype: row.text_or_empty(col::NAMETYPE),
        fall: row.text_or_empty(col::FALL),
    });

    Some(UnifiedRecord {
        dataset_type: DatasetFamily::Meteorite,
        name,
        lat,
        lon,
        value: mass,
        unit: UNIT.to_string(),
        metadata,
    })
}

/// Extract one row for the legacy `locations` seed. Requires an id and
/// both coordinates; numeric defaults match the unified path.
pub fn legacy_row(row: &RawRow) -> Option<LegacyMeteoriteRow> {
    let lat = row.coordinate(col::RECLAT)?;
    let lon = row.coordinate(col::RECLONG)?;
    let id = row.number(col::ID).map(|value| value as i64)?;

    Some(LegacyMeteoriteRow {
        id,
        name: row.text(col::NAME).unwrap_or("Unknown").to_string(),
        nametype: row.text_or_empty(col::NAMETYPE),
        recclass: row.text_or_empty(col::RECCLASS),
        mass: mass(row),
        fall: row.text_or_empty(col::FALL),
        year: row.integer_or_zero(col::YEAR),
        lat,
        lon,
    })
}

/// Extract one row for the cleaned-CSV export. No rows are dropped:
/// raw values pass through verbatim with missing fields written as
/// the `NULL` marker, except the year, which is integer-coerced with
/// a 0 default as in the seed paths.
pub fn cleaned_row(row: &RawRow) -> CleanedMeteoriteRow {
    CleanedMeteoriteRow {
        id: text_or_null(row, col::ID),
        name: text_or_null(row, col::NAME),
        nametype: text_or_null(row, col::NAMETYPE),
        recclass: text_or_null(row, col::RECCLASS),
        mass: row
            .text(col::MASS_G)
            .or_else(|| row.text(col::MASS))
            .unwrap_or("NULL")
            .to_string(),
        fall: text_or_null(row, col::FALL),
        year: row.integer_or_zero(col::YEAR).to_string(),
        reclat: text_or_null(row, col::RECLAT),
        reclong: text_or_null(row, col::RECLONG),
    }
}

fn text_or_null(row: &RawRow, name: &str) -> String {
    row.text(name).unwrap_or("NULL").to_string()
}

/// The export names the column `mass (g)`; some cleaned copies rename
/// it to `mass`. Either is accepted, 0 when absent.
fn mass(row: &RawRow) -> f64 {
    row.number(col::MASS_G)
        .or_else(|| row.number(col::MASS))
        .unwrap_or(0.0)
}
