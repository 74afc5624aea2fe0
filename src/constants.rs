//! Application constants for the dataset seeder.
//!
//! Default directories, target table names, per-family input file
//! patterns, output filenames, and the raw CSV column names each
//! dataset family is read with.

// =============================================================================
// Directories and Tables
// =============================================================================

/// Default directory searched for raw dataset CSV files
pub const DEFAULT_INPUT_DIR: &str = "data/Datasets";

/// Default directory SQL seed files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "sql";

/// Target table for the unified multi-family seed files
pub const UNIFIED_TABLE: &str = "datasets";

/// Target table for the legacy meteorite-only seed file
pub const LEGACY_TABLE: &str = "locations";

// =============================================================================
// Input File Patterns
// =============================================================================

/// Meteorite landings export from NASA's open data portal
pub const METEORITE_FILE_PATTERN: &str = "Meteorite_Landings.csv";

/// Wind observation station export
pub const WIND_FILE_PATTERN: &str = "wind-observations.csv";

/// Vegetation zone polygon export (carries a numeric export id suffix)
pub const VEGETATION_FILE_PATTERN: &str = "VegetationZones_*.csv";

/// CSIRO seasonal-climatology station exports, one file per variable.
/// `tas_*` is disjoint from `tasmax_*`/`tasmin_*` because of the underscore.
pub const CLIMATE_FILE_PATTERNS: &[&str] = &[
    "tas_*.csv",
    "tasmax_*.csv",
    "tasmin_*.csv",
    "hurs*.csv",
    "pan-evap*.csv",
];

// =============================================================================
// Output Filenames
// =============================================================================

pub const METEORITE_OUTPUT_FILENAME: &str = "meteorites.sql";
pub const WIND_OUTPUT_FILENAME: &str = "wind_observations.sql";
pub const VEGETATION_OUTPUT_FILENAME: &str = "vegetation_zones.sql";
pub const LEGACY_SEED_OUTPUT_FILENAME: &str = "seed_meteorites.sql";
pub const CLEANED_OUTPUT_FILENAME: &str = "Meteorite_Landings_CLEANED.csv";

/// Column order of the cleaned meteorite CSV, matching the load
/// table. Selecting exactly these columns drops the export's
/// `Unnamed` index and `GeoLocation` columns and renames `mass (g)`
/// to `mass`.
pub const CLEANED_METEORITE_COLUMNS: &[&str] = &[
    "id", "name", "nametype", "recclass", "mass", "fall", "year", "reclat", "reclong",
];

/// Output filename for one climate sub-type seed file
pub fn climate_output_filename(variable_label: &str) -> String {
    format!("climate_{}.sql", variable_label)
}

// =============================================================================
// Placeholder Coordinates
// =============================================================================

/// Vegetation zone polygons carry no point location; every zone record is
/// pinned to this regional centroid (central Melbourne) until centroids are
/// computed from the polygon geometry.
pub const VEGETATION_PLACEHOLDER_LAT: f64 = -37.8136;
pub const VEGETATION_PLACEHOLDER_LON: f64 = 144.9631;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Raw CSV column names, per dataset family
pub mod columns {
    /// NASA meteorite landings export columns
    pub mod meteorite {
        pub const ID: &str = "id";
        pub const NAME: &str = "name";
        pub const NAMETYPE: &str = "nametype";
        pub const RECCLASS: &str = "recclass";
        pub const MASS_G: &str = "mass (g)";
        pub const MASS: &str = "mass";
        pub const FALL: &str = "fall";
        pub const YEAR: &str = "year";
        pub const RECLAT: &str = "reclat";
        pub const RECLONG: &str = "reclong";
    }

    /// CSIRO seasonal climatology station columns
    pub mod climate {
        pub const LAT: &str = "LAT";
        pub const LON: &str = "LON";
        pub const STATION_NAME: &str = "STATION_NAME";
        pub const STN_ID: &str = "STN_ID";
        pub const MODEL: &str = "MODEL";
        pub const RCP: &str = "RCP";
        pub const ANNUAL: &str = "Annual";
        pub const DJF: &str = "DJF";
        pub const MAM: &str = "MAM";
        pub const JJA: &str = "JJA";
        pub const SON: &str = "SON";
    }

    /// Wind observation station columns
    pub mod wind {
        pub const LATITUDE: &str = "latitude";
        pub const LONGITUDE: &str = "longitude";
        pub const LOCATION_DESCRIPTION: &str = "location_description";
        pub const AVERAGE_WIND_SPEED: &str = "average_wind_speed";
        pub const GUST_SPEED: &str = "gust_speed";
        pub const WIND_DIRECTION: &str = "wind_direction";
        pub const WIND_DIRECTION_CARDINAL: &str = "wind_direction_cardinal";
        pub const DATE_TIME: &str = "date_time";
    }

    /// Vegetation zone polygon export columns
    pub mod vegetation {
        pub const ZONE: &str = "Zone";
        pub const TYPE: &str = "Type";
        pub const SHAPE_AREA: &str = "SHAPE_area";
        pub const SHAPE_LEN: &str = "SHAPE_len";
        pub const LINK: &str = "Link";
    }
}
