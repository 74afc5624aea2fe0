//! Family-specific metadata encoding.
//!
//! Each family carries a fixed set of side fields that do not fit the
//! unified record columns; they are serialized into one JSON blob so a
//! downstream reader can recover them as a structured mapping. The blob
//! is always valid JSON even when individual fields are empty.

use serde::Serialize;

/// Serialize side fields into the metadata blob. These field types
/// cannot fail to serialize; the empty object is a formality.
pub fn encode<T: Serialize>(fields: &T) -> String {
    serde_json::to_string(fields).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Serialize)]
pub struct MeteoriteMetadata {
    pub recclass: String,
    pub mass: f64,
    pub year: i64,
    pub nametype: String,
    pub fall: String,
}

#[derive(Debug, Serialize)]
pub struct ClimateMetadata {
    pub station_name: String,
    pub station_id: String,
    pub model: String,
    pub rcp: String,
    pub annual: f64,
    pub djf: f64,
    pub mam: f64,
    pub jja: f64,
    pub son: f64,
    pub climate_type: String,
    pub unit: String,
}

#[derive(Debug, Serialize)]
pub struct WindMetadata {
    pub location_description: String,
    pub gust_speed: f64,
    pub wind_direction: f64,
    pub wind_direction_cardinal: String,
    pub date_time: String,
}

#[derive(Debug, Serialize)]
pub struct VegetationMetadata {
    pub zone: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub shape_area: f64,
    pub shape_length: f64,
    pub link: String,
}
