//! Data models for weather observations and ranked output rows

use serde::{Deserialize, Serialize};

/// One city's decoded current-weather observation.
///
/// Built once from the API response and immutable afterwards. Temperature
/// fields are in the configured unit system (Celsius for metric), pressure
/// in hPa, humidity in percent, wind speed in m/s for metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// City ID assigned by the API
    pub id: i64,
    /// City name as reported by the API
    pub city_name: String,
    /// Current temperature
    pub temperature: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Minimum observed temperature in the area
    pub temp_min: f64,
    /// Maximum observed temperature in the area
    pub temp_max: f64,
    /// Atmospheric pressure in hPa
    pub pressure: i64,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Wind speed
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_degrees: i64,
}

/// One row of the temperature ranking, serialized as CSV columns
/// `City` and `Temperature`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureEntry {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Temperature")]
    pub value: f64,
}

/// One row of the wind-speed ranking, serialized as CSV columns
/// `City` and `Wind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindEntry {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Wind")]
    pub value: f64,
}
