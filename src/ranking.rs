//! Ranking of weather observations by temperature and wind speed

use crate::models::{TemperatureEntry, WeatherRecord, WindEntry};

/// Number of entries kept in each ranking
pub const TOP_N: usize = 3;

/// The two ranked projections of one run's observations
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    pub temperature: Vec<TemperatureEntry>,
    pub wind: Vec<WindEntry>,
}

/// Rank observations by temperature and wind speed, descending, keeping the
/// top [`TOP_N`] of each.
///
/// Both sorts are stable: cities with equal readings keep their relative
/// input order. With fewer than [`TOP_N`] records the rankings are simply
/// shorter; `truncate` never reads past the end.
#[must_use]
pub fn rank(records: &[WeatherRecord]) -> Rankings {
    let mut temperature: Vec<TemperatureEntry> = records
        .iter()
        .map(|record| TemperatureEntry {
            city: record.city_name.clone(),
            value: record.temperature,
        })
        .collect();

    let mut wind: Vec<WindEntry> = records
        .iter()
        .map(|record| WindEntry {
            city: record.city_name.clone(),
            value: record.wind_speed,
        })
        .collect();

    temperature.sort_by(|a, b| b.value.total_cmp(&a.value));
    wind.sort_by(|a, b| b.value.total_cmp(&a.value));

    temperature.truncate(TOP_N);
    wind.truncate(TOP_N);

    Rankings { temperature, wind }
}
