//! Current-weather fetching against the OpenWeatherMap API
//!
//! One blocking GET per configured city, in configuration order. The run is
//! all-or-nothing: the first failure aborts the remaining cities and is
//! surfaced with the stage that failed and the city involved.

use crate::config::WeathertopConfig;
use crate::error::WeathertopError;
use crate::models::WeatherRecord;
use anyhow::Context;
use tracing::debug;
use url::Url;

/// Blocking client over the current-weather endpoint
pub struct WeatherClient {
    http: reqwest::blocking::Client,
    config: WeathertopConfig,
}

impl WeatherClient {
    /// Build a client with the configured per-request timeout
    pub fn new(config: WeathertopConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// Fetch one observation per configured city, in configuration order.
    ///
    /// Fails fast: no partial result is returned if any city's request,
    /// body read, or decode fails. Each response body is consumed (or
    /// dropped) before the next request is issued.
    pub fn fetch_all(&self) -> crate::Result<Vec<WeatherRecord>> {
        let mut records = Vec::with_capacity(self.config.cities.len());
        for city in &self.config.cities {
            records.push(self.fetch_city(city)?);
        }
        Ok(records)
    }

    fn fetch_city(&self, city: &str) -> crate::Result<WeatherRecord> {
        let url = self.request_url(city)?;

        debug!(%city, "requesting current weather");

        let response = self
            .http
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|source| WeathertopError::Transport {
                city: city.to_string(),
                source,
            })?;

        let body = response
            .text()
            .map_err(|source| WeathertopError::BodyRead {
                city: city.to_string(),
                source,
            })?;

        let decoded: openweathermap::CurrentResponse =
            serde_json::from_str(&body).map_err(|source| WeathertopError::Decode {
                city: city.to_string(),
                source,
            })?;

        Ok(decoded.into())
    }

    /// Build the request URL for one city, percent-encoding the query values
    fn request_url(&self, city: &str) -> crate::Result<Url> {
        let endpoint = format!(
            "{}?q={}&units={}&appid={}",
            self.config.base_url,
            urlencoding::encode(city),
            self.config.units.as_str(),
            urlencoding::encode(&self.config.api_key),
        );
        Url::parse(&endpoint).map_err(|source| WeathertopError::RequestConstruction {
            city: city.to_string(),
            source,
        })
    }
}

/// `OpenWeatherMap` current-weather response structures
mod openweathermap {
    use crate::models::WeatherRecord;
    use serde::Deserialize;

    /// Current-weather response, reduced to the fields the ranking uses
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub id: i64,
        pub name: String,
        pub main: MainData,
        pub wind: WindData,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub feels_like: f64,
        pub temp_min: f64,
        pub temp_max: f64,
        pub pressure: i64,
        pub humidity: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: f64,
        pub deg: i64,
    }

    impl From<CurrentResponse> for WeatherRecord {
        fn from(response: CurrentResponse) -> Self {
            Self {
                id: response.id,
                city_name: response.name,
                temperature: response.main.temp,
                feels_like: response.main.feels_like,
                temp_min: response.main.temp_min,
                temp_max: response.main.temp_max,
                pressure: response.main.pressure,
                humidity: response.main.humidity,
                wind_speed: response.wind.speed,
                wind_degrees: response.wind.deg,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Units;

    fn client_with(cities: &[&str]) -> WeatherClient {
        let config = WeathertopConfig {
            cities: cities.iter().map(|c| (*c).to_string()).collect(),
            api_key: "test-key".to_string(),
            units: Units::Metric,
            ..WeathertopConfig::default()
        };
        WeatherClient::new(config).unwrap()
    }

    #[test]
    fn test_request_url_embeds_query_parameters() {
        let client = client_with(&["London"]);
        let url = client.request_url("London").unwrap();
        assert_eq!(url.query(), Some("q=London&units=metric&appid=test-key"));
    }

    #[test]
    fn test_request_url_percent_encodes_city_names() {
        let client = client_with(&["Milton Keynes"]);
        let url = client.request_url("Milton Keynes").unwrap();
        assert!(url.query().unwrap().contains("q=Milton%20Keynes"));
    }

    #[test]
    fn test_decodes_current_weather_response() {
        let body = r#"{
            "id": 2643743,
            "name": "London",
            "main": {
                "temp": 15.3,
                "feels_like": 14.8,
                "temp_min": 13.9,
                "temp_max": 16.1,
                "pressure": 1012,
                "humidity": 72
            },
            "wind": { "speed": 4.6, "deg": 250 },
            "cod": 200
        }"#;

        let decoded: openweathermap::CurrentResponse = serde_json::from_str(body).unwrap();
        let record = WeatherRecord::from(decoded);

        assert_eq!(record.id, 2_643_743);
        assert_eq!(record.city_name, "London");
        assert_eq!(record.temperature, 15.3);
        assert_eq!(record.feels_like, 14.8);
        assert_eq!(record.pressure, 1012);
        assert_eq!(record.humidity, 72);
        assert_eq!(record.wind_speed, 4.6);
        assert_eq!(record.wind_degrees, 250);
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let result = serde_json::from_str::<openweathermap::CurrentResponse>("{\"cod\":401}");
        assert!(result.is_err());
    }
}
