//! Configuration for the `Weathertop` application
//!
//! The reference deployment polls ten UK cities against OpenWeatherMap with
//! metric units and a two second per-request timeout. All of that is held in
//! an explicit struct handed to the fetcher at construction time; the API
//! key can be overridden from the environment.

use anyhow::{Result, bail};
use std::time::Duration;

/// Environment variable overriding the built-in API key
pub const API_KEY_ENV_VAR: &str = "WEATHERTOP_API_KEY";

/// Unit system requested from the weather API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Query-parameter value understood by OpenWeatherMap
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }
}

/// Root configuration for a single run
#[derive(Debug, Clone)]
pub struct WeathertopConfig {
    /// Cities to observe, in request order
    pub cities: Vec<String>,
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Unit system for temperature and wind speed
    pub units: Units,
    /// Per-request timeout
    pub timeout: Duration,
    /// Base URL of the current-weather endpoint
    pub base_url: String,
}

fn default_cities() -> Vec<String> {
    [
        "London",
        "Leeds",
        "Manchester",
        "Birmingham",
        "Newcastle",
        "Bristol",
        "Essex",
        "Bradford",
        "York",
        "Nottingham",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_api_key() -> String {
    "bae5f0a6b8df97353331c09833748800".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(2)
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

impl Default for WeathertopConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            api_key: default_api_key(),
            units: Units::Metric,
            timeout: default_timeout(),
            base_url: default_base_url(),
        }
    }
}

impl WeathertopConfig {
    /// Load the default configuration, applying environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            config.api_key = key;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            bail!("weather API key cannot be empty");
        }
        if self.timeout.is_zero() {
            bail!("per-request timeout must be greater than zero");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            bail!("weather API base URL must be a valid HTTP or HTTPS URL");
        }
        Ok(())
    }
}
