//! `Weathertop` - city weather observation ranking
//!
//! This library fetches current weather observations for a configured list
//! of cities, ranks them by temperature and wind speed, and writes the top
//! readings to CSV files.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod weather;

// Re-export core types for public API
pub use config::{Units, WeathertopConfig};
pub use error::WeathertopError;
pub use models::{TemperatureEntry, WeatherRecord, WindEntry};
pub use ranking::{Rankings, TOP_N, rank};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeathertopError>;
