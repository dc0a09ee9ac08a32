//! Error types for the `Weathertop` application

use thiserror::Error;

/// Main error type for the `Weathertop` application.
///
/// Every variant is fatal to the run: nothing is retried or recovered
/// locally. Fetch-stage variants carry the city whose request failed so the
/// top level can report which of the sequential requests aborted the run.
#[derive(Error, Debug)]
pub enum WeathertopError {
    /// The request URL could not be built for a city
    #[error("failed to build request URL for '{city}': {source}")]
    RequestConstruction {
        city: String,
        source: url::ParseError,
    },

    /// The HTTP request failed in transit or returned a non-success status
    #[error("request for '{city}' failed: {source}")]
    Transport {
        city: String,
        source: reqwest::Error,
    },

    /// The response body could not be read
    #[error("failed to read response body for '{city}': {source}")]
    BodyRead {
        city: String,
        source: reqwest::Error,
    },

    /// The response body was not a valid weather observation
    #[error("failed to decode weather response for '{city}': {source}")]
    Decode {
        city: String,
        source: serde_json::Error,
    },

    /// An output file could not be created
    #[error("failed to create '{path}': {source}")]
    FileCreate {
        path: String,
        source: std::io::Error,
    },

    /// A ranked entry could not be written to an output file
    #[error("failed to write '{path}': {source}")]
    CsvWrite { path: String, source: csv::Error },
}
