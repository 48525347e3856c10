//! Error types for ShoreSquad.

use thiserror::Error;

/// Errors that can occur in ShoreSquad operations.
#[derive(Error, Debug)]
pub enum ShoreSquadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate event id {0} in seed data")]
    DuplicateEventId(u32),
}

/// Failures of the remote forecast request. Always recovered by fallback data.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Forecast endpoint returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Forecast request timed out after {0}s")]
    Timeout(u64),

    #[error("Forecast payload contained no items")]
    Empty,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else {
            WeatherError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

/// Reasons a location fix could not be acquired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoError {
    #[error("location capability unsupported")]
    Unsupported,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,
}

/// A validation failure for a single form field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Location,
    Date,
    Time,
}

/// Result type alias for ShoreSquad operations.
pub type ShoreSquadResult<T> = Result<T, ShoreSquadError>;
