//! Four-day weather forecast with deterministic fallback.

pub mod forecast;
pub mod provider;
pub mod source;

pub use forecast::{Forecast, ForecastDay, ForecastOrigin, Range, icon_for, mock_forecast};
pub use provider::WeatherProvider;
pub use source::{ForecastPayload, ForecastSource, HttpForecastSource};
