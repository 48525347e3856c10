//! Remote forecast sources.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::error::WeatherError;
use crate::weather::forecast::{ForecastDay, Range, icon_for};

/// Body of the 4-day forecast endpoint. Items stay raw until consumed, so
/// entries past the ones read are never validated.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
}

impl ForecastPayload {
    /// Parse the first `count` items.
    pub fn leading_items(&self, count: usize) -> Result<Vec<ForecastItem>, WeatherError> {
        self.items
            .iter()
            .flatten()
            .take(count)
            .map(|item| ForecastItem::deserialize(item).map_err(WeatherError::from))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub valid_period: ValidPeriod,
    pub forecast: String,
    pub temperature: Bounds,
    pub relative_humidity: Bounds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidPeriod {
    pub start: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl ForecastItem {
    /// The calendar day is taken in the endpoint's own offset.
    pub fn to_day(&self) -> ForecastDay {
        ForecastDay {
            date: self.valid_period.start.date_naive(),
            condition: self.forecast.clone(),
            temperature: Range::new(self.temperature.low, self.temperature.high),
            humidity: Range::new(self.relative_humidity.low, self.relative_humidity.high),
            icon: icon_for(&self.forecast).to_string(),
            label: None,
        }
    }
}

/// Where forecast payloads come from.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self) -> Result<ForecastPayload, WeatherError>;
}

/// Fetches the forecast over HTTP.
pub struct HttpForecastSource {
    client: reqwest::Client,
    url: String,
}

impl HttpForecastSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpForecastSource {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch(&self) -> Result<ForecastPayload, WeatherError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
