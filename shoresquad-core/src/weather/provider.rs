use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::timeout;

use crate::constants::{FORECAST_DAYS, WEATHER_TIMEOUT};
use crate::error::WeatherError;
use crate::notify::{NotificationCenter, Severity};
use crate::weather::forecast::{Forecast, ForecastDay, ForecastOrigin, mock_forecast};
use crate::weather::source::{ForecastItem, ForecastSource};

const FALLBACK_MESSAGE: &str = "Using demo weather data";

/// Fetches the forecast, substituting demo data on any failure.
pub struct WeatherProvider {
    source: Box<dyn ForecastSource>,
    notifier: Arc<NotificationCenter>,
    timeout: Duration,
}

impl WeatherProvider {
    pub fn new(source: Box<dyn ForecastSource>, notifier: Arc<NotificationCenter>) -> Self {
        WeatherProvider {
            source,
            notifier,
            timeout: WEATHER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// One request, bounded by the timeout. Never fails: errors resolve to
    /// the mock forecast for `today` plus a warning toast.
    pub async fn fetch_forecast(&self, today: NaiveDate) -> Forecast {
        match self.fetch_live().await {
            Ok(days) => {
                tracing::info!(days = days.len(), "Fetched live forecast");
                Forecast {
                    origin: ForecastOrigin::Live,
                    days,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Weather fetch failed, using demo data");
                self.notifier.toast(FALLBACK_MESSAGE, Severity::Warning);
                Forecast {
                    origin: ForecastOrigin::Fallback,
                    days: mock_forecast(today),
                }
            }
        }
    }

    async fn fetch_live(&self) -> Result<Vec<ForecastDay>, WeatherError> {
        // Dropping the request future on timeout cancels it.
        let payload = timeout(self.timeout, self.source.fetch())
            .await
            .map_err(|_| WeatherError::Timeout(self.timeout.as_secs()))??;

        let items = payload.leading_items(FORECAST_DAYS)?;
        if items.is_empty() {
            return Err(WeatherError::Empty);
        }

        Ok(items.iter().map(ForecastItem::to_day).collect())
    }
}
