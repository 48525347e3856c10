//! Best-effort geolocation.
//!
//! `GeoLocator` asks a `LocationSource` for a fresh position, bounds the
//! wait, and reports the outcome through the notification center. Callers
//! always get a typed result and carry on without a fix on failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::constants::GEO_TIMEOUT;
use crate::distance::Coordinates;
use crate::error::GeoError;
use crate::notify::{NotificationCenter, Severity};

/// One acquired position. Replaced wholesale on every successful read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coordinates: Coordinates,
    pub acquired_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached position the source may return
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            high_accuracy: true,
            timeout: GEO_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

/// Platform location capability.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates, GeoError>;
}

/// A platform with no location capability.
pub struct NoLocation;

#[async_trait]
impl LocationSource for NoLocation {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Coordinates, GeoError> {
        Err(GeoError::Unsupported)
    }
}

/// A position configured by the user.
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }
}

#[derive(Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Approximate position from an IP geolocation service.
pub struct IpLocation {
    client: reqwest::Client,
    url: String,
}

impl IpLocation {
    pub fn new(url: impl Into<String>) -> Self {
        IpLocation {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationSource for IpLocation {
    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates, GeoError> {
        let resp = self
            .client
            .get(&self.url)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeoError::PermissionDenied);
        }
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "IP lookup failed");
            return Err(GeoError::PositionUnavailable);
        }

        let body: IpLookupResponse = resp.json().await.map_err(map_request_error)?;
        match (body.latitude, body.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
            _ => Err(GeoError::PositionUnavailable),
        }
    }
}

fn map_request_error(err: reqwest::Error) -> GeoError {
    if err.is_timeout() {
        GeoError::Timeout
    } else {
        tracing::debug!(error = %err, "IP lookup request failed");
        GeoError::PositionUnavailable
    }
}

pub struct GeoLocator {
    source: Box<dyn LocationSource>,
    notifier: Arc<NotificationCenter>,
    options: PositionOptions,
}

impl GeoLocator {
    pub fn new(source: Box<dyn LocationSource>, notifier: Arc<NotificationCenter>) -> Self {
        GeoLocator {
            source,
            notifier,
            options: PositionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    /// Request a fresh fix, waiting at most `options.timeout`.
    pub async fn acquire(&self) -> Result<LocationFix, GeoError> {
        let result = timeout(self.options.timeout, self.source.current_position(&self.options))
            .await
            .unwrap_or(Err(GeoError::Timeout));

        match result {
            Ok(coordinates) => {
                tracing::info!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "Location acquired"
                );
                self.notifier.toast("Location found! ✨", Severity::Success);
                Ok(LocationFix {
                    coordinates,
                    acquired_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geolocation failed");
                self.notifier.toast(failure_message(e), failure_severity(e));
                Err(e)
            }
        }
    }
}

pub fn failure_message(err: GeoError) -> &'static str {
    match err {
        GeoError::Unsupported => "Geolocation not supported on this device",
        GeoError::PermissionDenied => "Location permission denied. Using default location.",
        GeoError::PositionUnavailable => "Unable to get location. Using default.",
        GeoError::Timeout => "Location request timed out. Using default location.",
    }
}

pub fn failure_severity(err: GeoError) -> Severity {
    match err {
        GeoError::Unsupported => Severity::Error,
        _ => Severity::Warning,
    }
}
