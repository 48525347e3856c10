use std::time::Duration;

/// Upper bound on the forecast request before falling back to demo data.
pub const WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a single geolocation read.
pub const GEO_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of forecast days consumed from the endpoint.
pub const FORECAST_DAYS: usize = 4;

pub const DEFAULT_WEATHER_URL: &str =
    "https://api.data.gov.sg/v1/environment/4-day-weather-forecast";

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Pasir Ris Beach, Singapore. Map centre and fallback event coordinates.
pub const ORGANIZING_LATITUDE: f64 = 1.381497;
pub const ORGANIZING_LONGITUDE: f64 = 103.955574;

pub const DEFAULT_MAP_ZOOM: u8 = 13;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const INLINE_ERROR_DURATION: Duration = Duration::from_millis(5000);
pub const INLINE_SUCCESS_DURATION: Duration = Duration::from_millis(3000);

pub const MIN_FIELD_LEN: usize = 3;

pub const DEFAULT_EVENT_ICON: &str = "🌊";
pub const DEFAULT_CATEGORY: &str = "beach";

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NO_EVENTS_MESSAGE: &str = "No events found. Create one to get started! 🌊";
