//! Forecast day records and the condition-to-icon table.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Checked in order; the first keyword found in the lowercased condition wins.
const ICON_TABLE: &[(&[&str], &str)] = &[
    (&["rain"], "🌧️"),
    (&["thunderstorm"], "⛈️"),
    (&["cloudy", "overcast"], "☁️"),
    (&["partly", "fair"], "⛅"),
    (&["clear", "sunny"], "☀️"),
    (&["windy"], "💨"),
    (&["haze"], "😶"),
];

const DEFAULT_ICON: &str = "🌤️";

/// Low/high pair for temperature (°C) or relative humidity (%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Self {
        Range { low, high }
    }
}

/// One day of weather.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: String,
    pub temperature: Range,
    pub humidity: Range,
    pub icon: String,
    /// Fixed label for demo data ("Today", "Day 3"); live days have none
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForecastOrigin {
    Live,
    Fallback,
}

/// An ordered forecast, soonest day first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub origin: ForecastOrigin,
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    pub fn is_fallback(&self) -> bool {
        self.origin == ForecastOrigin::Fallback
    }
}

pub fn icon_for(condition: &str) -> &'static str {
    let lower = condition.to_lowercase();
    ICON_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Label, condition, temperature, humidity and icon of each demo day.
type MockDay = (&'static str, &'static str, (f64, f64), (f64, f64), &'static str);

const MOCK_DAYS: [MockDay; 4] = [
    ("Today", "Partly Cloudy", (24.0, 32.0), (60.0, 80.0), "⛅"),
    ("Tomorrow", "Light Rain", (23.0, 31.0), (65.0, 85.0), "🌧️"),
    ("Day 3", "Cloudy", (22.0, 30.0), (70.0, 90.0), "☁️"),
    ("Day 4", "Sunny", (25.0, 33.0), (50.0, 70.0), "☀️"),
];

/// Deterministic four-day demo forecast starting at `today`.
pub fn mock_forecast(today: NaiveDate) -> Vec<ForecastDay> {
    MOCK_DAYS
        .iter()
        .zip(0..)
        .map(|(&(label, condition, temp, rh, icon), offset)| ForecastDay {
            date: today + Duration::days(offset),
            condition: condition.to_string(),
            temperature: Range::new(temp.0, temp.1),
            humidity: Range::new(rh.0, rh.1),
            icon: icon.to_string(),
            label: Some(label.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_keywords() {
        assert_eq!(icon_for("Light Rain"), "🌧️");
        assert_eq!(icon_for("Fair and Warm"), "⛅");
        assert_eq!(icon_for("Misty Conditions"), "🌤️");
        assert_eq!(icon_for("Thunderstorm"), "⛈️");
        assert_eq!(icon_for("OVERCAST"), "☁️");
        assert_eq!(icon_for("Clear Skies"), "☀️");
        assert_eq!(icon_for("Windy"), "💨");
        assert_eq!(icon_for("Slight Haze"), "😶");
    }

    #[test]
    fn icon_first_match_wins() {
        // "cloudy" is checked before "partly"
        assert_eq!(icon_for("Partly Cloudy"), "☁️");
        // "rain" is checked before "thunderstorm"
        assert_eq!(icon_for("Thunderstorms with rain"), "🌧️");
    }

    #[test]
    fn mock_forecast_is_fixed() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let days = mock_forecast(today);

        assert_eq!(days.len(), 4);
        let conditions: Vec<&str> = days.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(conditions, vec!["Partly Cloudy", "Light Rain", "Cloudy", "Sunny"]);
        assert_eq!(days[0].date, today);
        assert_eq!(days[3].date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(days[1].temperature, Range::new(23.0, 31.0));
        assert_eq!(days[3].humidity, Range::new(50.0, 70.0));
        assert_eq!(days[2].label.as_deref(), Some("Day 3"));
    }
}
