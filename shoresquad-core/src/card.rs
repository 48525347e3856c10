//! Display records for event cards.
//!
//! `present` turns an `Event` into plain strings. Presentation layers bind
//! these fields to widgets; no further formatting decisions belong there.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::distance::Coordinates;
use crate::event::Event;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub id: u32,
    pub icon: String,
    pub name: String,
    pub location: String,
    pub date_label: String,
    pub time_label: String,
    pub participants_label: String,
    pub urgency_badge: String,
    pub description: Option<String>,
    pub join_label: String,
    pub distance_km: Option<f64>,
}

impl DisplayRecord {
    /// Attach the distance from `origin` to the event.
    pub fn with_distance(mut self, origin: &Coordinates, event: &Event) -> Self {
        self.distance_km = Some(origin.distance_km(&event.coordinates));
        self
    }
}

/// What the event list should show for the current filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventsView {
    Empty { message: String },
    Cards(Vec<DisplayRecord>),
}

pub fn present(event: &Event, now: NaiveDateTime) -> DisplayRecord {
    DisplayRecord {
        id: event.id,
        icon: event.icon.clone(),
        name: event.name.clone(),
        location: event.location.clone(),
        date_label: event.date.format("%a, %b %-d").to_string(),
        time_label: event
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "TBD".to_string()),
        participants_label: format!("{} volunteers interested", event.participants),
        urgency_badge: urgency_badge(event, now),
        description: event.description.clone(),
        join_label: format!("Join {}", event.name),
        distance_km: None,
    }
}

/// "TODAY" on the event's day, otherwise whole days remaining rounded up.
/// Past events render negative.
pub fn urgency_badge(event: &Event, now: NaiveDateTime) -> String {
    if event.date == now.date() {
        return "TODAY".to_string();
    }

    let seconds = (event.date.and_time(NaiveTime::MIN) - now).num_seconds();
    let days = (seconds as f64 / SECONDS_PER_DAY).ceil() as i64;
    format!("{}d", days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn event_on(date: NaiveDate) -> Event {
        Event {
            id: 7,
            name: "Cleanup Day".to_string(),
            location: "Pier 1".to_string(),
            date,
            time: NaiveTime::from_hms_opt(9, 0, 0),
            icon: "🌊".to_string(),
            participants: 12,
            description: None,
            coordinates: Coordinates::new(1.381497, 103.955574),
            category: "beach".to_string(),
        }
    }

    #[test]
    fn badge_today() {
        let now = today().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(present(&event_on(today()), now).urgency_badge, "TODAY");

        let evening = today().and_hms_opt(21, 0, 0).unwrap();
        assert_eq!(present(&event_on(today()), evening).urgency_badge, "TODAY");
    }

    #[test]
    fn badge_days_ahead() {
        let now = today().and_hms_opt(0, 0, 0).unwrap();
        let event = event_on(today() + Duration::days(3));
        assert_eq!(present(&event, now).urgency_badge, "3d");
    }

    #[test]
    fn badge_rounds_partial_days_up() {
        let now = today().and_hms_opt(10, 0, 0).unwrap();
        let event = event_on(today() + Duration::days(1));
        assert_eq!(urgency_badge(&event, now), "1d");
    }

    #[test]
    fn badge_past_events_are_not_clamped() {
        let now = today().and_hms_opt(0, 0, 0).unwrap();
        let event = event_on(today() - Duration::days(2));
        assert_eq!(urgency_badge(&event, now), "-2d");
    }

    #[test]
    fn formats_fields() {
        let now = today().and_hms_opt(8, 0, 0).unwrap();
        let record = present(&event_on(NaiveDate::from_ymd_opt(2026, 12, 10).unwrap()), now);
        assert_eq!(record.date_label, "Thu, Dec 10");
        assert_eq!(record.time_label, "09:00");
        assert_eq!(record.participants_label, "12 volunteers interested");
        assert_eq!(record.join_label, "Join Cleanup Day");
        assert_eq!(record.distance_km, None);
    }

    #[test]
    fn missing_time_renders_tbd() {
        let now = today().and_hms_opt(8, 0, 0).unwrap();
        let mut event = event_on(today());
        event.time = None;
        assert_eq!(present(&event, now).time_label, "TBD");
    }

    #[test]
    fn attaches_distance() {
        let now = today().and_hms_opt(8, 0, 0).unwrap();
        let event = event_on(today());
        let record = present(&event, now).with_distance(&event.coordinates, &event);
        assert_eq!(record.distance_km, Some(0.0));
    }
}
