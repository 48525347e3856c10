//! Cleanup event types.
//!
//! An `Event` is one beach cleanup. Events are created either from the demo
//! seed set or from a validated `EventDraft`; the store assigns the id.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_EVENT_ICON};
use crate::distance::Coordinates;

/// A cleanup event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    /// Local start time, display-only
    pub time: Option<NaiveTime>,
    pub icon: String,
    pub participants: u32,
    pub description: Option<String>,
    pub coordinates: Coordinates,
    pub category: String,
}

/// A validated event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
    pub coordinates: Coordinates,
}

impl EventDraft {
    /// Materialize the draft with the defaults for user-created events.
    pub fn into_event(self, id: u32) -> Event {
        Event {
            id,
            name: self.name,
            location: self.location,
            date: self.date,
            time: self.time,
            icon: DEFAULT_EVENT_ICON.to_string(),
            participants: 1,
            description: self.description,
            coordinates: self.coordinates,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Demo cleanups, dated relative to `today` so they stay upcoming.
pub fn demo_events(today: NaiveDate) -> Vec<Event> {
    let at = |h: u32| NaiveTime::from_hms_opt(h, 0, 0);

    vec![
        Event {
            id: 1,
            name: "Santa Monica Cleanup".to_string(),
            location: "Santa Monica Beach".to_string(),
            date: today + Duration::days(2),
            time: at(9),
            icon: "🌊".to_string(),
            participants: 24,
            description: Some("Join us for a morning cleanup at Santa Monica Beach!".to_string()),
            coordinates: Coordinates::new(34.0195, -118.4912),
            category: DEFAULT_CATEGORY.to_string(),
        },
        Event {
            id: 2,
            name: "Venice Beach Eco-Drive".to_string(),
            location: "Venice Beach".to_string(),
            date: today + Duration::days(4),
            time: at(10),
            icon: "🏖️".to_string(),
            participants: 31,
            description: Some("Weekend cleanup and ocean awareness event".to_string()),
            coordinates: Coordinates::new(33.9850, -118.4695),
            category: DEFAULT_CATEGORY.to_string(),
        },
        Event {
            id: 3,
            name: "Malibu Beach Revival".to_string(),
            location: "Malibu Beach".to_string(),
            date: today + Duration::days(7),
            time: at(8),
            icon: "🌅".to_string(),
            participants: 18,
            description: Some("Early morning cleanup before the crowds".to_string()),
            coordinates: Coordinates::new(34.0314, -118.6819),
            category: DEFAULT_CATEGORY.to_string(),
        },
    ]
}
