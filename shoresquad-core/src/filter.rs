//! Date-range filtering of events.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Which slice of upcoming events to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelector {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl FilterSelector {
    pub const ALL: [FilterSelector; 4] = [
        FilterSelector::All,
        FilterSelector::Today,
        FilterSelector::Week,
        FilterSelector::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterSelector::All => "all",
            FilterSelector::Today => "today",
            FilterSelector::Week => "week",
            FilterSelector::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterSelector::All => "All events",
            FilterSelector::Today => "Today",
            FilterSelector::Week => "This week",
            FilterSelector::Month => "This month",
        }
    }

    /// Whether `event` falls inside this selector's window relative to `now`.
    ///
    /// An event occupies the start of its calendar day. `today` matches on the
    /// calendar day alone, while `week` and `month` also require the event to
    /// be no earlier than `now`, so an event dated today drops out of those
    /// windows once the day has started.
    pub fn matches(&self, event: &Event, now: NaiveDateTime) -> bool {
        let event_start = event.date.and_time(NaiveTime::MIN);
        match self {
            FilterSelector::All => true,
            FilterSelector::Today => event.date == now.date(),
            FilterSelector::Week => event_start >= now && event_start <= now + Duration::days(7),
            FilterSelector::Month => match now.checked_add_months(Months::new(1)) {
                Some(end) => event_start >= now && event_start <= end,
                None => false,
            },
        }
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterSelector::All),
            "today" => Ok(FilterSelector::Today),
            "week" => Ok(FilterSelector::Week),
            "month" => Ok(FilterSelector::Month),
            other => Err(format!(
                "Unknown filter '{}'. Expected one of: all, today, week, month",
                other
            )),
        }
    }
}

/// Events matching `selector`, in input order.
pub fn filter(events: &[Event], selector: FilterSelector, now: NaiveDateTime) -> Vec<&Event> {
    events.iter().filter(|e| selector.matches(e, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Coordinates;
    use chrono::NaiveDate;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap() + Duration::days(offset)
    }

    fn midnight() -> NaiveDateTime {
        day(0).and_hms_opt(0, 0, 0).unwrap()
    }

    fn afternoon() -> NaiveDateTime {
        day(0).and_hms_opt(15, 30, 0).unwrap()
    }

    fn event(id: u32, offset: i64) -> Event {
        Event {
            id,
            name: format!("Cleanup {id}"),
            location: "Pasir Ris Beach".to_string(),
            date: day(offset),
            time: None,
            icon: "🌊".to_string(),
            participants: 0,
            description: None,
            coordinates: Coordinates::new(1.381497, 103.955574),
            category: "beach".to_string(),
        }
    }

    fn ids(events: Vec<&Event>) -> Vec<u32> {
        events.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let events = vec![event(3, 40), event(1, -5), event(2, 0)];
        assert_eq!(ids(filter(&events, FilterSelector::All, afternoon())), vec![3, 1, 2]);
    }

    #[test]
    fn today_matches_calendar_day_only() {
        let events = vec![event(1, 1), event(2, 0), event(3, -1), event(4, 0)];
        assert_eq!(ids(filter(&events, FilterSelector::Today, afternoon())), vec![2, 4]);
        assert_eq!(ids(filter(&events, FilterSelector::Today, midnight())), vec![2, 4]);
    }

    #[test]
    fn week_window_is_inclusive() {
        let events = vec![event(1, 0), event(2, 7), event(3, 8), event(4, -1), event(5, 3)];
        assert_eq!(ids(filter(&events, FilterSelector::Week, midnight())), vec![1, 2, 5]);
    }

    #[test]
    fn week_excludes_today_once_day_has_started() {
        let events = vec![event(1, 0), event(2, 7)];
        assert_eq!(ids(filter(&events, FilterSelector::Week, afternoon())), vec![2]);
        assert_eq!(ids(filter(&events, FilterSelector::Today, afternoon())), vec![1]);
    }

    #[test]
    fn month_spans_one_calendar_month() {
        // 2026-10-14 + 1 month = 2026-11-14
        let events = vec![event(1, 31), event(2, 32), event(3, 10), event(4, -2)];
        assert_eq!(ids(filter(&events, FilterSelector::Month, midnight())), vec![1, 3]);
    }

    #[test]
    fn month_end_clamps_short_months() {
        let now = NaiveDate::from_ymd_opt(2027, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut feb_28 = event(1, 0);
        feb_28.date = NaiveDate::from_ymd_opt(2027, 2, 28).unwrap();
        let mut mar_1 = event(2, 0);
        mar_1.date = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();

        let events = vec![feb_28, mar_1];
        assert_eq!(ids(filter(&events, FilterSelector::Month, now)), vec![1]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let events = vec![event(1, 20)];
        assert!(filter(&events, FilterSelector::Today, midnight()).is_empty());
    }

    #[test]
    fn parse_selector() {
        assert_eq!("week".parse::<FilterSelector>().unwrap(), FilterSelector::Week);
        assert_eq!(" Month ".parse::<FilterSelector>().unwrap(), FilterSelector::Month);
        assert!("fortnight".parse::<FilterSelector>().is_err());
        assert_eq!(FilterSelector::default(), FilterSelector::All);
    }
}
