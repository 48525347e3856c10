//! Terminal rendering for ShoreSquad types.
//!
//! Extension traits that turn core display records into colored lines
//! using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use shoresquad_core::notify::{Channel, Notification};
use shoresquad_core::weather::{Forecast, ForecastDay};
use shoresquad_core::{DisplayRecord, EventsView, FilterSelector};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for DisplayRecord {
    fn render(&self) -> String {
        let badge = if self.urgency_badge == "TODAY" {
            self.urgency_badge.black().on_yellow().to_string()
        } else {
            self.urgency_badge.cyan().to_string()
        };

        let mut lines = vec![format!(
            "{} {} {} {}",
            self.icon,
            self.name.bold(),
            badge,
            format!("#{}", self.id).dimmed()
        )];

        let mut place = format!("   📍 {}", self.location);
        if let Some(km) = self.distance_km {
            place.push_str(&format!(" {}", format!("({km:.1} km away)").dimmed()));
        }
        lines.push(place);
        lines.push(format!("   📅 {}  🕐 {}", self.date_label, self.time_label));
        lines.push(format!("   👥 {}", self.participants_label));

        if let Some(description) = &self.description {
            lines.push(format!("   {}", description.dimmed()));
        }
        lines.push(format!("   {}", format!("➜ {}", self.join_label).green()));

        lines.join("\n")
    }
}

/// Render an event list under its filter heading.
pub fn render_events(filter: FilterSelector, view: &EventsView) -> String {
    let heading = format!("{} ({})", "Upcoming cleanups".bold(), filter.label());

    match view {
        EventsView::Empty { message } => format!("{heading}\n   {}", message.dimmed()),
        EventsView::Cards(cards) => {
            let body: Vec<String> = cards.iter().map(Render::render).collect();
            format!("{heading}\n\n{}", body.join("\n\n"))
        }
    }
}

/// "Today", "Tomorrow" or the short weekday. Demo days keep their own label.
pub fn day_label(day: &ForecastDay, today: NaiveDate) -> String {
    if let Some(label) = &day.label {
        return label.clone();
    }

    match (day.date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => day.date.format("%a").to_string(),
    }
}

pub fn render_day(day: &ForecastDay, today: NaiveDate) -> String {
    format!(
        "  {:<9} {} {:<16} {}  {}",
        day_label(day, today).bold(),
        day.icon,
        day.condition,
        format!("{}°C - {}°C", day.temperature.low, day.temperature.high),
        format!("💧 Humidity: {}% - {}%", day.humidity.low, day.humidity.high).dimmed()
    )
}

pub fn render_forecast(forecast: &Forecast, today: NaiveDate) -> String {
    let mut heading = "4-day forecast".bold().to_string();
    if forecast.is_fallback() {
        heading.push_str(&format!(" {}", "(demo data)".yellow()));
    }

    let mut lines = vec![heading];
    lines.extend(forecast.days.iter().map(|day| render_day(day, today)));
    lines.join("\n")
}

impl Render for Notification {
    fn render(&self) -> String {
        let (r, g, b) = self.severity.rgb();
        let symbol = match self.channel {
            Channel::InlineError => "✖",
            Channel::InlineSuccess => "✔",
            Channel::Toast | Channel::LoadingOverlay => "●",
        };

        format!("{} {}", symbol.truecolor(r, g, b), self.message.truecolor(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shoresquad_core::weather::{Range, mock_forecast};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn live_day(offset: i64) -> ForecastDay {
        ForecastDay {
            date: today() + Duration::days(offset),
            condition: "Thundery Showers".to_string(),
            temperature: Range::new(24.0, 33.0),
            humidity: Range::new(55.0, 95.0),
            icon: "⛈️".to_string(),
            label: None,
        }
    }

    #[test]
    fn live_days_are_labelled_relative_to_today() {
        assert_eq!(day_label(&live_day(0), today()), "Today");
        assert_eq!(day_label(&live_day(1), today()), "Tomorrow");
        // 2026-10-17 is a Saturday
        assert_eq!(day_label(&live_day(3), today()), "Sat");
    }

    #[test]
    fn demo_days_keep_their_label() {
        let days = mock_forecast(today());
        assert_eq!(day_label(&days[2], today()), days[2].label.clone().unwrap());
    }

    #[test]
    fn day_line_shows_ranges() {
        let line = render_day(&live_day(0), today());
        assert!(line.contains("24°C - 33°C"));
        assert!(line.contains("💧 Humidity: 55% - 95%"));
        assert!(line.contains("Thundery Showers"));
    }

    #[test]
    fn card_shows_distance_and_join_label() {
        let event = shoresquad_core::event::demo_events(today()).remove(0);
        let now = today().and_hms_opt(9, 0, 0).unwrap();
        let origin = shoresquad_core::Coordinates::new(33.9850, -118.4695);
        let card = shoresquad_core::present(&event, now).with_distance(&origin, &event);

        let rendered = card.render();
        assert!(rendered.contains(&card.join_label));
        assert!(rendered.contains("km away"));
        assert!(rendered.contains(&card.participants_label));
    }

    #[test]
    fn empty_view_shows_message() {
        let view = EventsView::Empty {
            message: "No events found. Create one to get started! 🌊".to_string(),
        };
        let rendered = render_events(FilterSelector::Today, &view);
        assert!(rendered.contains("No events found"));
        assert!(rendered.contains(FilterSelector::Today.label()));
    }
}
