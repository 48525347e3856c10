use anyhow::Result;
use chrono::{Duration, NaiveDate};
use dialoguer::{Input, Select};
use shoresquad_core::form::EventForm;
use shoresquad_core::{Action, AppController, FilterSelector};

use crate::app::{self, Settings};
use crate::commands::map::open_in_browser;
use crate::terminal::{TerminalShell, map_url};

const MENU: &[&str] = &[
    "Browse events",
    "Change filter",
    "Join an event",
    "Create an event",
    "Refresh weather",
    "Find my location",
    "Open map",
    "Join the movement",
    "Quit",
];

pub async fn run(settings: &Settings) -> Result<()> {
    let mut controller = app::build(settings);
    controller.start().await;

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact()?;

        let action = match choice {
            0 => Action::SelectFilter(controller.state().filter),
            1 => Action::SelectFilter(pick_filter(controller.state().filter)?),
            2 => match pick_event(&controller)? {
                Some(id) => Action::Join(id),
                None => continue,
            },
            3 => Action::CreateEvent(prompt_form(controller.now().date())?),
            4 => Action::RefreshWeather,
            5 => Action::Locate,
            6 => {
                let url = match controller.shell().map_url() {
                    Some(url) => url.clone(),
                    None => map_url(controller.map_center(), settings.config.map_zoom)?,
                };
                open_in_browser(url.as_str());
                continue;
            }
            7 => Action::JoinMovement,
            _ => break,
        };

        controller.dispatch(action).await;
    }

    Ok(())
}

fn pick_filter(current: FilterSelector) -> Result<FilterSelector> {
    let labels: Vec<&str> = FilterSelector::ALL.iter().map(|f| f.label()).collect();
    let default = FilterSelector::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Show")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(FilterSelector::ALL[index])
}

fn pick_event(controller: &AppController<TerminalShell>) -> Result<Option<u32>> {
    let events = controller.store().all();
    if events.is_empty() {
        println!("No events to join yet.");
        return Ok(None);
    }

    let items: Vec<String> = events
        .iter()
        .map(|e| format!("{} {} ({})", e.icon, e.name, e.date.format("%a, %b %-d")))
        .collect();

    let index = Select::new()
        .with_prompt("Which cleanup? (Esc to cancel)")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(index.map(|i| events[i].id))
}

fn prompt_form(today: NaiveDate) -> Result<EventForm> {
    let name: String = Input::new().with_prompt("Event name").allow_empty(true).interact_text()?;

    let location: String = Input::new().with_prompt("Location").allow_empty(true).interact_text()?;

    let tomorrow = (today + Duration::days(1)).format("%Y-%m-%d").to_string();
    let date: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(tomorrow)
        .interact_text()?;

    let time: String = Input::new()
        .with_prompt("Time (HH:MM, optional)")
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(EventForm {
        name,
        location,
        date,
        time,
        description,
    })
}
