//! Application orchestration.
//!
//! `AppController` owns the single mutable `AppState` and the event store,
//! runs the startup sequence, and turns user actions into store mutations
//! plus re-renders. All rendering goes through a `Shell`, so the controller
//! never touches a UI toolkit directly.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use futures::FutureExt;

use crate::card::{EventsView, present};
use crate::constants::{GENERIC_ERROR_MESSAGE, NO_EVENTS_MESSAGE};
use crate::distance::Coordinates;
use crate::error::{FieldError, GeoError};
use crate::event::{Event, demo_events};
use crate::filter::{FilterSelector, filter};
use crate::form::EventForm;
use crate::geo::{GeoLocator, LocationFix};
use crate::notify::{NotificationCenter, Severity};
use crate::state::AppState;
use crate::store::EventStore;
use crate::weather::{Forecast, WeatherProvider};

/// Presentation layer driven by the controller.
pub trait Shell {
    fn wire_navigation(&mut self) -> anyhow::Result<()>;

    fn wire_listeners(&mut self) -> anyhow::Result<()>;

    /// Centre the map on `center`; `fix` is the user's position when known.
    fn show_map(&mut self, center: Coordinates, fix: Option<&LocationFix>) -> anyhow::Result<()>;

    fn render_forecast(&mut self, forecast: &Forecast) -> anyhow::Result<()>;

    fn render_events(&mut self, filter: FilterSelector, view: &EventsView) -> anyhow::Result<()>;

    fn prefers_dark(&mut self) -> anyhow::Result<bool>;

    fn register_background_worker(&mut self) -> anyhow::Result<()>;
}

/// A user action.
#[derive(Debug, Clone)]
pub enum Action {
    SelectFilter(FilterSelector),
    Join(u32),
    CreateEvent(EventForm),
    RefreshWeather,
    Locate,
    JoinMovement,
}

pub struct AppController<S: Shell> {
    state: AppState,
    store: EventStore,
    forecast: Option<Forecast>,
    shell: S,
    notifier: Arc<NotificationCenter>,
    weather: WeatherProvider,
    geo: GeoLocator,
    organizing_location: Coordinates,
    clock: fn() -> NaiveDateTime,
}

impl<S: Shell> AppController<S> {
    pub fn new(
        shell: S,
        notifier: Arc<NotificationCenter>,
        weather: WeatherProvider,
        geo: GeoLocator,
        organizing_location: Coordinates,
    ) -> Self {
        AppController {
            state: AppState::default(),
            store: EventStore::new(),
            forecast: None,
            shell,
            notifier,
            weather,
            geo,
            organizing_location,
            clock: || Local::now().naive_local(),
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Run the startup sequence. Each step is isolated: a failing step is
    /// logged and the remaining steps still run.
    pub async fn start(&mut self) {
        tracing::info!("Initializing ShoreSquad...");
        let notifier = Arc::clone(&self.notifier);
        let now = self.now();

        run_step(&notifier, "navigation", async { self.shell.wire_navigation() }).await;
        run_step(&notifier, "listeners", async { self.shell.wire_listeners() }).await;
        run_step(&notifier, "map", async {
            self.shell.show_map(self.organizing_location, None)
        })
        .await;

        self.state.locating = true;
        self.state.loading_weather = true;

        let (fix, forecast, _) = {
            let AppController {
                state,
                store,
                shell,
                geo,
                weather,
                ..
            } = &mut *self;

            tokio::join!(
                guard(&notifier, "geolocation", geo.acquire()),
                guard(&notifier, "weather", weather.fetch_forecast(now.date())),
                run_step(&notifier, "events", async { seed_and_render(store, state, shell, now) }),
            )
        };

        self.state.locating = false;
        self.state.loading_weather = false;

        if let Some(Ok(fix)) = fix {
            self.state.location = Some(fix);
            run_step(&notifier, "map", async { self.recenter_and_render() }).await;
        }

        if let Some(forecast) = forecast {
            run_step(&notifier, "forecast", async {
                let rendered = self.shell.render_forecast(&forecast);
                self.forecast = Some(forecast);
                rendered
            })
            .await;
        }

        let dark = run_step(&notifier, "dark mode", async { self.shell.prefers_dark() }).await;
        if let Some(dark) = dark {
            self.state.dark_mode = dark;
        }

        run_step(&notifier, "background worker", async {
            self.shell.register_background_worker()
        })
        .await;
    }

    /// Top-level boundary for user actions. Unexpected failures surface as a
    /// generic inline error instead of propagating.
    pub async fn dispatch(&mut self, action: Action) {
        let notifier = Arc::clone(&self.notifier);
        let outcome = guard(&notifier, "action", self.handle(action)).await;

        if let Some(Err(e)) = outcome {
            tracing::error!(error = %e, "Action failed");
            notifier.inline_error(GENERIC_ERROR_MESSAGE, None);
        }
    }

    pub async fn handle(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            Action::SelectFilter(selector) => self.select_filter(selector),
            Action::Join(id) => self.join(id).map(|_| ()),
            Action::CreateEvent(form) => self.create_event(&form).map(|_| ()),
            Action::RefreshWeather => self.refresh_weather().await,
            Action::Locate => self.locate().await.map(|_| ()),
            Action::JoinMovement => {
                self.join_movement();
                Ok(())
            }
        }
    }

    /// Seed the store with the demo events and render them.
    pub fn load_events(&mut self) -> anyhow::Result<()> {
        let now = self.now();
        seed_and_render(&mut self.store, &self.state, &mut self.shell, now)
    }

    /// Change the filter without rendering.
    pub fn set_filter(&mut self, selector: FilterSelector) {
        self.state.filter = selector;
    }

    pub fn select_filter(&mut self, selector: FilterSelector) -> anyhow::Result<()> {
        self.set_filter(selector);
        self.render_events()
    }

    /// The filtered, presented events for the current state.
    pub fn view(&self) -> EventsView {
        events_view(&self.store, &self.state, self.now())
    }

    pub fn render_events(&mut self) -> anyhow::Result<()> {
        let view = self.view();
        self.shell.render_events(self.state.filter, &view)
    }

    /// Add the user to an event. Returns false when the id is unknown.
    pub fn join(&mut self, id: u32) -> anyhow::Result<bool> {
        if !self.store.increment_participants(id) {
            tracing::debug!(id, "Join for unknown event");
            return Ok(false);
        }

        if let Some(event) = self.store.get(id) {
            self.notifier.toast(
                format!("✨ You joined \"{}\"! Welcome to the crew!", event.name),
                Severity::Success,
            );
        }
        self.render_events()?;
        Ok(true)
    }

    /// Validate and insert a user-submitted event.
    ///
    /// Validation failures are reported inline per field and leave the store
    /// untouched.
    pub fn create_event(
        &mut self,
        form: &EventForm,
    ) -> anyhow::Result<Result<Event, Vec<FieldError>>> {
        let coordinates = self
            .state
            .location
            .map(|fix| fix.coordinates)
            .unwrap_or(self.organizing_location);

        let draft = match form.validate(self.now().date(), coordinates) {
            Ok(draft) => draft,
            Err(errors) => {
                for error in &errors {
                    self.notifier.inline_error(error.message.clone(), None);
                }
                return Ok(Err(errors));
            }
        };

        let event = self.store.insert_front(draft).clone();
        tracing::info!(id = event.id, name = %event.name, "Event created");

        self.render_events()?;
        self.notifier.toast(
            format!("🎉 Event \"{}\" created successfully!", event.name),
            Severity::Success,
        );
        Ok(Ok(event))
    }

    pub async fn refresh_weather(&mut self) -> anyhow::Result<()> {
        self.state.loading_weather = true;
        self.notifier.loading_overlay(true, Some("Fetching forecast..."));

        let forecast = self.weather.fetch_forecast(self.now().date()).await;

        self.notifier.loading_overlay(false, None);
        self.state.loading_weather = false;

        let rendered = self.shell.render_forecast(&forecast);
        self.forecast = Some(forecast);
        rendered
    }

    /// Acquire a fresh fix. On failure the previous fix is kept.
    pub async fn locate(&mut self) -> anyhow::Result<Result<LocationFix, GeoError>> {
        self.state.locating = true;
        let result = self.geo.acquire().await;
        self.state.locating = false;

        if let Ok(fix) = result {
            self.state.location = Some(fix);
            self.recenter_and_render()?;
        }
        Ok(result)
    }

    pub fn join_movement(&self) {
        self.notifier.toast(
            "🌍 Thanks for joining the movement! Check out our events!",
            Severity::Success,
        );
    }

    /// Centre of the map: the user's fix when known, else the organizing location.
    pub fn map_center(&self) -> Coordinates {
        self.state
            .location
            .map(|fix| fix.coordinates)
            .unwrap_or(self.organizing_location)
    }

    fn recenter_and_render(&mut self) -> anyhow::Result<()> {
        let center = self.map_center();
        self.shell.show_map(center, self.state.location.as_ref())?;
        if self.store.is_empty() {
            return Ok(());
        }
        self.render_events()
    }
}

fn seed_and_render<S: Shell>(
    store: &mut EventStore,
    state: &AppState,
    shell: &mut S,
    now: NaiveDateTime,
) -> anyhow::Result<()> {
    store.seed(demo_events(now.date()))?;
    let view = events_view(store, state, now);
    shell.render_events(state.filter, &view)
}

fn events_view(store: &EventStore, state: &AppState, now: NaiveDateTime) -> EventsView {
    let cards: Vec<_> = filter(store.all(), state.filter, now)
        .into_iter()
        .map(|event| {
            let record = present(event, now);
            match &state.location {
                Some(fix) => record.with_distance(&fix.coordinates, event),
                None => record,
            }
        })
        .collect();

    if cards.is_empty() {
        EventsView::Empty {
            message: NO_EVENTS_MESSAGE.to_string(),
        }
    } else {
        EventsView::Cards(cards)
    }
}

/// Run `fut`, converting a panic into a logged, generic inline error.
async fn guard<T>(
    notifier: &NotificationCenter,
    step: &'static str,
    fut: impl Future<Output = T>,
) -> Option<T> {
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Some(value),
        Err(panic) => {
            tracing::error!(step, panic = panic_message(&*panic), "Unexpected failure");
            notifier.inline_error(GENERIC_ERROR_MESSAGE, None);
            None
        }
    }
}

/// Like `guard`, but an `Err` is only logged.
async fn run_step<T>(
    notifier: &NotificationCenter,
    step: &'static str,
    fut: impl Future<Output = anyhow::Result<T>>,
) -> Option<T> {
    match guard(notifier, step, fut).await? {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(step, error = %e, "Step failed");
            None
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
