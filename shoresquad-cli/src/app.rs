use std::sync::Arc;

use shoresquad_core::config::{LocationSourceKind, ShoreSquadConfig};
use shoresquad_core::constants::GENERIC_ERROR_MESSAGE;
use shoresquad_core::geo::{GeoLocator, LocationSource, NoLocation};
use shoresquad_core::notify::{NotificationCenter, NotifySink};
use shoresquad_core::weather::WeatherProvider;
use shoresquad_core::{AppController, Coordinates, ShoreSquadResult};

use crate::terminal::{TerminalShell, TerminalSink};

/// The effective configuration for this run.
pub struct Settings {
    pub config: ShoreSquadConfig,
    /// The config file could not be used as written
    pub degraded: bool,
}

impl Settings {
    /// Fall back to the defaults when the config cannot be loaded.
    pub fn from_load(loaded: ShoreSquadResult<ShoreSquadConfig>) -> Self {
        match loaded {
            Ok(config) => Settings {
                config,
                degraded: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Could not load config, using defaults");
                Settings {
                    config: ShoreSquadConfig::default(),
                    degraded: true,
                }
            }
        }
    }

    /// Replace the configured location source with a fixed position.
    pub fn pin_location(&mut self, at: Coordinates) {
        let location = &mut self.config.location;
        location.source = LocationSourceKind::Fixed;
        location.latitude = Some(at.latitude);
        location.longitude = Some(at.longitude);
    }
}

/// Wire a controller to the terminal.
pub fn build(settings: &Settings) -> AppController<TerminalShell> {
    build_with_sink(settings, Arc::new(TerminalSink::new()))
}

fn build_with_sink(
    settings: &Settings,
    sink: Arc<dyn NotifySink>,
) -> AppController<TerminalShell> {
    let config = &settings.config;
    let notifier = Arc::new(NotificationCenter::new(sink));
    let mut degraded = settings.degraded;

    let location: Box<dyn LocationSource> = match config.location_source() {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid location settings, continuing without location");
            degraded = true;
            Box::new(NoLocation)
        }
    };

    if degraded {
        notifier.inline_error(GENERIC_ERROR_MESSAGE, None);
    }

    let weather = WeatherProvider::new(config.forecast_source(), Arc::clone(&notifier))
        .with_timeout(config.weather_timeout());
    let geo =
        GeoLocator::new(location, Arc::clone(&notifier)).with_options(config.position_options());

    AppController::new(
        TerminalShell::new(config.clone()),
        notifier,
        weather,
        geo,
        config.organizing_location,
    )
}
