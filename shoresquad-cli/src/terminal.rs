//! Terminal implementations of the presentation seams.

use std::process::Stdio;
use std::sync::Mutex;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use shoresquad_core::config::{ShoreSquadConfig, ThemePreference};
use shoresquad_core::geo::LocationFix;
use shoresquad_core::notify::{Channel, Notification, NotificationId, NotifySink};
use shoresquad_core::weather::Forecast;
use shoresquad_core::{Coordinates, EventsView, FilterSelector, Shell};
use tokio::process::Command;
use url::Url;

use crate::render::{self, Render};
use crate::utils::tui::create_spinner;

const MAPS_BASE_URL: &str = "https://www.google.com/maps/@";

/// Google Maps link centred on `center`.
pub fn map_url(center: Coordinates, zoom: u8) -> Result<Url> {
    let url = Url::parse_with_params(
        MAPS_BASE_URL,
        &[
            ("api", "1".to_string()),
            ("map_action", "map".to_string()),
            ("center", center.to_string()),
            ("zoom", zoom.to_string()),
        ],
    )?;
    Ok(url)
}

/// Whether a `COLORFGBG` value ("fg;bg") describes a dark background.
fn background_is_dark(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}

pub struct TerminalShell {
    config: ShoreSquadConfig,
    map_url: Option<Url>,
}

impl TerminalShell {
    pub fn new(config: ShoreSquadConfig) -> Self {
        TerminalShell {
            config,
            map_url: None,
        }
    }

    /// The most recently shown map link.
    pub fn map_url(&self) -> Option<&Url> {
        self.map_url.as_ref()
    }
}

impl Shell for TerminalShell {
    fn wire_navigation(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🌊 ShoreSquad".bold().cyan(),
            "Rally your crew, clean the shore".dimmed()
        );
        Ok(())
    }

    fn wire_listeners(&mut self) -> Result<()> {
        tracing::debug!("Terminal input is read per prompt");
        Ok(())
    }

    fn show_map(&mut self, center: Coordinates, fix: Option<&LocationFix>) -> Result<()> {
        let url = map_url(center, self.config.map_zoom)?;

        let label = match fix {
            Some(_) => "Map (your location)",
            None => "Map",
        };
        println!("🗺️  {}: {}", label, url.as_str().dimmed());

        self.map_url = Some(url);
        Ok(())
    }

    fn render_forecast(&mut self, forecast: &Forecast) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        println!("\n{}", render::render_forecast(forecast, today));
        Ok(())
    }

    fn render_events(&mut self, filter: FilterSelector, view: &EventsView) -> Result<()> {
        println!("\n{}", render::render_events(filter, view));
        Ok(())
    }

    fn prefers_dark(&mut self) -> Result<bool> {
        Ok(match self.config.dark_mode {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::Auto => std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| background_is_dark(&v))
                .unwrap_or(false),
        })
    }

    fn register_background_worker(&mut self) -> Result<()> {
        let Some(script) = self.config.worker_script_path() else {
            tracing::debug!("No background worker configured");
            return Ok(());
        };

        if !script.exists() {
            anyhow::bail!("Worker script {} not found", script.display());
        }
        if tokio::runtime::Handle::try_current().is_err() {
            anyhow::bail!("Background worker needs a running runtime");
        }

        // Dropping the handle leaves the worker running; tokio reaps it on exit.
        let child = Command::new(&script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Could not start worker script {}", script.display()))?;

        tracing::info!(
            pid = child.id(),
            script = %script.display(),
            "Background worker registered"
        );
        Ok(())
    }
}

/// Prints notifications as they arrive; the loading overlay is a spinner.
#[derive(Default)]
pub struct TerminalSink {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalSink {
    pub fn new() -> Self {
        TerminalSink::default()
    }

    fn print(&self, line: String, stderr: bool) {
        let spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        let write = || {
            if stderr {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        };

        match spinner.as_ref() {
            Some(bar) => bar.suspend(write),
            None => write(),
        }
    }
}

impl NotifySink for TerminalSink {
    fn show(&self, notification: &Notification) {
        match notification.channel {
            Channel::LoadingOverlay => {
                let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
                if notification.active {
                    match spinner.as_ref() {
                        Some(bar) => bar.set_message(notification.message.clone()),
                        None => *spinner = Some(create_spinner(notification.message.clone())),
                    }
                } else if let Some(bar) = spinner.take() {
                    bar.finish_and_clear();
                }
            }
            Channel::Toast => self.print(notification.render(), true),
            Channel::InlineError | Channel::InlineSuccess => {
                self.print(format!("  {}", notification.render()), false)
            }
        }
    }

    // Printed lines stay in the scrollback.
    fn dismiss(&self, id: NotificationId) {
        tracing::trace!(?id, "notification expired");
    }
}
