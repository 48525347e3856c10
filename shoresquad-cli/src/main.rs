mod app;
mod commands;
mod render;
mod terminal;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shoresquad_core::config::ShoreSquadConfig;
use shoresquad_core::{Coordinates, FilterSelector};
use tracing_subscriber::EnvFilter;

use crate::app::Settings;

#[derive(Parser)]
#[command(name = "shoresquad")]
#[command(about = "Find beach cleanups near you, check the weather, and rally your crew")]
struct Cli {
    /// Use these coordinates instead of looking up your location (e.g. "1.38,103.95")
    #[arg(long, global = true, value_name = "LAT,LNG")]
    at: Option<Coordinates>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Session,
    /// List upcoming cleanup events
    Events {
        /// all, today, week or month
        #[arg(short, long, default_value_t = FilterSelector::All)]
        filter: FilterSelector,
    },
    /// Show the 4-day weather forecast
    Weather,
    /// Look up your current location
    Locate,
    /// Open the cleanup map in your browser
    Map,
    /// Distance in kilometers between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
    },
    /// Show config paths and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::from_load(ShoreSquadConfig::load());
    if let Some(at) = cli.at {
        settings.pin_location(at);
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(&settings).await,
        Commands::Events { filter } => commands::events::run(&settings, filter),
        Commands::Weather => commands::weather::run(&settings).await,
        Commands::Locate => commands::locate::run(&settings).await,
        Commands::Map => commands::map::run(&settings).await,
        Commands::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => commands::distance::run(Coordinates::new(lat1, lng1), Coordinates::new(lat2, lng2)),
        Commands::Config => commands::config::run(&settings),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shoresquad=warn,shoresquad_core=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
