use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::{self, Settings};

pub async fn run(settings: &Settings) -> Result<()> {
    let mut controller = app::build(settings);

    match controller.locate().await? {
        Ok(fix) => {
            let organizing = settings.config.organizing_location;
            println!("{}", "Your location".bold());
            println!("  Coordinates:    {}", fix.coordinates);
            println!(
                "  Acquired:       {}",
                fix.acquired_at.with_timezone(&chrono::Local).format("%H:%M:%S")
            );
            println!(
                "  To organizers: {:.1} km",
                fix.coordinates.distance_km(&organizing)
            );
        }
        // The failure has already been reported as a notification.
        Err(_) => println!("  Using organizing location {}", controller.map_center()),
    }

    Ok(())
}
