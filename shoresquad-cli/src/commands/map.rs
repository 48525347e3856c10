use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::{self, Settings};
use crate::terminal::map_url;

pub async fn run(settings: &Settings) -> Result<()> {
    let mut controller = app::build(settings);
    controller.locate().await?.ok();

    let url = match controller.shell().map_url() {
        Some(url) => url.clone(),
        None => {
            let url = map_url(controller.map_center(), settings.config.map_zoom)?;
            println!("🗺️  Map: {}", url.as_str().dimmed());
            url
        }
    };
    open_in_browser(url.as_str());
    Ok(())
}

pub fn open_in_browser(url: &str) {
    if open::that(url).is_err() {
        println!(
            "{}",
            "(Could not open browser automatically. Open the link above.)".dimmed()
        );
    }
}
