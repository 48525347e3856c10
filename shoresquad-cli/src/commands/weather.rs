use anyhow::Result;

use crate::app::{self, Settings};

pub async fn run(settings: &Settings) -> Result<()> {
    let mut controller = app::build(settings);
    controller.refresh_weather().await
}
