use anyhow::Result;
use owo_colors::OwoColorize;
use shoresquad_core::config::ShoreSquadConfig;

use crate::app::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let config = &settings.config;
    let config_path = ShoreSquadConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    if let Some(worker) = config.worker_script_path() {
        println!("  Worker:  {}", worker.display());
    }

    println!();
    println!("{}", "Effective settings".bold());
    if settings.degraded {
        println!("  {}", "(config file could not be read, showing defaults)".yellow());
    }
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
