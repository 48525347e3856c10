use anyhow::Result;
use shoresquad_core::{Coordinates, haversine_km};

pub fn run(from: Coordinates, to: Coordinates) -> Result<()> {
    println!("{:.2} km", haversine_km(&from, &to));
    Ok(())
}
