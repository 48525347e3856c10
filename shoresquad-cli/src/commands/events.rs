use anyhow::Result;
use shoresquad_core::FilterSelector;

use crate::app::{self, Settings};

pub fn run(settings: &Settings, filter: FilterSelector) -> Result<()> {
    let mut controller = app::build(settings);
    controller.set_filter(filter);
    controller.load_events()
}
