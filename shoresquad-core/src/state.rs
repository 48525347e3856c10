//! Mutable application state, owned by `AppController`.

use serde::Serialize;

use crate::filter::FilterSelector;
use crate::geo::LocationFix;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub filter: FilterSelector,
    pub location: Option<LocationFix>,
    pub loading_weather: bool,
    pub locating: bool,
    pub dark_mode: bool,
}
