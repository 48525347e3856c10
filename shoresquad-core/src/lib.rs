//! Core of ShoreSquad, a beach-cleanup organizer.
//!
//! - `event`, `store`, `filter`, `card` and `form` hold and present cleanup events
//! - `weather` fetches the 4-day forecast with a deterministic fallback
//! - `geo` acquires a best-effort location fix
//! - `notify` routes user-facing messages to a presentation sink
//! - `controller` wires it all together behind a `Shell`

pub mod card;
pub mod config;
pub mod constants;
pub mod controller;
pub mod distance;
pub mod error;
pub mod event;
pub mod filter;
pub mod form;
pub mod geo;
pub mod notify;
pub mod state;
pub mod store;
pub mod weather;

pub use card::{DisplayRecord, EventsView, present};
pub use controller::{Action, AppController, Shell};
pub use distance::{Coordinates, haversine_km};
pub use error::{ShoreSquadError, ShoreSquadResult};
pub use event::Event;
pub use filter::FilterSelector;
