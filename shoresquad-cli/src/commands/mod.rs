pub mod config;
pub mod distance;
pub mod events;
pub mod locate;
pub mod map;
pub mod session;
pub mod weather;
