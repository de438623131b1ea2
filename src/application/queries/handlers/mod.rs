//! Query Handlers

mod location_handlers;

pub use location_handlers::{GetLocationHandler, ListLocationsHandler, LocationView};
