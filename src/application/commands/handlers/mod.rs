//! Command Handlers

mod location_handlers;

pub use location_handlers::{CreateLocationHandler, DeleteLocationHandler};
