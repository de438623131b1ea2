//! HTTP Handlers

mod location;
mod ping;

pub use location::*;
pub use ping::*;
