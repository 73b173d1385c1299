//! HTTP Handlers

mod chapter;
mod ping;

pub use chapter::*;
pub use ping::*;
