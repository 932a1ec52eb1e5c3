//! Elo Ladder - replays a game log over a roster and renders the standings
//!
//! This crate provides a fixed-K Elo rating engine over an ordered player
//! store, with roster and game log parsing and plain, Markdown and JSON
//! report rendering.

pub mod config;
pub mod error;
pub mod parse;
pub mod rating;
pub mod render;
pub mod service;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LadderError, Result};
pub use types::*;

// Re-export key components
pub use rating::{rank, replay, PlayerStore};
pub use service::{LadderOutcome, LadderService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
