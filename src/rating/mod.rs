//! Rating engine: the Elo model, the ordered player store, game replay and ranking
//!
//! This module holds everything with real invariants. It works purely on
//! in-memory values; parsing and rendering live elsewhere.

pub mod elo;
pub mod ranking;
pub mod replay;
pub mod storage;

// Re-export commonly used types
pub use ranking::{rank, top};
pub use replay::{play_one, replay};
pub use storage::PlayerStore;
