//! Service coordination for a single ladder run

pub mod ladder;

pub use ladder::{LadderOutcome, LadderService};
