//! Roster parsing
//!
//! One player per line: `id rating name`. The name is the rest of the line and
//! may contain spaces; a missing name falls back to the id.

use super::{malformed, records, split_token};
use crate::error::Result;
use crate::rating::PlayerStore;
use crate::types::Player;
use tracing::debug;

/// Parse roster text into a store that keeps the roster's line order
pub fn parse_roster(text: &str, source_name: &str) -> Result<PlayerStore> {
    let mut players = Vec::new();

    for (line_number, line) in records(text) {
        let (id, rest) = split_token(line);
        let (rating, name) = split_token(rest);

        if rating.is_empty() {
            return Err(malformed(
                source_name,
                line_number,
                format!("missing rating for player {}", id),
            ));
        }

        let rating: f64 = rating.parse().map_err(|_| {
            malformed(
                source_name,
                line_number,
                format!("rating is not a number: {}", rating),
            )
        })?;
        if !rating.is_finite() {
            return Err(malformed(
                source_name,
                line_number,
                format!("rating must be finite: {}", rating),
            ));
        }

        let name = if name.is_empty() { id } else { name };
        players.push(Player::new(id, name, rating));
    }

    debug!("Parsed {} players from {}", players.len(), source_name);
    PlayerStore::from_players(players)
}
