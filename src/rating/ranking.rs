//! Ranked view of a player store

use crate::rating::storage::PlayerStore;
use crate::types::RankedPlayer;
use std::cmp::Ordering;

/// Players ordered by rating, highest first, with 1-based ranks
///
/// The sort is stable: players with equal ratings keep the order they have in
/// the store, which puts the most recently updated player first. Ranks follow
/// position, so tied players still get distinct ranks. `-0.0` and `0.0` tie.
pub fn rank(store: &PlayerStore) -> Vec<RankedPlayer> {
    let mut players: Vec<_> = store.iter().cloned().collect();
    players.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
    });

    players
        .into_iter()
        .enumerate()
        .map(|(index, player)| RankedPlayer {
            rank: index + 1,
            player,
        })
        .collect()
}

/// Like [`rank`], keeping only the first `limit` rows when a limit is given
pub fn top(store: &PlayerStore, limit: Option<usize>) -> Vec<RankedPlayer> {
    let mut ranked = rank(store);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
