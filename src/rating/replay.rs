//! Sequential replay of a game log over a player store
//!
//! Each game reads the ratings left by every earlier game, so games are
//! applied one at a time in the order given and never reordered.

use crate::error::{LadderError, Result};
use crate::rating::elo;
use crate::rating::storage::PlayerStore;
use crate::types::Game;
use tracing::{debug, info};

/// Apply a single game, returning the store after it
///
/// Both players are looked up before anything changes, so an error never
/// leaves a half-applied game behind. After the update player1 sits at the
/// front of the store with player2 directly behind it.
pub fn play_one(store: PlayerStore, game: &Game) -> Result<PlayerStore> {
    if game.is_self_game() {
        return Err(LadderError::InvalidGame {
            player_id: game.player1_id.clone(),
        }
        .into());
    }

    let player1 = store.lookup(&game.player1_id)?;
    let player2 = store.lookup(&game.player2_id)?;

    let (rating1, rating2) = elo::update(player1.rating, player2.rating, game.result.score());
    let updated1 = player1.after_game(rating1);
    let updated2 = player2.after_game(rating2);

    debug!(
        "{} {} vs {} ({}): {:.1} -> {:.1}, {:.1} -> {:.1}",
        game.date,
        game.player1_id,
        game.player2_id,
        game.result,
        player1.rating,
        rating1,
        player2.rating,
        rating2
    );

    Ok(store.upsert(updated2).upsert(updated1))
}

/// Replay `games` in order over a copy of `store`
///
/// The caller's store is left as it was, whether or not the replay succeeds.
pub fn replay(store: &PlayerStore, games: &[Game]) -> Result<PlayerStore> {
    let result = games
        .iter()
        .try_fold(store.clone(), |current, game| play_one(current, game))?;

    info!(
        "Replayed {} games over {} players",
        games.len(),
        result.len()
    );

    Ok(result)
}
