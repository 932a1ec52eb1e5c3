//! Report model shared by all renderers

use crate::error::Result;
use crate::rating::PlayerStore;
use crate::types::{Game, PlayerId, RankedPlayer};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ladder row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderRow {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub rating: f64,
    pub game_count: u32,
}

/// One game log row, with names taken from the starting roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    pub date: NaiveDate,
    pub player1: String,
    pub player2: String,
    /// player1's score
    pub score: f64,
}

/// Everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderReport {
    pub title: String,
    pub ladder: Vec<LadderRow>,
    pub games: Vec<GameRow>,
}

impl LadderReport {
    /// Assemble a report from the ranking and the games as parsed
    ///
    /// Game rows use the names in `initial_store`, the roster before any
    /// replay. `newest_first` only changes the display order of game rows.
    pub fn build(
        title: &str,
        ranked: &[RankedPlayer],
        games: &[Game],
        initial_store: &PlayerStore,
        newest_first: bool,
    ) -> Result<Self> {
        let ladder = ranked
            .iter()
            .map(|entry| LadderRow {
                rank: entry.rank,
                id: entry.player.id.clone(),
                name: entry.player.name.clone(),
                rating: entry.player.rating,
                game_count: entry.player.game_count,
            })
            .collect();

        let mut rows = games
            .iter()
            .map(|game| -> Result<GameRow> {
                Ok(GameRow {
                    date: game.date,
                    player1: initial_store.lookup(&game.player1_id)?.name.clone(),
                    player2: initial_store.lookup(&game.player2_id)?.name.clone(),
                    score: game.result.score(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if newest_first {
            rows.reverse();
        }

        Ok(Self {
            title: title.to_string(),
            ladder,
            games: rows,
        })
    }
}
