//! Common types used throughout the ladder

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// A competitor on the ladder
///
/// Records are never edited in place by the rating engine; each game yields
/// a fresh `Player` via [`Player::after_game`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: f64,
    pub game_count: u32,
}

impl Player {
    /// Create a roster entry that has not played yet
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            game_count: 0,
        }
    }

    /// The record for this player after one more game ending at `new_rating`
    pub fn after_game(&self, new_rating: f64) -> Self {
        Self {
            rating: new_rating,
            game_count: self.game_count + 1,
            ..self.clone()
        }
    }
}

/// Outcome of a game from the first-listed player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Score credited to player1
    pub fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    /// Result from player2's point of view
    pub fn reversed(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Draw => GameResult::Draw,
            GameResult::Loss => GameResult::Win,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win => write!(f, "1-0"),
            GameResult::Draw => write!(f, "1/2-1/2"),
            GameResult::Loss => write!(f, "0-1"),
        }
    }
}

/// A single played game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub date: NaiveDate,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub result: GameResult,
}

impl Game {
    pub fn new(
        date: NaiveDate,
        player1_id: impl Into<PlayerId>,
        player2_id: impl Into<PlayerId>,
        result: GameResult,
    ) -> Self {
        Self {
            date,
            player1_id: player1_id.into(),
            player2_id: player2_id.into(),
            result,
        }
    }

    /// Whether both sides name the same player
    pub fn is_self_game(&self) -> bool {
        self.player1_id == self.player2_id
    }
}

/// A player with their 1-based position in the ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_no_games() {
        let player = Player::new("alice", "Alice Liddell", 1500.0);
        assert_eq!(player.id, "alice");
        assert_eq!(player.name, "Alice Liddell");
        assert_eq!(player.game_count, 0);
    }

    #[test]
    fn test_after_game_leaves_original_untouched() {
        let player = Player::new("alice", "Alice", 1500.0);
        let updated = player.after_game(1516.0);

        assert_eq!(updated.rating, 1516.0);
        assert_eq!(updated.game_count, 1);
        assert_eq!(updated.name, "Alice");
        assert_eq!(player.rating, 1500.0);
        assert_eq!(player.game_count, 0);
    }

    #[test]
    fn test_result_scores() {
        assert_eq!(GameResult::Win.score(), 1.0);
        assert_eq!(GameResult::Draw.score(), 0.5);
        assert_eq!(GameResult::Loss.score(), 0.0);

        for result in [GameResult::Win, GameResult::Draw, GameResult::Loss] {
            assert_eq!(result.score() + result.reversed().score(), 1.0);
        }
    }

    #[test]
    fn test_self_game_detection() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Game::new(date, "a", "a", GameResult::Draw).is_self_game());
        assert!(!Game::new(date, "a", "b", GameResult::Draw).is_self_game());
    }
}
