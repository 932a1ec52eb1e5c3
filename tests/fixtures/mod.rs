//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use elo_ladder::{Game, GameResult, Player, PlayerStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Club roster with a mix of ratings and names with spaces
pub const CLUB_ROSTER: &str = "\
# id      rating  name
alice     1500    Alice Liddell
bob       1500    Bob Cratchit
carol     1620    Carol Danvers
dave      1380    Dave
erin      1500    Erin Brockovich
";

/// Club game log, written newest first the way the club keeps it
pub const CLUB_GAMES: &str = "\
# date       white  black  result
2024-03-09   carol  alice  0-1
2024-03-09   dave   erin   1/2-1/2
2024-03-02   bob    carol  1/2-1/2
2024-02-24   alice  dave   1-0
2024-02-24   carol  bob    1-0
2024-02-17   alice  bob    1-0
";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Store whose names equal their ids
pub fn create_store(players: &[(&str, f64)]) -> PlayerStore {
    PlayerStore::from_players(
        players
            .iter()
            .map(|(id, rating)| Player::new(*id, *id, *rating)),
    )
    .unwrap()
}

pub fn game(day: u32, player1: &str, player2: &str, result: GameResult) -> Game {
    Game::new(date(2024, 1, day), player1, player2, result)
}

/// Input files written to a temporary directory
pub struct InputFiles {
    pub dir: TempDir,
    pub roster: PathBuf,
    pub games: PathBuf,
}

pub fn write_inputs(roster: &str, games: &str) -> InputFiles {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.txt");
    let games_path = dir.path().join("games.txt");
    std::fs::write(&roster_path, roster).unwrap();
    std::fs::write(&games_path, games).unwrap();

    InputFiles {
        dir,
        roster: roster_path,
        games: games_path,
    }
}
