//! Game log parsing
//!
//! One game per line: `date player1 player2 result`. The last three tokens are
//! the players and the result; everything before them is the date, so date
//! formats containing spaces work too. Games come back oldest first no matter
//! how the file is ordered; games on the same date keep their file order.

use super::{malformed, records};
use crate::error::Result;
use crate::types::{Game, GameResult};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Parse a result token from player1's point of view
pub fn parse_game_result(token: &str) -> Option<GameResult> {
    match token {
        "1-0" | "1" => Some(GameResult::Win),
        "0-1" | "0" => Some(GameResult::Loss),
        "1/2-1/2" | "0.5-0.5" | "½-½" | "=" | "1/2" | "0.5" => Some(GameResult::Draw),
        _ => None,
    }
}

/// Parse game log text into chronological order
pub fn parse_games(text: &str, source_name: &str, date_format: &str) -> Result<Vec<Game>> {
    let mut games = Vec::new();

    for (line_number, line) in records(text) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(malformed(
                source_name,
                line_number,
                "expected `date player1 player2 result`",
            ));
        }

        let (date_tokens, rest) = tokens.split_at(tokens.len() - 3);
        let date_text = date_tokens.join(" ");
        let date = NaiveDate::parse_from_str(&date_text, date_format).map_err(|e| {
            malformed(
                source_name,
                line_number,
                format!("invalid date '{}': {}", date_text, e),
            )
        })?;

        let result = parse_game_result(rest[2]).ok_or_else(|| {
            malformed(
                source_name,
                line_number,
                format!("unknown result: {}", rest[2]),
            )
        })?;

        games.push(Game::new(date, rest[0], rest[1], result));
    }

    if games.windows(2).any(|pair| pair[0].date > pair[1].date) {
        info!("{} is not in chronological order, sorting by date", source_name);
        games.sort_by_key(|game| game.date);
    }

    debug!("Parsed {} games from {}", games.len(), source_name);
    Ok(games)
}
