//! Fixed-width report lines
//!
//! Column widths and result strings come from `config::constants`.

use crate::config::constants::{
    GAME_NAME_WIDTH, LADDER_NAME_WIDTH, RANK_WIDTH, RATING_WIDTH, RESULT_DRAW, RESULT_LOSS,
    RESULT_WIN,
};

/// Result column text for player1's score
///
/// Only exact 1.0 and 0.5 are special; every other score reads as a loss.
pub fn result_text(score: f64) -> &'static str {
    if score == 1.0 {
        RESULT_WIN
    } else if score == 0.5 {
        RESULT_DRAW
    } else {
        RESULT_LOSS
    }
}

/// `rank. name rating (games)` with the rating truncated toward zero
pub fn ladder_line(rank: usize, name: &str, rating: f64, game_count: u32) -> String {
    format!(
        "{:>rank_width$}. {:<name_width$} {:>rating_width$} ({})",
        rank,
        name,
        rating.trunc() as i64,
        game_count,
        rank_width = RANK_WIDTH,
        name_width = LADDER_NAME_WIDTH,
        rating_width = RATING_WIDTH,
    )
}

/// `date player1 result player2`, player1 right-aligned against the result
pub fn game_line(date: &str, player1: &str, player2: &str, score: f64) -> String {
    format!(
        "{} {:>width$} {} {:<width$}",
        date,
        player1,
        result_text(score),
        player2,
        width = GAME_NAME_WIDTH,
    )
}
