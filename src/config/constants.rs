//! Fixed rating and report layout constants
//!
//! These are part of the output contract and are not configurable.

/// Sensitivity of every rating update
pub const K_FACTOR: f64 = 32.0;

/// Rating difference at which the stronger player is ten times as likely to win
pub const RATING_SCALE: f64 = 400.0;

/// Base of the logistic curve used for expectations
pub const RATING_BASE: f64 = 10.0;

/// Width of the right-aligned rank column
pub const RANK_WIDTH: usize = 2;

/// Width of the left-aligned name column in the ladder
pub const LADDER_NAME_WIDTH: usize = 30;

/// Width of the right-aligned rating column
pub const RATING_WIDTH: usize = 4;

/// Width of each name column in the game log
pub const GAME_NAME_WIDTH: usize = 20;

/// Rendered result when player1 won
pub const RESULT_WIN: &str = "  1 - 0";

/// Rendered result for a draw
pub const RESULT_DRAW: &str = "0.5 - 0.5";

/// Rendered result for every other score
pub const RESULT_LOSS: &str = "  0 - 1";

/// Default chrono format for dates, both parsed and printed
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
