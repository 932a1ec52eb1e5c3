//! Ladder computation service
//!
//! Coordinates one run: read the inputs, parse them, replay the games, rank
//! the result and render the report. Every step fails fast; there are no
//! partial reports.

use crate::config::AppConfig;
use crate::error::Result;
use crate::parse::{parse_games, parse_roster};
use crate::rating::{rank, replay, top, PlayerStore};
use crate::render::{renderer_for, LadderReport};
use crate::types::{Game, RankedPlayer};
use anyhow::Context;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Everything one computation produced before rendering
#[derive(Debug, Clone)]
pub struct LadderOutcome {
    /// Roster as parsed, before any game
    pub initial: PlayerStore,
    /// Games in replay order
    pub games: Vec<Game>,
    /// Store after replaying every game
    pub final_store: PlayerStore,
    pub ranked: Vec<RankedPlayer>,
}

/// Runs ladder computations with a fixed configuration
#[derive(Debug, Clone)]
pub struct LadderService {
    config: AppConfig,
}

impl LadderService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse both inputs and replay the games
    pub fn compute(
        &self,
        roster_text: &str,
        roster_name: &str,
        games_text: &str,
        games_name: &str,
    ) -> Result<LadderOutcome> {
        let start_time = Instant::now();

        let initial = parse_roster(roster_text, roster_name)?;
        let games = parse_games(games_text, games_name, &self.config.input.date_format)?;
        info!(
            "Loaded {} players and {} games",
            initial.len(),
            games.len()
        );

        let final_store = replay(&initial, &games)?;
        let ranked = rank(&final_store);

        debug!("Ladder computed in {:?}", start_time.elapsed());

        Ok(LadderOutcome {
            initial,
            games,
            final_store,
            ranked,
        })
    }

    /// Render a computed ladder in the configured format
    pub fn render(&self, outcome: &LadderOutcome) -> Result<String> {
        let output = &self.config.output;
        let ranked = match output.top {
            Some(_) => top(&outcome.final_store, output.top),
            None => outcome.ranked.clone(),
        };

        let report = LadderReport::build(
            &output.title,
            &ranked,
            &outcome.games,
            &outcome.initial,
            output.newest_first,
        )?;

        renderer_for(output.format, &output.date_format).render(&report)
    }

    /// Compute and render from in-memory text
    pub fn run_text(
        &self,
        roster_text: &str,
        roster_name: &str,
        games_text: &str,
        games_name: &str,
    ) -> Result<String> {
        let outcome = self.compute(roster_text, roster_name, games_text, games_name)?;
        self.render(&outcome)
    }

    /// Read both input files and compute the ladder
    pub fn compute_files(&self, roster_path: &Path, games_path: &Path) -> Result<LadderOutcome> {
        let roster_text = read_input(roster_path)?;
        let games_text = read_input(games_path)?;

        self.compute(
            &roster_text,
            &roster_path.display().to_string(),
            &games_text,
            &games_path.display().to_string(),
        )
    }

    /// Read both input files, compute and render the ladder
    pub fn run_files(&self, roster_path: &Path, games_path: &Path) -> Result<String> {
        let outcome = self.compute_files(roster_path, games_path)?;
        self.render(&outcome)
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::LadderError;

    const ROSTER: &str = "alice 1500 Alice\nbob 1500 Bob\ncarol 1400 Carol\n";
    const GAMES: &str = "2024-01-02 alice bob 1-0\n2024-01-03 carol alice 1/2-1/2\n";

    #[test]
    fn test_compute() {
        let service = LadderService::new(AppConfig::default());
        let outcome = service
            .compute(ROSTER, "roster.txt", GAMES, "games.txt")
            .unwrap();

        assert_eq!(outcome.initial.lookup("alice").unwrap().rating, 1500.0);
        assert_eq!(outcome.games.len(), 2);
        assert_eq!(outcome.final_store.lookup("alice").unwrap().game_count, 2);
        assert_eq!(outcome.ranked[0].player.id, "alice");
        assert_eq!(outcome.ranked.len(), 3);
    }

    #[test]
    fn test_unknown_player_aborts() {
        let service = LadderService::new(AppConfig::default());
        let err = service
            .run_text(ROSTER, "roster.txt", "2024-01-02 alice dave 1-0\n", "games.txt")
            .unwrap_err();

        assert_eq!(
            LadderError::from_anyhow(&err),
            Some(&LadderError::UnknownPlayer {
                player_id: "dave".to_string()
            })
        );
    }

    #[test]
    fn test_render_top_rows() {
        let mut config = AppConfig::default();
        config.output.top = Some(1);
        config.output.format = OutputFormat::Json;
        let service = LadderService::new(config);

        let output = service
            .run_text(ROSTER, "roster.txt", GAMES, "games.txt")
            .unwrap();
        let report: LadderReport = serde_json::from_str(&output).unwrap();

        assert_eq!(report.ladder.len(), 1);
        assert_eq!(report.games.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = LadderService::new(AppConfig::default());

        let err = service
            .run_files(&dir.path().join("roster.txt"), &dir.path().join("games.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("roster.txt"));
    }
}
