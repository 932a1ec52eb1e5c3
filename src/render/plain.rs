//! Plain text report

use super::lines::{game_line, ladder_line};
use super::report::LadderReport;
use super::ReportRenderer;
use crate::error::Result;

/// Title, underline, then the ladder and the game log
#[derive(Debug, Clone)]
pub struct PlainRenderer {
    date_format: String,
}

impl PlainRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl ReportRenderer for PlainRenderer {
    fn render(&self, report: &LadderReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&report.title);
        out.push('\n');
        out.push_str(&"=".repeat(report.title.chars().count()));
        out.push_str("\n\n");

        for row in &report.ladder {
            out.push_str(&ladder_line(row.rank, &row.name, row.rating, row.game_count));
            out.push('\n');
        }

        if !report.games.is_empty() {
            out.push_str("\nGames\n-----\n\n");
            for row in &report.games {
                let date = super::format_date(row.date, &self.date_format)?;
                out.push_str(&game_line(&date, &row.player1, &row.player2, row.score));
                out.push('\n');
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::report::{GameRow, LadderRow};
    use chrono::NaiveDate;

    fn sample_report() -> LadderReport {
        LadderReport {
            title: "Club".to_string(),
            ladder: vec![
                LadderRow {
                    rank: 1,
                    id: "alice".to_string(),
                    name: "alice".to_string(),
                    rating: 1516.0,
                    game_count: 1,
                },
                LadderRow {
                    rank: 2,
                    id: "bob".to_string(),
                    name: "bob".to_string(),
                    rating: 1484.0,
                    game_count: 1,
                },
            ],
            games: vec![GameRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                player1: "alice".to_string(),
                player2: "bob".to_string(),
                score: 1.0,
            }],
        }
    }

    #[test]
    fn test_render_plain() {
        let output = PlainRenderer::new("%Y-%m-%d")
            .render(&sample_report())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Club");
        assert_eq!(lines[1], "====");
        assert_eq!(lines[3], ladder_line(1, "alice", 1516.0, 1));
        assert_eq!(lines[4], ladder_line(2, "bob", 1484.0, 1));
        assert_eq!(lines[6], "Games");
        assert_eq!(lines[9], game_line("2024-01-05", "alice", "bob", 1.0));
    }

    #[test]
    fn test_custom_date_format() {
        let output = PlainRenderer::new("%d/%m/%Y")
            .render(&sample_report())
            .unwrap();
        assert!(output.contains("05/01/2024"));
    }

    #[test]
    fn test_no_games_section_without_games() {
        let mut report = sample_report();
        report.games.clear();

        let output = PlainRenderer::new("%Y-%m-%d").render(&report).unwrap();
        assert!(!output.contains("Games"));
    }
}
