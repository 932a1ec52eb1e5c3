//! Markdown report
//!
//! The fixed-width lines go inside fenced `text` blocks so their columns
//! survive Markdown rendering.

use super::lines::{game_line, ladder_line};
use super::report::LadderReport;
use super::ReportRenderer;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    date_format: String,
}

impl MarkdownRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &LadderReport) -> Result<String> {
        let mut out = format!("# {}\n\n## Ladder\n\n```text\n", report.title);
        for row in &report.ladder {
            out.push_str(&ladder_line(row.rank, &row.name, row.rating, row.game_count));
            out.push('\n');
        }
        out.push_str("```\n");

        if !report.games.is_empty() {
            out.push_str("\n## Games\n\n```text\n");
            for row in &report.games {
                let date = super::format_date(row.date, &self.date_format)?;
                out.push_str(&game_line(&date, &row.player1, &row.player2, row.score));
                out.push('\n');
            }
            out.push_str("```\n");
        }

        Ok(out)
    }
}
