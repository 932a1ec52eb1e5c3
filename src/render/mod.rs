//! Report rendering
//!
//! This module turns a [`LadderReport`] into text. Plain and Markdown output
//! share the fixed-width line layout from [`lines`]; JSON output carries the
//! same data unformatted.

pub mod json;
pub mod lines;
pub mod markdown;
pub mod plain;
pub mod report;

// Re-export commonly used types
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;
pub use report::{GameRow, LadderReport, LadderRow};

use crate::config::OutputFormat;
use crate::error::{LadderError, Result};
use chrono::NaiveDate;
use std::fmt::Write;

/// Trait for turning a report into output text
pub trait ReportRenderer {
    fn render(&self, report: &LadderReport) -> Result<String>;
}

/// The renderer for an output format
pub fn renderer_for(format: OutputFormat, date_format: &str) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Plain => Box::new(PlainRenderer::new(date_format)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(date_format)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Format a date, failing instead of panicking on a bad format string
pub(crate) fn format_date(date: NaiveDate, date_format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(date_format)).map_err(|_| LadderError::ConfigurationError {
        message: format!("Invalid date format: {}", date_format),
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> LadderReport {
        LadderReport {
            title: "T".to_string(),
            ladder: vec![],
            games: vec![],
        }
    }

    #[test]
    fn test_renderer_for_each_format() {
        let report = empty_report();

        let plain = renderer_for(OutputFormat::Plain, "%Y-%m-%d").render(&report).unwrap();
        assert!(plain.starts_with("T\n=\n"));

        let markdown = renderer_for(OutputFormat::Markdown, "%Y-%m-%d")
            .render(&report)
            .unwrap();
        assert!(markdown.starts_with("# T"));

        let json = renderer_for(OutputFormat::Json, "%Y-%m-%d").render(&report).unwrap();
        assert!(json.contains("\"title\": \"T\""));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d").unwrap(), "2024-07-09");
        assert_eq!(format_date(date, "%e %b %Y").unwrap(), " 9 Jul 2024");
        assert!(format_date(date, "%Y-%").is_err());
    }
}
