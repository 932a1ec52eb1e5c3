//! JSON report

use super::report::LadderReport;
use super::ReportRenderer;
use crate::error::Result;

/// Pretty-printed JSON of the whole report, with unrounded ratings
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &LadderReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}
