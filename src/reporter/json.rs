//! JSON reporter for machine-readable output

use super::TOP_FIXES;
use crate::analyzer::{AggregateStats, ScanResult};
use crate::verdict::{overall_verdict, wasted_spend_verdict};
use crate::PriorityFix;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonScan<'a> {
    #[serde(flatten)]
    result: &'a ScanResult,
    /// Top fixes after the reporting-boundary truncation
    top_fixes: Vec<&'a PriorityFix>,
    verdict: &'static str,
    spend_verdict: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBatch<'a> {
    results: Vec<JsonScan<'a>>,
    summary: &'a AggregateStats,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn wrap<'a>(result: &'a ScanResult, report_id: Option<&'a str>) -> JsonScan<'a> {
        JsonScan {
            result,
            top_fixes: result.report.priority_fixes.iter().take(TOP_FIXES).collect(),
            verdict: overall_verdict(result.report.overall_grade),
            spend_verdict: wasted_spend_verdict(
                result.report.wasted_spend.as_ref(),
                &result.business_type,
            ),
            report_id,
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> String {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.unwrap_or_else(|_| "{}".to_string())
    }

    /// Report a single graded scan as JSON
    pub fn report(&self, result: &ScanResult, report_id: Option<&str>) -> String {
        self.render(&Self::wrap(result, report_id))
    }

    /// Report a batch with summary
    pub fn report_many(&self, results: &[ScanResult], stats: &AggregateStats) -> String {
        let batch = JsonBatch {
            results: results.iter().map(|r| Self::wrap(r, None)).collect(),
            summary: stats,
        };
        self.render(&batch)
    }
}
