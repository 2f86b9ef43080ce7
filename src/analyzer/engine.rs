//! Scan engine - runs the analyzers and feeds the grader
//!
//! The engine itself is pure and synchronous: all I/O (page scraping,
//! metrics fetch, AI review) happened upstream and arrives as a typed
//! [`ScanInput`]. An invalid or absent AI category degrades to "not
//! present"; the grader's renormalization absorbs the missing weight.

use crate::analyzer::checks::{
    AdReadinessAnalyzer, CategoryAnalyzer, LeadCaptureAnalyzer, MobileAnalyzer, PageSpeedAnalyzer,
    SeoAnalyzer, TrustAnalyzer,
};
use crate::analyzer::Grader;
use crate::content;
use crate::signals::ScanInput;
use crate::{Grade, GradedReport};
use serde::{Deserialize, Serialize};

/// One graded scan, ready for reporting and storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// The scanned URL
    pub url: String,
    /// Trade category from the scan request
    pub business_type: String,
    pub report: GradedReport,
}

/// Engine holding the configured grader
pub struct ScanEngine {
    grader: Grader,
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new(Grader::default())
    }
}

impl ScanEngine {
    pub fn new(grader: Grader) -> Self {
        Self { grader }
    }

    /// Run every analyzer in fixed order, merge a valid AI review, and
    /// grade. Deterministic for identical inputs.
    pub fn run(&self, input: &ScanInput) -> ScanResult {
        let analyzers: [&dyn CategoryAnalyzer; 6] = [
            &MobileAnalyzer,
            &LeadCaptureAnalyzer,
            &TrustAnalyzer,
            &PageSpeedAnalyzer,
            &SeoAnalyzer,
            &AdReadinessAnalyzer,
        ];

        let mut categories: Vec<_> = analyzers
            .iter()
            .map(|analyzer| analyzer.analyze(&input.page, input.metrics.as_ref(), &input.business))
            .collect();

        // The AI category is never trusted blindly: it joins the list only
        // after revalidation, and a contract violation means absence
        if let Some(candidate) = &input.ai_review {
            if let Ok(valid) = content::validate_ai_category(candidate) {
                categories.push(valid);
            }
        }

        let report = self.grader.grade(
            categories,
            input.business.ad_spend_bracket.as_deref(),
            &input.business.business_type,
        );

        ScanResult {
            url: input.url.clone(),
            business_type: input.business.business_type.clone(),
            report,
        }
    }
}

/// Summary across a batch of scans, for the console footer and stats view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub scans: usize,
    pub average_score: u8,
    pub average_grade: Grade,
    pub total_fixes: usize,
}

impl AggregateStats {
    pub fn from_results(results: &[ScanResult]) -> Self {
        let scans = results.len();
        let average_score = if scans == 0 {
            0
        } else {
            let sum: u32 = results.iter().map(|r| r.report.overall_score as u32).sum();
            (sum as f64 / scans as f64).round() as u8
        };
        Self {
            scans,
            average_score,
            average_grade: Grade::from_score(average_score as i32),
            total_fixes: results.iter().map(|r| r.report.priority_fixes.len()).sum(),
        }
    }
}
