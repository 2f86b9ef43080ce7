//! Score computation and the grading engine

use crate::{CategoryResult, Finding, Grade, GradedReport, PriorityFix};
use std::collections::HashMap;

use super::spend::{self, IndustrySpendTable};

/// The single unit of truth for category scores: weighted pass ratio over
/// the findings (high=30, medium=20, low=10), rounded to 0-100. Returns 0
/// for an empty findings list rather than dividing by zero.
pub fn calculate_category_score(findings: &[Finding]) -> u8 {
    let total: u32 = findings.iter().map(|f| f.impact.scoring_weight()).sum();
    if total == 0 {
        return 0;
    }
    let earned: u32 = findings
        .iter()
        .filter(|f| f.passed)
        .map(|f| f.impact.scoring_weight())
        .sum();
    ((earned as f64 / total as f64) * 100.0).round() as u8
}

/// Default report-level category weights. They need not sum to 1 - the
/// grader renormalizes by the weights actually present, so a skipped
/// category (Content Quality when the AI review is unavailable) scales the
/// rest up instead of deflating the score.
pub fn default_weights() -> HashMap<String, f64> {
    HashMap::from([
        ("Mobile Experience".to_string(), 0.25),
        ("Lead Capture".to_string(), 0.25),
        ("Trust & Credibility".to_string(), 0.15),
        ("Page Speed".to_string(), 0.15),
        ("SEO Basics".to_string(), 0.10),
        ("Ad Landing Readiness".to_string(), 0.10),
        ("Content Quality".to_string(), 0.10),
    ])
}

/// Grading engine: combines category results into an overall score, grade,
/// ranked fix list, and wasted-spend estimate.
pub struct Grader {
    /// Immutable category-name-to-weight mapping. Unknown names contribute
    /// zero weight.
    weights: HashMap<String, f64>,
    /// Per-trade monthly spend figures used when no bracket was given
    industry_spend: IndustrySpendTable,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new(default_weights())
    }
}

impl Grader {
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self {
            weights,
            industry_spend: IndustrySpendTable::default(),
        }
    }

    /// Override industry-average spend figures (from config)
    pub fn with_industry_spend(mut self, table: IndustrySpendTable) -> Self {
        self.industry_spend = table;
        self
    }

    /// Grade a fixed list of category results. Input order is preserved in
    /// the output and is the final tie-break for priority fixes.
    pub fn grade(
        &self,
        categories: Vec<CategoryResult>,
        ad_spend_bracket: Option<&str>,
        business_type: &str,
    ) -> GradedReport {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for category in &categories {
            let weight = self.weights.get(&category.name).copied().unwrap_or(0.0);
            weighted_sum += category.score as f64 * weight;
            weight_total += weight;
        }

        // Renormalize by the weights actually present; all-unweighted input
        // degrades to a 0/F report instead of dividing by zero.
        let overall_score = if weight_total > 0.0 {
            (weighted_sum / weight_total).round() as u8
        } else {
            0
        };
        let overall_grade = Grade::from_score(overall_score as i32);

        let priority_fixes = collect_priority_fixes(&categories);
        let wasted_spend = spend::estimate_wasted_spend(
            overall_score,
            ad_spend_bracket,
            business_type,
            &self.industry_spend,
        );

        GradedReport {
            overall_score,
            overall_grade,
            categories,
            priority_fixes,
            wasted_spend,
        }
    }
}

/// Collect every failing finding across all categories (category order,
/// then finding order) and rank by (impact, effort). Effort is a pure
/// function of impact, so the second key never actually breaks a tie; the
/// stable sort makes input order the true tie-break. No truncation here -
/// the top-N cut belongs to the reporting boundary.
fn collect_priority_fixes(categories: &[CategoryResult]) -> Vec<PriorityFix> {
    let mut fixes: Vec<PriorityFix> = categories
        .iter()
        .flat_map(|category| {
            category
                .findings
                .iter()
                .filter(|f| !f.passed)
                .map(|finding| PriorityFix {
                    category: category.name.clone(),
                    label: finding.label.clone(),
                    detail: finding.detail.clone(),
                    impact: finding.impact,
                    effort: finding.impact.effort(),
                })
        })
        .collect();

    fixes.sort_by_key(|fix| (fix.impact.rank(), fix.effort.rank()));
    fixes
}
