//! Verdict rendering - fixed human-readable sentences for the report.
//! Presentation only: pure functions of the grade and spend figures, with
//! no influence on scoring.

use crate::{Grade, SpendEstimate};

/// One-sentence verdict for the overall grade, selected by its letter
pub fn overall_verdict(grade: Grade) -> &'static str {
    match grade.letter() {
        'A' => "Your website is ready to convert - keep your ads running and watch the leads come in.",
        'B' => "Your website converts reasonably well, but a few fixes would stop leads slipping away.",
        'C' => "Your website is losing a meaningful share of the visitors your ads pay for.",
        'D' => "Your website is turning away most of your ad traffic - fix the basics before spending more.",
        _ => "Your website is not ready for paid traffic - pause your ads until the critical issues are fixed.",
    }
}

/// Sentence describing the wasted-spend estimate. Two templates depending
/// on whether the spend figure came from the business or the industry
/// table; a fixed sentence when there is no estimate.
pub fn wasted_spend_verdict(estimate: Option<&SpendEstimate>, business_type: &str) -> String {
    match estimate {
        None => "No ad spend to evaluate - these fixes will still pay off when you start advertising.".to_string(),
        Some(est) if est.is_estimated => format!(
            "Based on typical {} advertising budgets of about ${}/month, an estimated ${}-${} is likely going to waste on visitors who never convert.",
            business_type, est.monthly_spend, est.low, est.high
        ),
        Some(est) => format!(
            "Of the roughly ${} you spend on ads each month, an estimated ${}-${} is wasted on visitors your site fails to convert.",
            est.monthly_spend, est.low, est.high
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_keys_on_grade_letter_only() {
        assert_eq!(overall_verdict(Grade::APlus), overall_verdict(Grade::AMinus));
        assert_eq!(overall_verdict(Grade::BPlus), overall_verdict(Grade::BMinus));
        assert_ne!(overall_verdict(Grade::A), overall_verdict(Grade::B));
        assert!(overall_verdict(Grade::F).contains("pause your ads"));
    }

    #[test]
    fn estimated_spend_names_the_trade() {
        let est = SpendEstimate {
            low: 728,
            high: 1092,
            monthly_spend: 2600,
            is_estimated: true,
        };
        let sentence = wasted_spend_verdict(Some(&est), "HVAC");
        assert!(sentence.contains("typical HVAC advertising budgets"));
        assert!(sentence.contains("$2600/month"));
        assert!(sentence.contains("$728-$1092"));
    }

    #[test]
    fn stated_spend_uses_the_direct_template() {
        let est = SpendEstimate {
            low: 392,
            high: 588,
            monthly_spend: 1750,
            is_estimated: false,
        };
        let sentence = wasted_spend_verdict(Some(&est), "Plumbing");
        assert!(sentence.contains("you spend on ads"));
        assert!(sentence.contains("$1750"));
        assert!(!sentence.contains("typical"));
    }

    #[test]
    fn absent_estimate_has_fixed_sentence() {
        let sentence = wasted_spend_verdict(None, "Plumbing");
        assert!(sentence.contains("No ad spend"));
    }
}
