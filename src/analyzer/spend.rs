//! Wasted-ad-spend estimation
//!
//! Turns the overall score plus the business's stated ad-spend bracket (or
//! a per-trade industry average when no bracket was given) into a monthly
//! waste range. An unrecognized bracket yields no estimate - the engine
//! never guesses at spend it was not told about.

use crate::SpendEstimate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Sentinel bracket meaning "we run no ads"
const NO_ADS_SENTINEL: &str = "none";

/// Fraction of ad traffic a completely broken site (score 0) wastes
const MAX_WASTE_FACTOR: f64 = 0.7;

/// Midpoint dollar values for the fixed bracket set shown in the scan form
const BRACKET_MIDPOINTS: [(&str, u32); 5] = [
    ("Under $1,000", 500),
    ("$1,000-$2,500", 1750),
    ("$2,500-$5,000", 3750),
    ("$5,000-$10,000", 7500),
    ("Over $10,000", 15000),
];

/// Trade used when the business type has no table entry
const FALLBACK_TRADE: &str = "Other";

/// Per-trade average monthly ad spend, overridable from config
#[derive(Debug, Clone)]
pub struct IndustrySpendTable {
    averages: HashMap<String, u32>,
}

impl Default for IndustrySpendTable {
    fn default() -> Self {
        let averages = HashMap::from([
            ("Plumbing".to_string(), 2200),
            ("HVAC".to_string(), 2600),
            ("Roofing".to_string(), 2900),
            ("Electrical".to_string(), 1900),
            ("Landscaping".to_string(), 1400),
            ("Pest Control".to_string(), 1600),
            ("Auto Repair".to_string(), 1800),
            ("Dental".to_string(), 3200),
            ("Legal".to_string(), 3500),
            (FALLBACK_TRADE.to_string(), 1500),
        ]);
        Self { averages }
    }
}

impl IndustrySpendTable {
    /// Build a table with config-supplied overrides merged over the defaults
    pub fn with_overrides(overrides: &HashMap<String, u32>) -> Self {
        let mut table = Self::default();
        for (trade, spend) in overrides {
            table.averages.insert(trade.clone(), *spend);
        }
        table
    }

    /// Average monthly spend for a trade, falling back to "Other"
    pub fn average_for(&self, business_type: &str) -> u32 {
        self.averages
            .get(business_type)
            .or_else(|| self.averages.get(FALLBACK_TRADE))
            .copied()
            .unwrap_or(1500)
    }
}

/// Collapse runs of whitespace so form-submitted brackets like
/// `"$1,000 - $2,500"` match the fixed table
fn normalize_bracket(raw: &str) -> String {
    static SPACED_HYPHEN: OnceLock<Regex> = OnceLock::new();
    let re = SPACED_HYPHEN.get_or_init(|| Regex::new(r"\s*-\s*").unwrap());
    re.replace_all(raw.trim(), "-").to_string()
}

/// Midpoint for a recognized bracket string, None otherwise
fn bracket_midpoint(bracket: &str) -> Option<u32> {
    let normalized = normalize_bracket(bracket);
    BRACKET_MIDPOINTS
        .iter()
        .find(|(name, _)| normalize_bracket(name) == normalized)
        .map(|(_, midpoint)| *midpoint)
}

/// Estimate monthly wasted ad spend from the overall score.
///
/// * bracket "none" (the business runs no ads) - no estimate
/// * recognized bracket - its fixed midpoint, `is_estimated = false`
/// * no bracket given - industry average for the trade, `is_estimated = true`
/// * unrecognized bracket - no estimate
pub fn estimate_wasted_spend(
    overall_score: u8,
    ad_spend_bracket: Option<&str>,
    business_type: &str,
    industry: &IndustrySpendTable,
) -> Option<SpendEstimate> {
    let (monthly_spend, is_estimated) = match ad_spend_bracket {
        Some(bracket) if bracket.trim().eq_ignore_ascii_case(NO_ADS_SENTINEL) => return None,
        Some(bracket) => (bracket_midpoint(bracket)?, false),
        None => (industry.average_for(business_type), true),
    };

    let waste_factor = (100 - overall_score as i32).max(0) as f64 / 100.0 * MAX_WASTE_FACTOR;
    let mid_waste = monthly_spend as f64 * waste_factor;

    Some(SpendEstimate {
        low: (mid_waste * 0.8).round() as u32,
        high: (mid_waste * 1.2).round() as u32,
        monthly_spend,
        is_estimated,
    })
}
