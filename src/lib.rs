//! Leadscore: lead-conversion grader for business websites
//!
//! This library turns typed signals about a business website (page content
//! analysis, optional performance metrics, business context) into a weighted
//! 0-100 score, a letter grade, a ranked list of fixes, and an estimated
//! wasted-ad-spend range.

pub mod analyzer;
pub mod config;
pub mod content;
pub mod reporter;
pub mod signals;
pub mod store;
pub mod verdict;

use serde::{Deserialize, Serialize};

/// Severity of a single check, driving both its scoring weight and its
/// fix-priority rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Weight of this check in the category score formula
    pub fn scoring_weight(self) -> u32 {
        match self {
            Impact::High => 30,
            Impact::Medium => 20,
            Impact::Low => 10,
        }
    }

    /// Sort rank for priority-fix ordering (high first)
    pub fn rank(self) -> u8 {
        match self {
            Impact::High => 0,
            Impact::Medium => 1,
            Impact::Low => 2,
        }
    }

    /// Effort label shown next to a fix. Always a direct function of impact:
    /// high-impact problems tend to be quick wins (a missing phone number),
    /// low-impact ones tend to be involved (content rewrites).
    pub fn effort(self) -> Effort {
        match self {
            Impact::High => Effort::Quick,
            Impact::Medium => Effort::Medium,
            Impact::Low => Effort::Involved,
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::High => write!(f, "high"),
            Impact::Medium => write!(f, "medium"),
            Impact::Low => write!(f, "low"),
        }
    }
}

/// Estimated effort to apply a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Quick,
    Medium,
    Involved,
}

impl Effort {
    /// Secondary sort rank for priority-fix ordering
    pub fn rank(self) -> u8 {
        match self {
            Effort::Quick => 0,
            Effort::Medium => 1,
            Effort::Involved => 2,
        }
    }
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effort::Quick => write!(f, "quick"),
            Effort::Medium => write!(f, "medium"),
            Effort::Involved => write!(f, "involved"),
        }
    }
}

/// One evaluated check. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Short identifier (e.g. "phone-visible")
    pub label: String,
    /// Whether the check passed
    pub passed: bool,
    /// Human-readable explanation, composed from the measured values
    pub detail: String,
    /// Fixed severity of this check
    pub impact: Impact,
}

impl Finding {
    pub fn pass(label: &str, detail: String, impact: Impact) -> Self {
        Self {
            label: label.to_string(),
            passed: true,
            detail,
            impact,
        }
    }

    pub fn fail(label: &str, detail: String, impact: Impact) -> Self {
        Self {
            label: label.to_string(),
            passed: false,
            detail,
            impact,
        }
    }
}

/// One analyzer's output: a named, scored group of findings.
///
/// The score is always derived from the findings via
/// [`analyzer::scoring::calculate_category_score`] - construct through
/// [`CategoryResult::new`], never set it by hand. Finding order is
/// evaluation order and is significant: it is the final tie-break when
/// ranking priority fixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Category identity, used as the weight-table lookup key
    pub name: String,
    /// Derived score (0-100)
    pub score: u8,
    /// Findings in evaluation order
    pub findings: Vec<Finding>,
}

impl CategoryResult {
    pub fn new(name: &str, findings: Vec<Finding>) -> Self {
        let score = analyzer::scoring::calculate_category_score(&findings);
        Self {
            name: name.to_string(),
            score,
            findings,
        }
    }
}

/// Letter grade on the standard plus/minus scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    D,
    #[serde(rename = "D-")]
    DMinus,
    F,
}

/// Descending threshold table: first entry the score meets or exceeds wins
const GRADE_THRESHOLDS: [(i32, Grade); 12] = [
    (97, Grade::APlus),
    (93, Grade::A),
    (90, Grade::AMinus),
    (87, Grade::BPlus),
    (83, Grade::B),
    (80, Grade::BMinus),
    (77, Grade::CPlus),
    (73, Grade::C),
    (70, Grade::CMinus),
    (67, Grade::DPlus),
    (63, Grade::D),
    (60, Grade::DMinus),
];

impl Grade {
    /// Map a score to a letter grade. Total over all integers: anything
    /// below 60 (including out-of-range negatives) falls through to F.
    pub fn from_score(score: i32) -> Self {
        for (threshold, grade) in GRADE_THRESHOLDS {
            if score >= threshold {
                return grade;
            }
        }
        Grade::F
    }

    /// The grade letter without the plus/minus qualifier
    pub fn letter(self) -> char {
        match self {
            Grade::APlus | Grade::A | Grade::AMinus => 'A',
            Grade::BPlus | Grade::B | Grade::BMinus => 'B',
            Grade::CPlus | Grade::C | Grade::CMinus => 'C',
            Grade::DPlus | Grade::D | Grade::DMinus => 'D',
            Grade::F => 'F',
        }
    }

    /// Presentational color token, a function of the letter only
    pub fn color(self) -> &'static str {
        match self.letter() {
            'A' => "green",
            'B' => "lime",
            'C' => "amber",
            'D' => "orange",
            _ => "red",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// One failing finding, ranked for remediation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFix {
    /// Category the finding came from
    pub category: String,
    /// Finding label
    pub label: String,
    /// Explanation of what failed
    pub detail: String,
    pub impact: Impact,
    pub effort: Effort,
}

/// Estimated monthly ad dollars lost to poor conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendEstimate {
    /// Low end of the monthly waste range (dollars)
    pub low: u32,
    /// High end of the monthly waste range (dollars)
    pub high: u32,
    /// Monthly spend the range was derived from
    pub monthly_spend: u32,
    /// True when the spend came from the industry-average table rather than
    /// the business's own bracket
    pub is_estimated: bool,
}

/// The aggregate grading output. Constructed once per scan, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedReport {
    /// Weighted overall score (0-100)
    pub overall_score: u8,
    /// Letter grade for the overall score
    pub overall_grade: Grade,
    /// Graded categories, input order preserved
    pub categories: Vec<CategoryResult>,
    /// Every failing finding, ranked by impact then input order.
    /// Untruncated - the top-N cut happens at the reporting boundary.
    pub priority_fixes: Vec<PriorityFix>,
    /// Wasted-ad-spend estimate, absent when the business runs no ads or
    /// gave an unrecognized bracket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasted_spend: Option<SpendEstimate>,
}

/// Public API: grade a fixed list of category results with default weights.
///
/// * `categories` - analyzer outputs in presentation order
/// * `ad_spend_bracket` - the business's stated monthly ad-spend bracket,
///   `Some("none")` when they run no ads, `None` when unknown
/// * `business_type` - trade category (e.g. "Plumbing")
pub fn grade_report(
    categories: Vec<CategoryResult>,
    ad_spend_bracket: Option<&str>,
    business_type: &str,
) -> GradedReport {
    analyzer::scoring::Grader::default().grade(categories, ad_spend_bracket, business_type)
}
