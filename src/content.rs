//! Content Quality boundary - the optional AI copy review
//!
//! The AI collaborator returns a category in the standard shape; this
//! module is the trust boundary. The engine only accepts a category that
//! passes [`validate_ai_category`], and the score is recomputed from the
//! findings so an upstream bug can never smuggle in a hand-set score.
//!
//! The HTTP client requires the `ai` feature:
//! ```toml
//! leadscore = { version = "0.3", features = ["ai"] }
//! ```

use crate::CategoryResult;
use thiserror::Error;

/// Name the AI category must carry
pub const CONTENT_QUALITY_CATEGORY: &str = "Content Quality";

/// The contract: the review always has exactly this many findings
pub const REQUIRED_FINDING_COUNT: usize = 5;

/// Contract violations in an AI-supplied category
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiReviewError {
    #[error("expected category name \"{CONTENT_QUALITY_CATEGORY}\", got \"{0}\"")]
    WrongName(String),
    #[error("expected exactly {REQUIRED_FINDING_COUNT} findings, got {0}")]
    WrongFindingCount(usize),
}

/// Validate an AI-supplied category against the Content Quality contract.
/// Returns a fresh category with the score recomputed from the findings.
pub fn validate_ai_category(candidate: &CategoryResult) -> Result<CategoryResult, AiReviewError> {
    if candidate.name != CONTENT_QUALITY_CATEGORY {
        return Err(AiReviewError::WrongName(candidate.name.clone()));
    }
    if candidate.findings.len() != REQUIRED_FINDING_COUNT {
        return Err(AiReviewError::WrongFindingCount(candidate.findings.len()));
    }
    Ok(CategoryResult::new(
        CONTENT_QUALITY_CATEGORY,
        candidate.findings.clone(),
    ))
}

/// Blocking client for the AI copy-review API
#[cfg(feature = "ai")]
pub mod client {
    use super::{validate_ai_category, CONTENT_QUALITY_CATEGORY};
    use crate::signals::ScanInput;
    use crate::{CategoryResult, Finding};
    use serde::Deserialize;
    use std::time::Duration;

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Client for the copy-review endpoint. Every failure mode (missing
    /// key, timeout, bad status, malformed body, contract violation)
    /// degrades to `None` - the engine never sees an error from here.
    pub struct ReviewClient {
        api_key: String,
        base_url: String,
    }

    #[derive(Deserialize)]
    struct ReviewResponse {
        findings: Vec<Finding>,
    }

    impl ReviewClient {
        /// Build from LEADSCORE_AI_KEY; None when unset
        pub fn from_env() -> Option<Self> {
            let api_key = std::env::var("LEADSCORE_AI_KEY").ok()?;
            Some(Self {
                api_key,
                base_url: "https://api.anthropic.com/v1/messages".to_string(),
            })
        }

        pub fn with_base_url(mut self, base_url: &str) -> Self {
            self.base_url = base_url.to_string();
            self
        }

        /// Fetch a copy review for the scanned page. Degrades to None.
        pub fn fetch_review(&self, input: &ScanInput) -> Option<CategoryResult> {
            let client = reqwest::blocking::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .ok()?;

            let body = serde_json::json!({
                "url": input.url,
                "businessType": input.business.business_type,
                "headline": input.page.headline,
                "title": input.page.title,
                "metaDescription": input.page.meta_description,
            });

            let response = client
                .post(&self.base_url)
                .header("x-api-key", &self.api_key)
                .json(&body)
                .send()
                .ok()?;
            if !response.status().is_success() {
                return None;
            }

            let parsed: ReviewResponse = response.json().ok()?;
            let candidate = CategoryResult::new(CONTENT_QUALITY_CATEGORY, parsed.findings);
            validate_ai_category(&candidate).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Finding, Impact};

    fn findings(count: usize) -> Vec<Finding> {
        (0..count)
            .map(|i| {
                Finding::fail(
                    &format!("copy-check-{}", i),
                    "weak copy".to_string(),
                    Impact::Medium,
                )
            })
            .collect()
    }

    #[test]
    fn valid_category_accepted_with_recomputed_score() {
        let mut candidate = CategoryResult::new(CONTENT_QUALITY_CATEGORY, findings(5));
        candidate.score = 99; // tampered upstream
        let valid = validate_ai_category(&candidate).unwrap();
        assert_eq!(valid.score, 0); // all findings fail
        assert_eq!(valid.findings.len(), 5);
    }

    #[test]
    fn wrong_finding_count_rejected() {
        let candidate = CategoryResult::new(CONTENT_QUALITY_CATEGORY, findings(4));
        assert_eq!(
            validate_ai_category(&candidate),
            Err(AiReviewError::WrongFindingCount(4))
        );
    }

    #[test]
    fn wrong_name_rejected() {
        let candidate = CategoryResult::new("Copy Quality", findings(5));
        assert_eq!(
            validate_ai_category(&candidate),
            Err(AiReviewError::WrongName("Copy Quality".to_string()))
        );
    }
}
