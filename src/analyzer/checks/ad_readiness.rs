//! Ad landing readiness checks: does the page do what a paid click paid for?
//!
//! The one analyzer that reads the business context - the hero headline is
//! matched against the trade so a plumbing ad doesn't land on a generic
//! "Welcome to our website" page.

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

/// Paid visitors expect the page painted faster than organic ones
const MAX_PERCEIVED_LOAD_MS: u32 = 2500;
/// Page-only proxy when no metrics exist: image-heavy pages render slowly
const MAX_IMAGE_COUNT_FALLBACK: u32 = 30;

pub struct AdReadinessAnalyzer;

impl CategoryAnalyzer for AdReadinessAnalyzer {
    fn name(&self) -> &'static str {
        "Ad Landing Readiness"
    }

    fn analyze(
        &self,
        page: &PageSignals,
        metrics: Option<&PerformanceMetrics>,
        business: &BusinessContext,
    ) -> CategoryResult {
        let mut findings = Vec::new();

        findings.push(if page.has_cta_above_fold {
            Finding::pass(
                "cta-above-fold",
                "A call-to-action greets visitors before they scroll".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "cta-above-fold",
                "No call-to-action above the fold - the click you paid for lands on nothing actionable".to_string(),
                Impact::High,
            )
        });

        findings.push(if page.form_above_fold {
            Finding::pass(
                "conversion-path-above-fold",
                "A form is reachable without scrolling".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "conversion-path-above-fold",
                "No form above the fold - each extra scroll sheds paid visitors".to_string(),
                Impact::High,
            )
        });

        let trade = business.business_type.trim();
        let message_match = !trade.is_empty()
            && page
                .headline
                .as_deref()
                .map(|h| h.to_lowercase().contains(&trade.to_lowercase()))
                .unwrap_or(false);
        findings.push(if message_match {
            Finding::pass(
                "message-match",
                format!("The headline mentions \"{}\" - it matches what the ad promised", trade),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "message-match",
                format!(
                    "The headline never mentions \"{}\" - visitors wonder if they landed in the right place",
                    if trade.is_empty() { "your trade" } else { trade }
                ),
                Impact::Medium,
            )
        });

        findings.push(if page.has_intrusive_popup {
            Finding::fail(
                "no-popup-on-landing",
                "A popup intercepts the paid click before the page is even seen".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::pass(
                "no-popup-on-landing",
                "Nothing intercepts the landing view".to_string(),
                Impact::Medium,
            )
        });

        let perceived_fast = match metrics {
            Some(m) => m.load_time_ms <= MAX_PERCEIVED_LOAD_MS,
            None => page.image_count <= MAX_IMAGE_COUNT_FALLBACK,
        };
        findings.push(if perceived_fast {
            Finding::pass(
                "perceived-speed",
                match metrics {
                    Some(m) => format!("Page paints in {:.1}s", m.load_time_ms as f64 / 1000.0),
                    None => format!("{} images on the page - light enough to paint quickly", page.image_count),
                },
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "perceived-speed",
                match metrics {
                    Some(m) => format!(
                        "Page takes {:.1}s to paint - paid visitors bounce fastest",
                        m.load_time_ms as f64 / 1000.0
                    ),
                    None => format!(
                        "{} images on the page - likely too heavy to paint quickly",
                        page.image_count
                    ),
                },
                Impact::Medium,
            )
        });

        findings.push(if page.phone_in_header {
            Finding::pass(
                "phone-prominent",
                "The phone number sits in the header where callers look".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "phone-prominent",
                "The phone number is not in the header - callers shouldn't have to hunt".to_string(),
                Impact::Low,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}
