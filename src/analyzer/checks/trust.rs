//! Trust and credibility checks

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

pub struct TrustAnalyzer;

impl CategoryAnalyzer for TrustAnalyzer {
    fn name(&self) -> &'static str {
        "Trust & Credibility"
    }

    fn analyze(
        &self,
        page: &PageSignals,
        _metrics: Option<&PerformanceMetrics>,
        _business: &BusinessContext,
    ) -> CategoryResult {
        let mut findings = Vec::new();

        findings.push(if page.has_ssl {
            Finding::pass(
                "https",
                "The site is served over HTTPS".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "https",
                "No HTTPS - browsers flag the site as Not Secure next to your form".to_string(),
                Impact::High,
            )
        });

        findings.push(if page.testimonial_count > 0 {
            Finding::pass(
                "testimonials",
                format!("{} testimonial(s) found on the page", page.testimonial_count),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "testimonials",
                "No testimonials - first-time visitors have no social proof".to_string(),
                Impact::Medium,
            )
        });

        findings.push(if page.has_reviews {
            Finding::pass(
                "reviews",
                "Review or rating content is visible".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "reviews",
                "No reviews or ratings shown - buyers check reviews before calling".to_string(),
                Impact::Medium,
            )
        });

        findings.push(if page.has_address {
            Finding::pass(
                "street-address",
                "A street address is visible".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "street-address",
                "No street address - local customers want to see you're actually local".to_string(),
                Impact::Low,
            )
        });

        findings.push(if page.has_license_info {
            Finding::pass(
                "credentials",
                "License or certification details are mentioned".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "credentials",
                "No license or certification mentioned - credentials separate pros from handymen".to_string(),
                Impact::Low,
            )
        });

        findings.push(if page.has_privacy_policy {
            Finding::pass(
                "privacy-policy",
                "A privacy policy link exists".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "privacy-policy",
                "No privacy policy - some ad platforms require one on landing pages".to_string(),
                Impact::Low,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_trustworthy_page_scores_100() {
        let page = PageSignals {
            has_ssl: true,
            testimonial_count: 4,
            has_reviews: true,
            has_address: true,
            has_license_info: true,
            has_privacy_policy: true,
            ..Default::default()
        };
        let result = TrustAnalyzer.analyze(&page, None, &BusinessContext::default());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn https_alone_earns_its_weight() {
        let page = PageSignals {
            has_ssl: true,
            ..Default::default()
        };
        let result = TrustAnalyzer.analyze(&page, None, &BusinessContext::default());
        // 30 earned of 100 total (30 + 20 + 20 + 10 + 10 + 10)
        assert_eq!(result.score, 30);
    }

    #[test]
    fn testimonial_count_appears_in_detail() {
        let page = PageSignals {
            testimonial_count: 7,
            ..Default::default()
        };
        let result = TrustAnalyzer.analyze(&page, None, &BusinessContext::default());
        let t = result.findings.iter().find(|f| f.label == "testimonials").unwrap();
        assert!(t.passed);
        assert!(t.detail.contains('7'));
    }
}
