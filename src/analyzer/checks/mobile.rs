//! Mobile experience checks
//!
//! Metric-derived mobile signals can report false failures on slow-rendering
//! pages, so when metrics are present each signal is cross-checked against a
//! raw page-derived fallback and passes if either source says it passes. A
//! site is never penalized twice for a measurement limitation.

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

pub struct MobileAnalyzer;

impl CategoryAnalyzer for MobileAnalyzer {
    fn name(&self) -> &'static str {
        "Mobile Experience"
    }

    fn analyze(
        &self,
        page: &PageSignals,
        metrics: Option<&PerformanceMetrics>,
        _business: &BusinessContext,
    ) -> CategoryResult {
        let mut findings = Vec::new();

        // Page-derived fallbacks, used alone when metrics are absent and as
        // the "or" branch of each cross-check when they are present
        let viewport_fallback = page.has_viewport_meta;
        let legible_fallback = page.legible_font_size;
        // Responsive layouts size their own tap targets; viewport meta is
        // the best page-only proxy we have
        let tap_fallback = page.has_viewport_meta;

        let viewport_ok = metrics.map_or(viewport_fallback, |m| m.viewport_ok || viewport_fallback);
        findings.push(if viewport_ok {
            Finding::pass(
                "viewport-configured",
                "Viewport is configured for mobile screens".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "viewport-configured",
                "No mobile viewport configuration - the page renders as a shrunken desktop site on phones".to_string(),
                Impact::High,
            )
        });

        let legible = metrics.map_or(legible_fallback, |m| m.text_legible || legible_fallback);
        findings.push(if legible {
            Finding::pass(
                "text-legible",
                "Body text is legible on mobile without zooming".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "text-legible",
                "Body text is too small to read on mobile - visitors have to pinch-zoom".to_string(),
                Impact::Medium,
            )
        });

        let tap_ok = metrics.map_or(tap_fallback, |m| m.tap_targets_ok || tap_fallback);
        findings.push(if tap_ok {
            Finding::pass(
                "tap-targets",
                "Buttons and links are large enough to tap".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "tap-targets",
                "Tap targets are too small or too close together for thumbs".to_string(),
                Impact::Medium,
            )
        });

        let friendly_fallback = viewport_fallback && legible_fallback;
        let friendly = metrics.map_or(friendly_fallback, |m| m.mobile_friendly || friendly_fallback);
        findings.push(if friendly {
            Finding::pass(
                "mobile-friendly",
                "The page passes the overall mobile-friendliness check".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "mobile-friendly",
                "The page fails the overall mobile-friendliness check - most ad clicks come from phones".to_string(),
                Impact::High,
            )
        });

        findings.push(if page.has_intrusive_popup {
            Finding::fail(
                "no-intrusive-popup",
                "An interstitial covers the content on load - mobile visitors bounce before seeing the page".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::pass(
                "no-intrusive-popup",
                "No intrusive popup blocks the content on load".to_string(),
                Impact::Medium,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}
