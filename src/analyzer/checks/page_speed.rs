//! Page speed checks
//!
//! The only analyzer that cannot fall back to page signals: speed is a
//! measurement, not a markup property. With no metric source at all it
//! emits a single synthetic failing finding so the category stays
//! non-empty and scoreable (the formula then yields 0).

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

/// Ad visitors tolerate about this much before bouncing
const MAX_LOAD_TIME_MS: u32 = 3000;
const MAX_PAGE_WEIGHT_KB: u32 = 2048;
const MAX_LAYOUT_SHIFT: f64 = 0.1;
const MAX_INTERACTIVE_DELAY_MS: u32 = 200;

pub struct PageSpeedAnalyzer;

impl CategoryAnalyzer for PageSpeedAnalyzer {
    fn name(&self) -> &'static str {
        "Page Speed"
    }

    fn analyze(
        &self,
        _page: &PageSignals,
        metrics: Option<&PerformanceMetrics>,
        _business: &BusinessContext,
    ) -> CategoryResult {
        let Some(metrics) = metrics else {
            return CategoryResult::new(
                self.name(),
                vec![Finding::fail(
                    "speed-data-unavailable",
                    "Performance data unavailable - the metrics source did not respond".to_string(),
                    Impact::High,
                )],
            );
        };

        let mut findings = Vec::new();

        let load_s = metrics.load_time_ms as f64 / 1000.0;
        findings.push(if metrics.load_time_ms <= MAX_LOAD_TIME_MS {
            Finding::pass(
                "load-time",
                format!("Main content loads in {:.1}s", load_s),
                Impact::High,
            )
        } else {
            Finding::fail(
                "load-time",
                format!(
                    "Main content takes {:.1}s to load - over the {}s mark paid visitors abandon",
                    load_s,
                    MAX_LOAD_TIME_MS / 1000
                ),
                Impact::High,
            )
        });

        findings.push(if metrics.page_weight_kb <= MAX_PAGE_WEIGHT_KB {
            Finding::pass(
                "page-weight",
                format!("Page weighs {} KB", metrics.page_weight_kb),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "page-weight",
                format!(
                    "Page weighs {} KB - heavy pages crawl on cell connections",
                    metrics.page_weight_kb
                ),
                Impact::Medium,
            )
        });

        findings.push(if metrics.layout_shift <= MAX_LAYOUT_SHIFT {
            Finding::pass(
                "layout-stability",
                format!("Layout shift score is {:.2}", metrics.layout_shift),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "layout-stability",
                format!(
                    "Layout shift score is {:.2} - content jumps around as it loads",
                    metrics.layout_shift
                ),
                Impact::Medium,
            )
        });

        findings.push(if metrics.interactive_delay_ms <= MAX_INTERACTIVE_DELAY_MS {
            Finding::pass(
                "interactivity",
                format!("Page responds to input in {}ms", metrics.interactive_delay_ms),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "interactivity",
                format!(
                    "Page takes {}ms to respond to input - taps feel ignored",
                    metrics.interactive_delay_ms
                ),
                Impact::Medium,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}
