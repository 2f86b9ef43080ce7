//! Category analyzers
//!
//! Six independent, deterministic scorers. Each consumes the page signals,
//! the optional performance metrics, and the business context, and emits one
//! named [`CategoryResult`]. Analyzers differ only in which findings they
//! generate; scores always come from the shared formula in
//! [`super::scoring`]. When the metrics bundle is absent an analyzer must
//! substitute page-derived fallback checks, never fail or go empty.

pub mod ad_readiness;
pub mod lead_capture;
pub mod mobile;
pub mod page_speed;
pub mod seo;
pub mod trust;

pub use ad_readiness::AdReadinessAnalyzer;
pub use lead_capture::LeadCaptureAnalyzer;
pub use mobile::MobileAnalyzer;
pub use page_speed::PageSpeedAnalyzer;
pub use seo::SeoAnalyzer;
pub use trust::TrustAnalyzer;

use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::CategoryResult;

/// Trait for category analyzers
pub trait CategoryAnalyzer {
    /// Category name, also the weight-table lookup key
    fn name(&self) -> &'static str;

    /// Produce this category's findings and derived score. Pure: identical
    /// inputs must yield identical findings in identical order.
    fn analyze(
        &self,
        page: &PageSignals,
        metrics: Option<&PerformanceMetrics>,
        business: &BusinessContext,
    ) -> CategoryResult;
}
