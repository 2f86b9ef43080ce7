//! Typed input bundles consumed by the analyzers.
//!
//! The core never parses HTML or calls the metrics API itself; it receives
//! these already-extracted signals from the scraping and fetching
//! collaborators. Every field defaults so a partial upstream payload still
//! deserializes.

use crate::CategoryResult;
use serde::{Deserialize, Serialize};

/// Structured signals extracted from the landing page content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSignals {
    /// A phone number appears somewhere on the page
    pub has_phone_number: bool,
    /// The phone number is visible in the header region
    pub phone_in_header: bool,
    /// A tel: link is present (click-to-call on mobile)
    pub has_click_to_call: bool,
    /// Number of forms on the page
    pub form_count: u32,
    /// Field count of the shortest form, when any form exists
    pub min_form_fields: Option<u32>,
    /// A form appears in the above-the-fold region
    pub form_above_fold: bool,
    /// A call-to-action element appears above the fold
    pub has_cta_above_fold: bool,
    /// Total call-to-action elements found
    pub cta_count: u32,
    /// A mailto: link is present
    pub has_email_link: bool,
    /// Page served over HTTPS
    pub has_ssl: bool,
    /// Number of testimonial blocks detected
    pub testimonial_count: u32,
    /// Review or rating markup detected
    pub has_reviews: bool,
    /// A street address is visible
    pub has_address: bool,
    /// License numbers, certifications, or trade credentials mentioned
    pub has_license_info: bool,
    /// A privacy policy link exists
    pub has_privacy_policy: bool,
    /// Document title, when present
    pub title: Option<String>,
    /// Meta description, when present
    pub meta_description: Option<String>,
    /// Hero headline text, when detected
    pub headline: Option<String>,
    /// Number of h1 elements
    pub h1_count: u32,
    /// Total images
    pub image_count: u32,
    /// Images with no alt text
    pub images_missing_alt: u32,
    /// JSON-LD or microdata schema markup detected
    pub has_schema_markup: bool,
    /// Visible word count
    pub word_count: u32,
    /// A viewport meta tag is present
    pub has_viewport_meta: bool,
    /// Body text uses legible font sizes (>= 16px base)
    pub legible_font_size: bool,
    /// An interstitial or popup covers content on load
    pub has_intrusive_popup: bool,
}

/// Web-vitals-style measurements from the performance-metrics collaborator.
/// The whole bundle may be absent; analyzers must degrade to page-derived
/// fallbacks when it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Time to largest contentful paint, milliseconds
    pub load_time_ms: u32,
    /// Total transferred page weight, kilobytes
    pub page_weight_kb: u32,
    /// Cumulative layout shift score
    pub layout_shift: f64,
    /// Input-to-paint interactivity delay, milliseconds
    pub interactive_delay_ms: u32,
    /// Overall mobile-friendliness verdict from the metrics source
    #[serde(default)]
    pub mobile_friendly: bool,
    /// Viewport configured correctly per the metrics source
    #[serde(default)]
    pub viewport_ok: bool,
    /// Tap targets adequately sized per the metrics source
    #[serde(default)]
    pub tap_targets_ok: bool,
    /// Text legible at mobile sizes per the metrics source
    #[serde(default)]
    pub text_legible: bool,
}

/// Who the site belongs to, as stated in the scan request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessContext {
    /// Trade category, e.g. "Plumbing" or "HVAC"
    pub business_type: String,
    /// Stated monthly ad-spend bracket, or the sentinel "none".
    /// Absent when the business did not answer.
    pub ad_spend_bracket: Option<String>,
}

/// Everything one scan request carries into the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanInput {
    /// The scanned URL (identification only, never re-fetched here)
    pub url: String,
    #[serde(default)]
    pub business: BusinessContext,
    #[serde(default)]
    pub page: PageSignals,
    /// Absent on metrics-API timeout or failure
    #[serde(default)]
    pub metrics: Option<PerformanceMetrics>,
    /// Pre-fetched AI content review, validated at the boundary before the
    /// engine merges it
    #[serde(default)]
    pub ai_review: Option<CategoryResult>,
}
