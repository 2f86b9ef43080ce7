//! Lead capture checks: can a ready-to-buy visitor actually contact the
//! business without hunting for it?

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

/// Forms longer than this lose leads before the submit button
const MAX_QUICK_FORM_FIELDS: u32 = 5;

pub struct LeadCaptureAnalyzer;

impl CategoryAnalyzer for LeadCaptureAnalyzer {
    fn name(&self) -> &'static str {
        "Lead Capture"
    }

    fn analyze(
        &self,
        page: &PageSignals,
        _metrics: Option<&PerformanceMetrics>,
        _business: &BusinessContext,
    ) -> CategoryResult {
        let mut findings = Vec::new();

        findings.push(if page.has_phone_number {
            Finding::pass(
                "phone-visible",
                "A phone number is visible on the page".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "phone-visible",
                "No phone number found - callers are the highest-intent leads and they have nothing to dial".to_string(),
                Impact::High,
            )
        });

        findings.push(if page.has_click_to_call {
            Finding::pass(
                "click-to-call",
                "The phone number is a tap-to-call link on mobile".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "click-to-call",
                "The phone number is not tappable - mobile visitors must retype it".to_string(),
                Impact::Medium,
            )
        });

        findings.push(if page.form_count > 0 {
            Finding::pass(
                "contact-form",
                format!("Found {} contact form(s)", page.form_count),
                Impact::High,
            )
        } else {
            Finding::fail(
                "contact-form",
                "No contact form - visitors who won't call have no way to leave their details".to_string(),
                Impact::High,
            )
        });

        let short_form = page
            .min_form_fields
            .map(|fields| fields <= MAX_QUICK_FORM_FIELDS);
        findings.push(match short_form {
            Some(true) => Finding::pass(
                "short-form",
                format!(
                    "The shortest form asks only {} field(s)",
                    page.min_form_fields.unwrap_or(0)
                ),
                Impact::Medium,
            ),
            Some(false) => Finding::fail(
                "short-form",
                format!(
                    "The shortest form asks {} fields - every field past {} costs conversions",
                    page.min_form_fields.unwrap_or(0),
                    MAX_QUICK_FORM_FIELDS
                ),
                Impact::Medium,
            ),
            None => Finding::fail(
                "short-form",
                "No form to measure - add a short quote-request form".to_string(),
                Impact::Medium,
            ),
        });

        findings.push(if page.has_cta_above_fold {
            Finding::pass(
                "cta-above-fold",
                "A call-to-action is visible without scrolling".to_string(),
                Impact::High,
            )
        } else {
            Finding::fail(
                "cta-above-fold",
                "No call-to-action above the fold - paid visitors decide in seconds".to_string(),
                Impact::High,
            )
        });

        let contact_paths = [
            page.has_phone_number,
            page.form_count > 0,
            page.has_email_link,
            page.has_click_to_call,
        ]
        .iter()
        .filter(|&&present| present)
        .count();
        findings.push(if contact_paths >= 2 {
            Finding::pass(
                "multiple-contact-paths",
                format!("{} distinct ways to get in touch", contact_paths),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "multiple-contact-paths",
                "Only one way to get in touch - visitors who dislike it are lost".to_string(),
                Impact::Low,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}
