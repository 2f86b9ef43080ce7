//! Basic on-page SEO checks

use super::CategoryAnalyzer;
use crate::signals::{BusinessContext, PageSignals, PerformanceMetrics};
use crate::{CategoryResult, Finding, Impact};

const MIN_TITLE_CHARS: usize = 10;
const MAX_TITLE_CHARS: usize = 70;
const MIN_DESCRIPTION_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 160;
const MIN_WORD_COUNT: u32 = 300;
/// At least this share of images must carry alt text
const MIN_ALT_COVERAGE: f64 = 0.8;

pub struct SeoAnalyzer;

impl CategoryAnalyzer for SeoAnalyzer {
    fn name(&self) -> &'static str {
        "SEO Basics"
    }

    fn analyze(
        &self,
        page: &PageSignals,
        _metrics: Option<&PerformanceMetrics>,
        _business: &BusinessContext,
    ) -> CategoryResult {
        let mut findings = Vec::new();

        findings.push(match page.title.as_deref().map(str::trim) {
            Some(title) if (MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&title.len()) => {
                Finding::pass(
                    "title-tag",
                    format!("Title tag present ({} characters)", title.len()),
                    Impact::Medium,
                )
            }
            Some(title) if !title.is_empty() => Finding::fail(
                "title-tag",
                format!(
                    "Title tag is {} characters - aim for {} to {}",
                    title.len(),
                    MIN_TITLE_CHARS,
                    MAX_TITLE_CHARS
                ),
                Impact::Medium,
            ),
            _ => Finding::fail(
                "title-tag",
                "No title tag - search results show the bare URL instead".to_string(),
                Impact::Medium,
            ),
        });

        findings.push(match page.meta_description.as_deref().map(str::trim) {
            Some(desc) if (MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS).contains(&desc.len()) => {
                Finding::pass(
                    "meta-description",
                    format!("Meta description present ({} characters)", desc.len()),
                    Impact::Medium,
                )
            }
            Some(desc) if !desc.is_empty() => Finding::fail(
                "meta-description",
                format!(
                    "Meta description is {} characters - aim for {} to {}",
                    desc.len(),
                    MIN_DESCRIPTION_CHARS,
                    MAX_DESCRIPTION_CHARS
                ),
                Impact::Medium,
            ),
            _ => Finding::fail(
                "meta-description",
                "No meta description - search engines improvise one".to_string(),
                Impact::Medium,
            ),
        });

        findings.push(if page.h1_count == 1 {
            Finding::pass(
                "single-h1",
                "Exactly one h1 heading".to_string(),
                Impact::Medium,
            )
        } else {
            Finding::fail(
                "single-h1",
                format!("Found {} h1 headings - there should be exactly one", page.h1_count),
                Impact::Medium,
            )
        });

        let alt_ok = if page.image_count == 0 {
            true
        } else {
            let covered = page.image_count.saturating_sub(page.images_missing_alt);
            covered as f64 / page.image_count as f64 >= MIN_ALT_COVERAGE
        };
        findings.push(if alt_ok {
            Finding::pass(
                "image-alt-text",
                "Images carry alt text".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "image-alt-text",
                format!(
                    "{} of {} images have no alt text",
                    page.images_missing_alt, page.image_count
                ),
                Impact::Low,
            )
        });

        findings.push(if page.has_schema_markup {
            Finding::pass(
                "schema-markup",
                "Structured data markup is present".to_string(),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "schema-markup",
                "No structured data - local-business schema earns richer search listings".to_string(),
                Impact::Low,
            )
        });

        findings.push(if page.word_count >= MIN_WORD_COUNT {
            Finding::pass(
                "content-depth",
                format!("Page has {} words of visible content", page.word_count),
                Impact::Low,
            )
        } else {
            Finding::fail(
                "content-depth",
                format!(
                    "Only {} words of visible content - thin pages rank poorly",
                    page.word_count
                ),
                Impact::Low,
            )
        });

        CategoryResult::new(self.name(), findings)
    }
}
