//! Edge case tests: degraded and minimal inputs must grade, never panic.

use leadscore::analyzer::ScanEngine;
use leadscore::signals::ScanInput;
use leadscore::{CategoryResult, Finding, Grade, Impact};

fn run(json: &str) -> leadscore::analyzer::ScanResult {
    let input: ScanInput = serde_json::from_str(json).unwrap();
    ScanEngine::default().run(&input)
}

#[test]
fn minimal_input_grades_to_full_report() {
    let result = run(r#"{"url": "https://bare.example"}"#);
    assert_eq!(result.report.categories.len(), 6);
    // Every category is non-empty and scoreable even with no signals at all
    for category in &result.report.categories {
        assert!(!category.findings.is_empty(), "{} is empty", category.name);
        assert!(category.score <= 100);
    }
    assert_eq!(result.report.overall_grade, Grade::F);
}

#[test]
fn missing_metrics_zeroes_page_speed_only() {
    let with_metrics = run(
        r#"{
            "url": "https://a.example",
            "page": {"hasViewportMeta": true, "legibleFontSize": true},
            "metrics": {"loadTimeMs": 2000, "pageWeightKb": 800, "layoutShift": 0.01, "interactiveDelayMs": 100,
                        "mobileFriendly": true, "viewportOk": true, "tapTargetsOk": true, "textLegible": true}
        }"#,
    );
    let without_metrics = run(
        r#"{
            "url": "https://a.example",
            "page": {"hasViewportMeta": true, "legibleFontSize": true}
        }"#,
    );

    let speed = |r: &leadscore::analyzer::ScanResult| {
        r.report
            .categories
            .iter()
            .find(|c| c.name == "Page Speed")
            .unwrap()
            .score
    };
    let mobile = |r: &leadscore::analyzer::ScanResult| {
        r.report
            .categories
            .iter()
            .find(|c| c.name == "Mobile Experience")
            .unwrap()
            .score
    };

    assert_eq!(speed(&with_metrics), 100);
    assert_eq!(speed(&without_metrics), 0);
    // Mobile degrades to page signals instead of collapsing
    assert_eq!(mobile(&with_metrics), mobile(&without_metrics));
}

#[test]
fn ai_review_with_wrong_shape_is_ignored() {
    let findings: Vec<Finding> = (0..3)
        .map(|i| Finding::pass(&format!("c{}", i), "ok".to_string(), Impact::Low))
        .collect();
    let bad = CategoryResult::new("Content Quality", findings);
    let json = format!(
        r#"{{"url": "https://a.example", "aiReview": {}}}"#,
        serde_json::to_string(&bad).unwrap()
    );
    let result = run(&json);
    assert_eq!(result.report.categories.len(), 6);
}

#[test]
fn ai_review_with_tampered_score_is_recomputed() {
    let findings: Vec<Finding> = (0..5)
        .map(|i| Finding::fail(&format!("c{}", i), "weak".to_string(), Impact::Medium))
        .collect();
    let mut candidate = CategoryResult::new("Content Quality", findings);
    candidate.score = 100; // upstream lies
    let json = format!(
        r#"{{"url": "https://a.example", "aiReview": {}}}"#,
        serde_json::to_string(&candidate).unwrap()
    );
    let result = run(&json);
    let content = result
        .report
        .categories
        .iter()
        .find(|c| c.name == "Content Quality")
        .unwrap();
    assert_eq!(content.score, 0);
}

#[test]
fn unknown_json_fields_are_rejected_nowhere() {
    // Upstream scrapers may add fields; deserialization must tolerate them
    let result = run(
        r#"{"url": "https://a.example", "page": {"hasSsl": true, "someFutureSignal": 42}}"#,
    );
    assert_eq!(result.report.categories.len(), 6);
}

#[test]
fn whitespace_bracket_variants_still_resolve() {
    let result = run(
        r#"{"url": "https://a.example", "business": {"businessType": "HVAC", "adSpendBracket": "$1,000 - $2,500"}}"#,
    );
    let est = result.report.wasted_spend.unwrap();
    assert_eq!(est.monthly_spend, 1750);
    assert!(!est.is_estimated);
}
