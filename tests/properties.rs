//! Property tests for the scoring and grading invariants.

use leadscore::analyzer::calculate_category_score;
use leadscore::{grade_report, CategoryResult, Finding, Grade, Impact};
use proptest::prelude::*;

fn impact_strategy() -> impl Strategy<Value = Impact> {
    prop_oneof![Just(Impact::High), Just(Impact::Medium), Just(Impact::Low)]
}

fn finding_strategy() -> impl Strategy<Value = Finding> {
    (any::<bool>(), impact_strategy()).prop_map(|(passed, impact)| Finding {
        label: "check".to_string(),
        passed,
        detail: String::new(),
        impact,
    })
}

/// Grades ordered best to worst, for monotonicity checks
const GRADE_ORDER: [Grade; 13] = [
    Grade::APlus,
    Grade::A,
    Grade::AMinus,
    Grade::BPlus,
    Grade::B,
    Grade::BMinus,
    Grade::CPlus,
    Grade::C,
    Grade::CMinus,
    Grade::DPlus,
    Grade::D,
    Grade::DMinus,
    Grade::F,
];

fn grade_rank(grade: Grade) -> usize {
    GRADE_ORDER.iter().position(|g| *g == grade).unwrap()
}

proptest! {
    #[test]
    fn category_score_always_in_range(findings in prop::collection::vec(finding_strategy(), 0..20)) {
        let score = calculate_category_score(&findings);
        prop_assert!(score <= 100);
    }

    #[test]
    fn uniform_all_pass_is_100_all_fail_is_0(
        impact in impact_strategy(),
        count in 1usize..15,
    ) {
        let passes: Vec<Finding> = (0..count)
            .map(|i| Finding::pass(&format!("c{}", i), String::new(), impact))
            .collect();
        let fails: Vec<Finding> = (0..count)
            .map(|i| Finding::fail(&format!("c{}", i), String::new(), impact))
            .collect();
        prop_assert_eq!(calculate_category_score(&passes), 100);
        prop_assert_eq!(calculate_category_score(&fails), 0);
    }

    #[test]
    fn grade_mapping_is_monotonic(a in -10i32..110, b in -10i32..110) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(grade_rank(Grade::from_score(hi)) <= grade_rank(Grade::from_score(lo)));
    }

    #[test]
    fn priority_fix_ties_keep_input_order(
        findings in prop::collection::vec(finding_strategy(), 0..25),
    ) {
        // Label each finding with its input position, grade, then check
        // that equal-impact fixes appear in increasing position order
        let labeled: Vec<Finding> = findings
            .into_iter()
            .enumerate()
            .map(|(i, mut f)| {
                f.label = format!("{:03}", i);
                f
            })
            .collect();
        let report = grade_report(
            vec![CategoryResult::new("Lead Capture", labeled)],
            None,
            "Other",
        );
        for window in report.priority_fixes.windows(2) {
            prop_assert!(window[0].impact.rank() <= window[1].impact.rank());
            if window[0].impact == window[1].impact {
                prop_assert!(window[0].label < window[1].label);
            }
        }
    }

    #[test]
    fn waste_range_brackets_are_ordered(score in 0u8..=100) {
        let report = grade_report(
            vec![CategoryResult::new(
                "Lead Capture",
                vec![Finding::pass("x", String::new(), Impact::High)],
            )],
            Some("$2,500-$5,000"),
            "Other",
        );
        // A fixed report for shape; the score-specific range comes from the
        // estimator directly
        prop_assert!(report.wasted_spend.is_some());
        let est = leadscore::analyzer::spend::estimate_wasted_spend(
            score,
            Some("$2,500-$5,000"),
            "Other",
            &leadscore::analyzer::spend::IndustrySpendTable::default(),
        )
        .unwrap();
        prop_assert!(est.low <= est.high);
        prop_assert!(est.high <= 3750); // never more than the whole budget at 1.2x waste cap
    }

    #[test]
    fn effort_always_tracks_impact(findings in prop::collection::vec(finding_strategy(), 0..20)) {
        let report = grade_report(
            vec![CategoryResult::new("Lead Capture", findings)],
            None,
            "Other",
        );
        for fix in &report.priority_fixes {
            prop_assert_eq!(fix.effort, fix.impact.effort());
        }
    }
}
