//! Console reporter with colored output

use super::TOP_FIXES;
use crate::analyzer::{AggregateStats, ScanResult};
use crate::verdict::{overall_verdict, wasted_spend_verdict};
use crate::{CategoryResult, Grade};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to show per-finding detail
    verbose: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable per-finding detail
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single graded scan
    pub fn report(&self, result: &ScanResult, report_id: Option<&str>) {
        self.print_header(result, report_id);
        self.print_score(result);
        self.print_categories(result);
        self.print_fixes(result);
        self.print_spend(result);
        println!();
    }

    /// Report a batch with a summary footer
    pub fn report_many(&self, results: &[ScanResult], stats: &AggregateStats) {
        for result in results {
            self.report(result, None);
            println!("{}", "─".repeat(60));
        }
        self.print_summary(stats);
    }

    /// Quiet mode: one line per scan
    pub fn report_quiet(&self, result: &ScanResult) {
        println!(
            "{}: {} ({})",
            result.url,
            result.report.overall_score,
            self.colorize_grade(result.report.overall_grade)
        );
    }

    fn print_header(&self, result: &ScanResult, report_id: Option<&str>) {
        println!();
        println!(
            "{}",
            format!("Lead Conversion Audit: {}", result.url).bold()
        );
        println!("   Business type: {}", result.business_type);
        if let Some(id) = report_id {
            println!("   Report ID: {} (kept 30 days)", id);
        }
        println!();
    }

    fn print_score(&self, result: &ScanResult) {
        let report = &result.report;
        let bar = score_bar(report.overall_score);
        println!(
            "   Score: {} {}/100 {}",
            bar,
            report.overall_score,
            self.colorize_grade(report.overall_grade).bold()
        );
        println!("   {}", overall_verdict(report.overall_grade).dimmed());
        println!();
    }

    fn print_categories(&self, result: &ScanResult) {
        println!("   {}", "Category Breakdown:".bold());
        for category in &result.report.categories {
            let score_str = format!("{:>3}", category.score);
            let colored_score = if category.score >= 80 {
                score_str.green()
            } else if category.score >= 60 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", mini_bar(category.score), colored_score, category.name);
            if self.verbose {
                self.print_findings(category);
            }
        }
        println!();
    }

    fn print_findings(&self, category: &CategoryResult) {
        for finding in &category.findings {
            let mark = if finding.passed {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("       {} [{}] {}", mark, finding.impact, finding.detail);
        }
    }

    fn print_fixes(&self, result: &ScanResult) {
        let fixes = &result.report.priority_fixes;
        if fixes.is_empty() {
            println!("   {}", "No failing checks - nothing to fix.".green());
            return;
        }
        println!("   {}", "Top Fixes:".bold());
        for (i, fix) in fixes.iter().take(TOP_FIXES).enumerate() {
            let impact_tag = match fix.impact {
                crate::Impact::High => "high".red(),
                crate::Impact::Medium => "medium".yellow(),
                crate::Impact::Low => "low".dimmed(),
            };
            println!(
                "   {}. [{} impact, {} fix] {}",
                i + 1,
                impact_tag,
                fix.effort,
                fix.detail
            );
        }
        let remaining = fixes.len().saturating_sub(TOP_FIXES);
        if remaining > 0 {
            println!("   {}", format!("...and {} more", remaining).dimmed());
        }
        println!();
    }

    fn print_spend(&self, result: &ScanResult) {
        println!(
            "   {}",
            wasted_spend_verdict(result.report.wasted_spend.as_ref(), &result.business_type)
        );
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "Summary".bold());
        println!(
            "   Scans: {} | Average: {} ({}) | Open fixes: {}",
            stats.scans,
            stats.average_score,
            self.colorize_grade(stats.average_grade),
            stats.total_fixes
        );
    }

    fn colorize_grade(&self, grade: Grade) -> ColoredString {
        let text = grade.to_string();
        match grade.color() {
            "green" => text.green(),
            "lime" => text.bright_green(),
            "amber" => text.yellow(),
            "orange" => text.truecolor(255, 165, 0),
            _ => text.red(),
        }
    }
}

fn score_bar(score: u8) -> String {
    let filled = (score as usize) / 10;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
}

fn mini_bar(score: u8) -> String {
    let filled = (score as usize) / 20;
    format!("{}{}", "▰".repeat(filled), "▱".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_bounds() {
        assert_eq!(score_bar(0), format!("[{}]", "░".repeat(10)));
        assert_eq!(score_bar(100), format!("[{}]", "█".repeat(10)));
        assert_eq!(score_bar(55), format!("[{}{}]", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn mini_bar_bounds() {
        assert_eq!(mini_bar(0), "▱▱▱▱▱");
        assert_eq!(mini_bar(100), "▰▰▰▰▰");
    }
}
