//! Report persistence - graded scans kept under short IDs for 30 days

use crate::analyzer::ScanResult;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILENAME: &str = ".leadscore-reports.json";
const REPORT_ID_LEN: usize = 10;
const RETENTION_DAYS: i64 = 30;

/// One persisted scan with its identity and lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    /// Short random ID handed back to the user
    pub id: String,
    /// RFC 3339 creation time
    pub created_at: String,
    /// RFC 3339 expiry; the record is dropped on the first load after this
    pub expires_at: String,
    pub scan: ScanResult,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ReportStore {
    pub reports: Vec<StoredReport>,
}

/// Aggregate figures for the internal stats view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_reports: usize,
    pub average_score: u8,
    /// Report count per letter grade string
    pub grade_counts: HashMap<String, usize>,
}

/// Short report ID: sha2 over the URL and the current nanosecond clock,
/// truncated. Random enough to be unguessable at this length and this
/// retention window.
pub fn generate_report_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(Utc::now().timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    hex::encode(hasher.finalize())[..REPORT_ID_LEN].to_string()
}

fn store_path(dir: &Path) -> PathBuf {
    dir.join(STORE_FILENAME)
}

/// Load the store from `dir`, dropping expired records. Missing or
/// corrupt files start an empty store.
pub fn load_store(dir: &Path) -> ReportStore {
    let mut store = fs::read_to_string(store_path(dir))
        .ok()
        .and_then(|content| serde_json::from_str::<ReportStore>(&content).ok())
        .unwrap_or_default();
    purge_expired(&mut store, Utc::now());
    store
}

/// Save the store to `dir`
pub fn save_store(dir: &Path, store: &ReportStore) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(store).unwrap_or_else(|_| "{}".to_string());
    fs::write(store_path(dir), content)
}

/// Wrap a scan in a stored record, append it, and return its ID
pub fn insert_report(store: &mut ReportStore, scan: ScanResult) -> String {
    let id = generate_report_id(&scan.url);
    let now = Utc::now();
    store.reports.push(StoredReport {
        id: id.clone(),
        created_at: now.to_rfc3339(),
        expires_at: (now + Duration::days(RETENTION_DAYS)).to_rfc3339(),
        scan,
    });
    id
}

/// Look up a stored report by ID
pub fn find_report<'a>(store: &'a ReportStore, id: &str) -> Option<&'a StoredReport> {
    store.reports.iter().find(|r| r.id == id)
}

/// Drop records whose expiry has passed (or whose expiry is unreadable)
pub fn purge_expired(store: &mut ReportStore, now: DateTime<Utc>) {
    store.reports.retain(|record| {
        DateTime::parse_from_rfc3339(&record.expires_at)
            .map(|expiry| expiry > now)
            .unwrap_or(false)
    });
}

/// Aggregate stats over the stored reports
pub fn store_stats(store: &ReportStore) -> StoreStats {
    let total = store.reports.len();
    let average_score = if total == 0 {
        0
    } else {
        let sum: u32 = store
            .reports
            .iter()
            .map(|r| r.scan.report.overall_score as u32)
            .sum();
        (sum as f64 / total as f64).round() as u8
    };
    let mut grade_counts: HashMap<String, usize> = HashMap::new();
    for record in &store.reports {
        *grade_counts
            .entry(record.scan.report.overall_grade.to_string())
            .or_default() += 1;
    }
    StoreStats {
        total_reports: total,
        average_score,
        grade_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grade_report, CategoryResult, Finding, Impact};

    fn scan(url: &str, passing: bool) -> ScanResult {
        let findings = vec![Finding {
            label: "check".to_string(),
            passed: passing,
            detail: String::new(),
            impact: Impact::High,
        }];
        let categories = vec![CategoryResult::new("Lead Capture", findings)];
        ScanResult {
            url: url.to_string(),
            business_type: "Plumbing".to_string(),
            report: grade_report(categories, Some("none"), "Plumbing"),
        }
    }

    #[test]
    fn ids_are_short_hex_and_distinct_across_urls() {
        let a = generate_report_id("https://a.example");
        let b = generate_report_id("https://b.example");
        assert_eq!(a.len(), REPORT_ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn insert_then_find_round_trip() {
        let mut store = ReportStore::default();
        let id = insert_report(&mut store, scan("https://a.example", true));
        let found = find_report(&store, &id).unwrap();
        assert_eq!(found.scan.url, "https://a.example");
        assert!(find_report(&store, "ffffffffff").is_none());
    }

    #[test]
    fn expired_records_are_purged() {
        let mut store = ReportStore::default();
        insert_report(&mut store, scan("https://a.example", true));
        // Jump past the retention window
        let future = Utc::now() + Duration::days(RETENTION_DAYS + 1);
        purge_expired(&mut store, future);
        assert!(store.reports.is_empty());
    }

    #[test]
    fn unreadable_expiry_counts_as_expired() {
        let mut store = ReportStore::default();
        insert_report(&mut store, scan("https://a.example", true));
        store.reports[0].expires_at = "garbage".to_string();
        purge_expired(&mut store, Utc::now());
        assert!(store.reports.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ReportStore::default();
        let id = insert_report(&mut store, scan("https://a.example", true));
        save_store(dir.path(), &store).unwrap();

        let loaded = load_store(dir.path());
        assert_eq!(loaded.reports.len(), 1);
        assert_eq!(loaded.reports[0].id, id);
    }

    #[test]
    fn corrupt_store_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILENAME), "{broken").unwrap();
        let loaded = load_store(dir.path());
        assert!(loaded.reports.is_empty());
    }

    #[test]
    fn stats_aggregate_scores_and_grades() {
        let mut store = ReportStore::default();
        insert_report(&mut store, scan("https://a.example", true)); // 100, A+
        insert_report(&mut store, scan("https://b.example", false)); // 0, F
        let stats = store_stats(&store);
        assert_eq!(stats.total_reports, 2);
        assert_eq!(stats.average_score, 50);
        assert_eq!(stats.grade_counts.get("A+"), Some(&1));
        assert_eq!(stats.grade_counts.get("F"), Some(&1));
    }
}
