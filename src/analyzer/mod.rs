//! Analysis: category analyzers, scoring, and the grading engine

pub mod checks;
pub mod engine;
pub mod scoring;
pub mod spend;

pub use engine::{AggregateStats, ScanEngine, ScanResult};
pub use scoring::{calculate_category_score, default_weights, Grader};
