//! Reporter module for output formatting

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// How many priority fixes the reports surface. Truncation happens here,
/// at the reporting boundary - the engine always ranks the full list.
pub const TOP_FIXES: usize = 5;
