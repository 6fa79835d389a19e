//! Output module for rendering crawl results
//!
//! This module handles:
//! - Printing the human-readable console report
//! - Persisting the JSON record named after the target domain

mod json;
mod report;
mod traits;

pub use json::{record_path, to_json, JsonRecord};
pub use report::{format_report, ConsoleReport, RULE_WIDTH};
pub use traits::{CrawlSummary, OutputError, OutputHandler, OutputResult};

/// Emits a summary through each handler in order
///
/// Stops at the first handler that fails.
pub fn emit_all(summary: &CrawlSummary, handlers: &[&dyn OutputHandler]) -> crate::Result<()> {
    for handler in handlers {
        handler.emit(summary)?;
    }
    Ok(())
}
