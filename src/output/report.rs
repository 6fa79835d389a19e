//! Console report
//!
//! Layout:
//!
//! ```text
//!
//! Results for: https://acme.org
//! ==================================================
//!
//! News:
//!   - https://acme.org/news
//!
//! ```

use crate::output::traits::{CrawlSummary, OutputHandler, OutputResult};
use std::io::Write;

/// Width of the `=` rule under the header
pub const RULE_WIDTH: usize = 50;

/// Formats a crawl summary as the console report
///
/// Empty categories are left out entirely, so a run without results prints
/// the header and rule only.
pub fn format_report(summary: &CrawlSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nResults for: {}\n", summary.target));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (category, urls) in summary.results.iter() {
        if urls.is_empty() {
            continue;
        }

        out.push_str(&format!("\n{}:\n", category.title()));
        for url in urls {
            out.push_str(&format!("  - {}\n", url));
        }
    }

    out.push('\n');
    out
}

/// Prints the report to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport;

impl OutputHandler for ConsoleReport {
    fn emit(&self, summary: &CrawlSummary) -> OutputResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(format_report(summary).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
