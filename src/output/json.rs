//! JSON record persistence
//!
//! One record per run, written to `<domain stem>.json`. A previous record
//! for the same domain is overwritten.

use crate::output::traits::{CrawlSummary, OutputHandler, OutputResult};
use std::path::{Path, PathBuf};

/// Serializes a summary as pretty JSON
///
/// Two-space indentation; non-ASCII characters are written literally.
pub fn to_json(summary: &CrawlSummary) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Path of the record for a summary inside `directory`
pub fn record_path(directory: &Path, summary: &CrawlSummary) -> PathBuf {
    directory.join(format!("{}.json", summary.target.output_stem()))
}

/// Writes the JSON record into a directory
#[derive(Debug, Clone)]
pub struct JsonRecord {
    directory: PathBuf,
}

impl JsonRecord {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Writes the record and returns its path
    ///
    /// The output directory is created if missing.
    pub fn save(&self, summary: &CrawlSummary) -> OutputResult<PathBuf> {
        let json = to_json(summary)?;

        std::fs::create_dir_all(&self.directory)?;
        let path = record_path(&self.directory, summary);
        std::fs::write(&path, json)?;

        tracing::info!("Wrote {} link(s) to {}", summary.results.total(), path.display());
        Ok(path)
    }
}

impl OutputHandler for JsonRecord {
    fn emit(&self, summary: &CrawlSummary) -> OutputResult<()> {
        let path = self.save(summary)?;
        println!("Saved to {}", path.display());
        Ok(())
    }
}
