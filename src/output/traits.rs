//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and the
//! summary value they render.

use crate::state::ResultSet;
use crate::url::Target;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything a run produced: the target and its classified links
///
/// Serializes as the persisted record, `{"url": ..., "results": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlSummary {
    /// Normalized target URL
    #[serde(rename = "url", serialize_with = "serialize_target")]
    pub target: Target,

    /// Classified links per category
    pub results: ResultSet,
}

impl CrawlSummary {
    pub fn new(target: Target, results: ResultSet) -> Self {
        Self { target, results }
    }
}

fn serialize_target<S: serde::Serializer>(target: &Target, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(target.as_str())
}

/// Trait for anything that renders a finished crawl
pub trait OutputHandler {
    /// Emits the summary to this handler's destination
    fn emit(&self, summary: &CrawlSummary) -> OutputResult<()>;
}
