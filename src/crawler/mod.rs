//! Crawler module for the single-page link pass
//!
//! This module contains the crawling logic:
//! - HTTP fetching with classified failures
//! - HTML parsing and anchor extraction
//! - Filtering and categorization of the extracted anchors

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{sift_anchors, sift_page, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchResult};
pub use parser::{extract_anchors, Anchor};

use crate::classify::KeywordTable;
use crate::config::Settings;
use crate::output::CrawlSummary;
use crate::state::ResultSet;
use crate::url::Target;

/// Runs a complete crawl pass for one target
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Fetch the target page
/// 3. Extract, filter and categorize its anchors
///
/// A failed fetch is not an error: it yields an empty [`ResultSet`].
///
/// # Returns
///
/// * `Ok(ResultSet)` - The pass completed (possibly with no results)
/// * `Err(SieveError)` - The HTTP client could not be built
pub async fn crawl(
    target: &Target,
    settings: &Settings,
    keywords: &KeywordTable,
) -> crate::Result<ResultSet> {
    let coordinator = Coordinator::new(target, settings, keywords)?;
    Ok(coordinator.run().await)
}

/// Parses a raw seed URL and crawls it
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - The target and its classified links
/// * `Err(SieveError::UrlError)` - The seed is not a usable URL
/// * `Err(SieveError::Reqwest)` - The HTTP client could not be built
pub async fn sieve(
    input: &str,
    settings: &Settings,
    keywords: &KeywordTable,
) -> crate::Result<CrawlSummary> {
    let target = Target::parse(input)?;
    tracing::info!("Target domain: {}", target.domain());

    let results = crawl(&target, settings, keywords).await?;
    Ok(CrawlSummary::new(target, results))
}
