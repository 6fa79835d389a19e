//! Crawler coordinator - single-page crawl orchestration
//!
//! Sequences fetch, anchor extraction, filtering and categorization for one
//! target and fills a [`ResultSet`] owned by the pass.

use crate::classify::KeywordTable;
use crate::config::{FilterConfig, Settings};
use crate::crawler::parser::{extract_anchors, Anchor};
use crate::crawler::{build_http_client, fetch_page};
use crate::state::ResultSet;
use crate::url::{is_main_page, is_same_domain, Target};
use crate::SieveError;
use reqwest::Client;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator<'a> {
    target: &'a Target,
    filter: &'a FilterConfig,
    keywords: &'a KeywordTable,
    client: Client,
}

impl<'a> Coordinator<'a> {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SieveError)` - The HTTP client could not be built
    pub fn new(
        target: &'a Target,
        settings: &'a Settings,
        keywords: &'a KeywordTable,
    ) -> Result<Self, SieveError> {
        let client = build_http_client(&settings.fetch)?;

        Ok(Self {
            target,
            filter: &settings.filter,
            keywords,
            client,
        })
    }

    /// Runs the crawl pass
    ///
    /// Fetch failures are logged and produce an empty result set; they are
    /// indistinguishable from a page without matching links in the output.
    pub async fn run(&self) -> ResultSet {
        tracing::info!("Fetching {}", self.target);

        match fetch_page(&self.client, self.target.as_str()).await {
            Ok(body) => {
                let results = sift_page(&body, self.target, self.filter, self.keywords);
                tracing::info!(
                    "Classified {} link(s) for {}",
                    results.total(),
                    self.target.domain()
                );
                results
            }
            Err(e) => {
                tracing::warn!("Fetch failed, reporting no results: {}", e);
                ResultSet::new()
            }
        }
    }
}

/// Extracts, filters and categorizes the anchors of a fetched page
///
/// Relative links are resolved against the target URL. The result is a pure
/// function of its inputs.
pub fn sift_page(
    html: &str,
    target: &Target,
    filter: &FilterConfig,
    keywords: &KeywordTable,
) -> ResultSet {
    let anchors = extract_anchors(html, target.url());
    tracing::debug!("Extracted {} anchor(s)", anchors.len());
    sift_anchors(&anchors, target, filter, keywords)
}

/// Filters and categorizes already extracted anchors
///
/// Each anchor must pass the same-domain test and then the main-page
/// heuristic; it is then recorded under every category it matches. All
/// anchors are processed.
pub fn sift_anchors(
    anchors: &[Anchor],
    target: &Target,
    filter: &FilterConfig,
    keywords: &KeywordTable,
) -> ResultSet {
    let mut results = ResultSet::new();

    for anchor in anchors {
        let Ok(url) = Url::parse(&anchor.url) else {
            tracing::debug!("Skipping unparsable link {}", anchor.url);
            continue;
        };

        if !is_same_domain(&url, target.domain()) {
            tracing::trace!("Off-domain: {}", anchor.url);
            continue;
        }

        if !is_main_page(&url, filter) {
            tracing::debug!("Not a main page: {}", anchor.url);
            continue;
        }

        for category in keywords.categorize(&anchor.text, &anchor.url) {
            if results.insert(category, anchor.url.as_str()) {
                tracing::debug!("{} -> {}", anchor.url, category);
            }
        }
    }

    results
}
