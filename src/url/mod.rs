//! URL handling module for Link-Sieve
//!
//! This module provides target normalization, domain extraction, the
//! same-domain test and the main-page heuristic.

mod domain;
mod filter;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, is_same_domain, output_stem};
pub use filter::is_main_page;
pub use normalize::normalize_target;

use crate::{UrlError, UrlResult};
use url::Url;

/// The single seed URL of a run and its derived domain
///
/// Created once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Normalized input string, as printed and persisted
    raw: String,
    /// Parsed form used as the base for link resolution
    url: Url,
    /// Lowercase host
    domain: String,
}

impl Target {
    /// Normalizes and parses a seed URL
    ///
    /// # Examples
    ///
    /// ```
    /// use link_sieve::Target;
    ///
    /// let target = Target::parse("www.example.co.uk/about").unwrap();
    /// assert_eq!(target.as_str(), "https://www.example.co.uk/about");
    /// assert_eq!(target.domain(), "www.example.co.uk");
    /// assert_eq!(target.output_stem(), "example");
    /// ```
    pub fn parse(input: &str) -> UrlResult<Self> {
        let raw = normalize_target(input);
        let url = Url::parse(&raw).map_err(|e| UrlError::Parse(e.to_string()))?;
        let domain = extract_domain(&url).ok_or(UrlError::MissingDomain)?;

        Ok(Self { raw, url, domain })
    }

    /// The normalized target string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed target URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The target's lowercase host
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// File stem of the persisted record, see [`output_stem`]
    pub fn output_stem(&self) -> &str {
        output_stem(&self.domain)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
