use crate::ConfigResult;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

/// Request timeout applied to the single page fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-like user agent sent with the page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Document extensions that never count as a main page
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &["pdf", "doc", "xls", "xlsx"];

/// Trailing numeric path segment, e.g. `/news/12345` or `/news/12345/`
pub const DEFAULT_DETAIL_PATTERN: &str = r"/\d+/?$";

static DEFAULT_DETAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_DETAIL_PATTERN).expect("DEFAULT_DETAIL_PATTERN is a valid regex"));

/// Main settings structure for a Link-Sieve run
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub fetch: FetchConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header value
    pub user_agent: String,

    /// Skip TLS certificate validation (trust-everything policy)
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}

/// Main-page heuristic configuration
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Lowercase extensions without the leading dot
    pub excluded_extensions: Vec<String>,

    /// Pattern matched against the lowercased URL path to spot detail pages
    pub detail_pattern: Regex,
}

impl FilterConfig {
    /// Builds a filter configuration from raw extension and pattern strings
    ///
    /// Extensions are lowercased and may be given with or without a leading
    /// dot (`"pdf"` and `".PDF"` are equivalent).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if `detail_pattern` is not a valid regex.
    pub fn new<S: AsRef<str>>(extensions: &[S], detail_pattern: &str) -> ConfigResult<Self> {
        let excluded_extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .collect();

        Ok(Self {
            excluded_extensions,
            detail_pattern: Regex::new(detail_pattern)?,
        })
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            detail_pattern: DEFAULT_DETAIL_REGEX.clone(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory the `<domain>.json` record is written into
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}
