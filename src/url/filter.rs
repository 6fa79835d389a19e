use crate::config::FilterConfig;
use url::Url;

/// Decides whether a URL looks like a main (listing) page
///
/// The check runs on the lowercased path. A URL is rejected when:
/// - its path ends with `.<ext>` for any configured excluded extension
/// - its path matches the detail-page pattern (by default a trailing
///   numeric segment such as `/news/12345`)
///
/// # Examples
///
/// ```
/// use link_sieve::config::FilterConfig;
/// use link_sieve::url::is_main_page;
/// use url::Url;
///
/// let filter = FilterConfig::default();
/// assert!(is_main_page(&Url::parse("https://acme.org/news").unwrap(), &filter));
/// assert!(!is_main_page(&Url::parse("https://acme.org/news/12345").unwrap(), &filter));
/// ```
pub fn is_main_page(url: &Url, filter: &FilterConfig) -> bool {
    let path = url.path().to_lowercase();

    let is_document = filter
        .excluded_extensions
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)));
    if is_document {
        return false;
    }

    !filter.detail_pattern.is_match(&path)
}
