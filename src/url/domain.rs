use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// URLs without a host (`mailto:`, `javascript:`) yield None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_sieve::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:info@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Tests whether a link belongs to the target domain
///
/// The link's host only has to *contain* the target domain. Subdomains are
/// accepted, and so is any unrelated host that happens to embed the target
/// domain (`example.com.evil.org` for `example.com`).
///
/// Only hosts are compared; ports are ignored, so `127.0.0.1:9999` counts
/// as the same domain as a `127.0.0.1:8080` target.
pub fn is_same_domain(link: &Url, target_domain: &str) -> bool {
    extract_domain(link)
        .map(|host| host.contains(target_domain))
        .unwrap_or(false)
}

/// Derives the output file stem from a domain
///
/// A leading `www.` label is dropped and the first remaining DNS label is
/// returned: `www.example.co.uk` becomes `example`. The port plays no part.
pub fn output_stem(domain: &str) -> &str {
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    domain.split('.').next().unwrap_or(domain)
}
