/// Normalizes a seed URL so that it carries a scheme
///
/// Inputs starting with `http://` or `https://` (in any case) are kept as
/// given; anything else is assumed to be a bare host and gets `https://`,
/// including hosts that merely begin with the letters `http`.
/// Surrounding whitespace is trimmed. No other rewriting takes place, so the
/// result is what the report and JSON record show.
///
/// # Examples
///
/// ```
/// use link_sieve::url::normalize_target;
///
/// assert_eq!(normalize_target("example.com"), "https://example.com");
/// assert_eq!(normalize_target("http://example.com"), "http://example.com");
/// ```
pub fn normalize_target(input: &str) -> String {
    let input = input.trim();

    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
