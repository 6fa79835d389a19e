//! HTML parser for extracting anchors
//!
//! Every `<a href>` element is turned into an [`Anchor`] holding the
//! resolved absolute URL and the element's visible text.

use scraper::{Html, Selector};
use url::Url;

/// A hyperlink found in page markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Absolute URL, resolved against the page URL
    pub url: String,

    /// Visible text; may be empty
    pub text: String,
}

/// Parses HTML content and extracts its anchors in document order
///
/// # Extraction Rules
///
/// - Only `<a>` elements carrying an `href` attribute are considered
/// - The href is resolved with standard URL joining against `base_url`
///   (relative paths, protocol-relative URLs, query and fragment follow the
///   usual rules); hrefs that cannot be joined are skipped
/// - Non-HTTP schemes such as `mailto:` are kept; they have no host and
///   fail the same-domain test later
/// - Text is each descendant text node trimmed, concatenated without a
///   separator
/// - No deduplication happens here
///
/// Parsing is lenient: malformed markup never fails, it only yields fewer
/// anchors.
///
/// # Example
///
/// ```
/// use link_sieve::crawler::extract_anchors;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/news"> Latest <b>News</b> </a></body></html>"#;
/// let base_url = Url::parse("https://acme.org/").unwrap();
/// let anchors = extract_anchors(html, &base_url);
/// assert_eq!(anchors[0].url, "https://acme.org/news");
/// assert_eq!(anchors[0].text, "LatestNews");
/// ```
pub fn extract_anchors(html: &str, base_url: &Url) -> Vec<Anchor> {
    let document = Html::parse_document(html);
    let mut anchors = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return anchors;
    };

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        match base_url.join(href) {
            Ok(absolute_url) => {
                let text = element.text().map(str::trim).collect::<String>();
                anchors.push(Anchor {
                    url: absolute_url.to_string(),
                    text,
                });
            }
            Err(e) => {
                tracing::debug!("Skipping unresolvable href {:?}: {}", href, e);
            }
        }
    }

    anchors
}
