//! Search provider client.
//!
//! The provider exposes no JSON API; results are pulled from its HTML
//! endpoint and reduced to `(title, body)` pairs with regular expressions.
//! Ordering follows the provider's relevance ranking.

use deck_core::{Error, Result, SearchHit};
use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com/html/";

/// Desktop User-Agent; the endpoint rejects clients without one.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Matches result title anchors.
static RESULT_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<a[^>]*class="result__a"[^>]*>(.*?)</a>"#).unwrap());

/// Matches result snippet elements.
static RESULT_SNIPPET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<a[^>]*class="result__snippet"[^>]*>(.*?)</a>"#).unwrap());

/// Matches any HTML tag.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Client for the web search provider.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client against the default provider endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run one query and return up to `max_results` hits.
    ///
    /// Fewer results than requested (including none) is not an error;
    /// provider failures are.
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        log::debug!("Searching for {:?} (max {} results)", query, max_results);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query)])
            .header("User-Agent", USER_AGENT)
            .send()
            .map_err(|e| Error::SearchFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::SearchFailed(format!(
                "Provider returned HTTP {}",
                response.status()
            )));
        }

        let html = response
            .text()
            .map_err(|e| Error::SearchFailed(format!("Failed to read response body: {}", e)))?;

        let hits = extract_hits(&html, max_results);
        log::debug!("Collected {} search hits", hits.len());
        Ok(hits)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull `(title, body)` pairs out of a result page, in page order.
fn extract_hits(html: &str, max_results: usize) -> Vec<SearchHit> {
    let snippets: Vec<String> = RESULT_SNIPPET_REGEX
        .captures_iter(html)
        .map(|caps| clean_fragment(&caps[1]))
        .collect();

    RESULT_TITLE_REGEX
        .captures_iter(html)
        .map(|caps| clean_fragment(&caps[1]))
        .enumerate()
        .filter(|(_, title)| !title.is_empty())
        .take(max_results)
        .map(|(idx, title)| {
            let body = snippets.get(idx).cloned().unwrap_or_default();
            SearchHit::new(title, body)
        })
        .collect()
}

/// Strip tags, decode entities, and collapse whitespace in a fragment.
fn clean_fragment(fragment: &str) -> String {
    let stripped = TAG_REGEX.replace_all(fragment, "");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the small set of entities the endpoint emits.
///
/// `&amp;` is decoded last so double-escaped sequences stay escaped once.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_PAGE: &str = r#"
        <div class="result results_links">
          <a rel="nofollow" class="result__a" href="https://example.com/rust">The <b>Rust</b> Language</a>
          <a class="result__snippet" href="https://example.com/rust">A language empowering everyone &amp; anyone.</a>
        </div>
        <div class="result results_links">
          <a rel="nofollow" class="result__a" href="https://example.com/cargo">Cargo Guide</a>
          <a class="result__snippet" href="https://example.com/cargo">Build, test, and <b>run</b> projects.</a>
        </div>
        <div class="result results_links">
          <a rel="nofollow" class="result__a" href="https://example.com/extra">Third Result</a>
          <a class="result__snippet" href="https://example.com/extra">More text.</a>
        </div>
    "#;

    #[test]
    fn test_extract_hits() {
        let hits = extract_hits(RESULT_PAGE, 5);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "The Rust Language");
        assert_eq!(hits[0].body, "A language empowering everyone & anyone.");
        assert_eq!(hits[1].title, "Cargo Guide");
    }

    #[test]
    fn test_extract_hits_bounded() {
        let hits = extract_hits(RESULT_PAGE, 2);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].title, "Cargo Guide");
    }

    #[test]
    fn test_extract_hits_empty_page() {
        assert!(extract_hits("<html><body>No results.</body></html>", 5).is_empty());
    }

    #[test]
    fn test_snippet_form() {
        let hits = extract_hits(RESULT_PAGE, 1);

        assert_eq!(
            hits[0].snippet(),
            "The Rust Language: A language empowering everyone & anyone."
        );
    }

    #[test]
    fn test_clean_fragment_strips_tags_and_entities() {
        assert_eq!(
            clean_fragment("<b>Fast</b> &amp; <i>safe</i>\n  systems"),
            "Fast & safe systems"
        );
        assert_eq!(clean_fragment("it&#x27;s &lt;ok&gt;"), "it's <ok>");
    }

    #[test]
    fn test_missing_snippet_yields_empty_body() {
        let html = r#"<a class="result__a" href="x">Lone Title</a>"#;
        let hits = extract_hits(html, 5);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Lone Title");
        assert!(hits[0].body.is_empty());
    }
}
