//! Google backend: best index, most aggressive blocking, so fewest queries.
//!
//! Organic results are `div.g` blocks with an `h3` title. The basic HTML
//! layout served to unknown clients wraps links as `/url?q=<target>&sa=U`.

use url::Url;

use crate::engine::{encode_query, HeadingLinkStrategy, ParseStrategy, SearchBackend, SelectorStrategy};
use crate::types::Backend;

static ORGANIC_BLOCKS: SelectorStrategy = SelectorStrategy {
    name: "google-g",
    container: "div.g",
    link: "a[href]",
    title: Some("h3"),
    snippet: "div.VwiC3b, span.aCOpRe, div[data-sncf], div[data-content-feature]",
};

/// Basic HTML layout without `div.g`.
static BASIC_BLOCKS: SelectorStrategy = SelectorStrategy {
    name: "google-basic",
    container: "div.Gx5Zad, div.ezO2md",
    link: "a[href]",
    title: Some("h3, div.BNeawe.vvjwJb"),
    snippet: "div.BNeawe.s3v9rd, div.s3v9rd",
};

/// Google web search backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleBackend;

impl GoogleBackend {
    /// Unwrap `/url?q=` redirects; other absolute links pass through.
    pub fn extract_url(href: &str) -> Option<String> {
        let parsed = if href.starts_with('/') {
            Url::parse("https://www.google.com").ok()?.join(href).ok()?
        } else {
            Url::parse(href).ok()?
        };

        let is_redirect = parsed
            .host_str()
            .is_some_and(|h| h.ends_with("google.com"))
            && parsed.path() == "/url";
        if !is_redirect {
            return Some(parsed.to_string());
        }

        parsed
            .query_pairs()
            .find(|(key, _)| key == "q" || key == "url")
            .map(|(_, value)| value.into_owned())
            .filter(|target| target.starts_with("http"))
    }
}

impl SearchBackend for GoogleBackend {
    fn backend(&self) -> Backend {
        Backend::Google
    }

    fn max_queries(&self) -> usize {
        4
    }

    fn phrasings(&self) -> &'static [&'static str] {
        &["{kw} companies in {location}", "{kw} {location} contact email"]
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://www.google.com/search?q={}&num=10&hl=en",
            encode_query(query)
        )
    }

    fn strategies(&self) -> Vec<&'static dyn ParseStrategy> {
        vec![&ORGANIC_BLOCKS, &BASIC_BLOCKS, &HeadingLinkStrategy]
    }

    fn unwrap_url(&self, href: &str) -> Option<String> {
        Self::extract_url(href)
    }
}
