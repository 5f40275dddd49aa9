//! DuckDuckGo backend: the most tolerant of automated requests.
//!
//! Uses the HTML-only endpoint at `https://html.duckduckgo.com/html/`,
//! which needs no JavaScript. Result links are wrapped in
//! `//duckduckgo.com/l/?uddg=<encoded target>` redirects.

use scraper::{Html, Selector};
use url::Url;

use crate::engine::{
    element_text, encode_query, HeadingLinkStrategy, ParseStrategy, RawHit, SearchBackend,
    SelectorStrategy,
};
use crate::types::Backend;

static RESULT_BLOCKS: SelectorStrategy = SelectorStrategy {
    name: "ddg-result-blocks",
    container: ".result.results_links:not(.result--ad), .web-result:not(.result--ad)",
    link: "a.result__a",
    title: None,
    snippet: ".result__snippet",
};

/// Lite layout: a table where each `a.result-link` row is followed by a
/// row holding its `td.result-snippet`.
#[derive(Debug, Clone, Copy, Default)]
struct LiteRowsStrategy;

impl ParseStrategy for LiteRowsStrategy {
    fn name(&self) -> &'static str {
        "ddg-lite-rows"
    }

    fn parse(&self, document: &Html) -> Vec<RawHit> {
        let (Ok(rows), Ok(link), Ok(snippet)) = (
            Selector::parse("tr"),
            Selector::parse("a.result-link"),
            Selector::parse("td.result-snippet"),
        ) else {
            return Vec::new();
        };

        let mut hits: Vec<RawHit> = Vec::new();
        // Index of the latest hit still waiting for its snippet row.
        let mut pending: Option<usize> = None;
        for row in document.select(&rows) {
            if let Some(a) = row.select(&link).next() {
                pending = None;
                let Some(href) = a.value().attr("href") else {
                    continue;
                };
                let snippet_text = row.select(&snippet).next().map(element_text).unwrap_or_default();
                if snippet_text.is_empty() {
                    pending = Some(hits.len());
                }
                hits.push(RawHit {
                    title: element_text(a),
                    href: href.trim().to_owned(),
                    snippet: snippet_text,
                });
            } else if let Some(cell) = row.select(&snippet).next() {
                if let Some(hit) = pending.take().and_then(|i| hits.get_mut(i)) {
                    hit.snippet = element_text(cell);
                }
            }
        }
        hits
    }
}

/// DuckDuckGo HTML backend. Issues the most queries of any backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckDuckGoBackend;

impl DuckDuckGoBackend {
    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// Direct links pass through; protocol-relative links get `https:`.
    pub fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SearchBackend for DuckDuckGoBackend {
    fn backend(&self) -> Backend {
        Backend::DuckDuckGo
    }

    fn max_queries(&self) -> usize {
        12
    }

    fn phrasings(&self) -> &'static [&'static str] {
        &[
            "{kw} {location}",
            "{kw} near {airport}",
            "{kw} {city} contact email",
        ]
    }

    fn search_url(&self, query: &str) -> String {
        format!("https://html.duckduckgo.com/html/?q={}&kl=wt-wt", encode_query(query))
    }

    fn strategies(&self) -> Vec<&'static dyn ParseStrategy> {
        vec![&RESULT_BLOCKS, &LiteRowsStrategy, &HeadingLinkStrategy]
    }

    fn unwrap_url(&self, href: &str) -> Option<String> {
        Self::extract_url(href)
    }
}
