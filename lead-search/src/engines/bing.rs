//! Bing backend: good coverage of local businesses.
//!
//! Organic results sit in `li.b_algo` blocks. Links are frequently
//! wrapped in `https://www.bing.com/ck/a?...&u=a1<base64url>` click
//! trackers, where the payload after the `a1` marker is the target URL.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use url::Url;

use crate::engine::{encode_query, HeadingLinkStrategy, ParseStrategy, SearchBackend, SelectorStrategy};
use crate::types::Backend;

static ALGO_BLOCKS: SelectorStrategy = SelectorStrategy {
    name: "bing-algo",
    container: "li.b_algo",
    link: "h2 a[href]",
    title: Some("h2"),
    snippet: ".b_caption p, .b_lineclamp2, .b_lineclamp3, .b_algoSlug",
};

/// Newer card layout used on some locales.
static TITLE_CARDS: SelectorStrategy = SelectorStrategy {
    name: "bing-tilk",
    container: "li.b_algo, div.b_algo",
    link: "a.tilk[href]",
    title: Some(".tptt, h2"),
    snippet: ".b_caption, p",
};

/// Bing web search backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BingBackend;

impl BingBackend {
    /// Resolve a Bing click-tracker link to its destination.
    ///
    /// Non-tracker links pass through. A tracker whose payload does not
    /// decode to a URL yields `None`.
    pub fn extract_url(href: &str) -> Option<String> {
        let parsed = Url::parse(href).ok()?;
        let is_tracker = parsed
            .host_str()
            .is_some_and(|h| h.ends_with("bing.com"))
            && parsed.path().starts_with("/ck/a");
        if !is_tracker {
            return Some(href.to_string());
        }

        let payload = parsed
            .query_pairs()
            .find(|(key, _)| key == "u")
            .map(|(_, value)| value.into_owned())?;
        let encoded = payload.strip_prefix("a1").unwrap_or(&payload);
        let bytes = URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('=')).ok()?;
        let target = String::from_utf8(bytes).ok()?;
        Url::parse(&target).ok().map(|_| target)
    }
}

impl SearchBackend for BingBackend {
    fn backend(&self) -> Backend {
        Backend::Bing
    }

    fn max_queries(&self) -> usize {
        8
    }

    fn phrasings(&self) -> &'static [&'static str] {
        &["{kw} {location}", "{kw} companies in {location}"]
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://www.bing.com/search?q={}&count=20&setlang=en",
            encode_query(query)
        )
    }

    fn strategies(&self) -> Vec<&'static dyn ParseStrategy> {
        vec![&ALGO_BLOCKS, &TITLE_CARDS, &HeadingLinkStrategy]
    }

    fn unwrap_url(&self, href: &str) -> Option<String> {
        Self::extract_url(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocationContext;

    const FIXTURE_BING_HTML: &str = include_str!("../../test-data/bing.html");

    const MOCK_CARD_HTML: &str = r#"<html><body><ol id="b_results">
<li class="b_algo">
  <div class="b_tpcn"><a class="tilk" href="https://www.acme-transfers.com/"><div class="tptt">Acme Transfers</div></a></div>
  <p>Airport shuttle and taxi.</p>
</li>
</ol></body></html>"#;

    #[test]
    fn tracker_payload_decoded() {
        let href = "https://www.bing.com/ck/a?!&&p=abc&u=a1aHR0cHM6Ly93d3cuYWNtZS10cmFuc2ZlcnMuY29tLw&ntb=1";
        assert_eq!(
            BingBackend::extract_url(href),
            Some("https://www.acme-transfers.com/".to_string())
        );
    }

    #[test]
    fn direct_links_pass_through() {
        assert_eq!(
            BingBackend::extract_url("https://heathrowcars.co.uk/"),
            Some("https://heathrowcars.co.uk/".to_string())
        );
    }

    #[test]
    fn garbage_tracker_payload_dropped() {
        assert!(BingBackend::extract_url("https://www.bing.com/ck/a?u=a1%%%").is_none());
        assert!(BingBackend::extract_url("https://www.bing.com/ck/a?p=1").is_none());
    }

    #[test]
    fn fixture_extracts_organic_results() {
        let hits = BingBackend.parse(FIXTURE_BING_HTML);
        let urls: Vec<_> = hits.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.heathrow-cars.co.uk/",
                "https://london-airport-chauffeurs.com/contact",
                "https://www.gatwick-minibus.co.uk/",
            ]
        );
        assert_eq!(hits[0].title, "Heathrow Cars - Airport Taxi London");
        assert!(hits[0].snippet.contains("020 7946 0018"));
    }

    #[test]
    fn fixture_drops_social_results() {
        let hits = BingBackend.parse(FIXTURE_BING_HTML);
        assert!(hits.iter().all(|h| !h.url.contains("facebook.com")));
    }

    #[test]
    fn card_layout_used_as_fallback() {
        let hits = BingBackend.parse(MOCK_CARD_HTML);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Acme Transfers");
        assert_eq!(hits[0].url, "https://www.acme-transfers.com/");
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        assert!(BingBackend.parse("<html><body></body></html>").is_empty());
    }

    #[test]
    fn query_plan_capped_at_eight() {
        let ctx = LocationContext {
            airport: "London Heathrow".into(),
            city: "London".into(),
            country: "United Kingdom".into(),
        };
        let keywords: Vec<String> = (0..6).map(|i| format!("kw{i}")).collect();
        let queries = BingBackend.build_queries(&ctx, &keywords);
        assert_eq!(queries.len(), 8);
        assert_eq!(queries[1], "kw0 companies in London United Kingdom");
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BingBackend>();
    }
}
