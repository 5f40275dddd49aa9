//! Trait definitions for pluggable search backends and result parsers.
//!
//! Each backend (DuckDuckGo, Bing, Google) implements [`SearchBackend`]:
//! it turns a location and keyword set into a bounded list of queries,
//! knows its results-page URL, and parses result pages through an ordered
//! chain of [`ParseStrategy`] values. The first strategy that yields
//! usable hits wins, so markup drift on one layout falls through to the
//! next.

use scraper::{ElementRef, Html, Selector};

use crate::identity::registrable_domain;
use crate::text::normalise_whitespace;
use crate::types::{Backend, LocationContext, SearchHit};

/// Registrable domains that are never candidate companies.
const BLOCKED_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "facebook.com",
    "fb.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "linkedin.com",
    "pinterest.com",
    "tiktok.com",
    "reddit.com",
    "quora.com",
    "wikipedia.org",
    "wikimedia.org",
    "yelp.com",
    "tripadvisor.com",
    "trustpilot.com",
    "booking.com",
    "expedia.com",
    "viator.com",
    "getyourguide.com",
    "kayak.com",
    "yellowpages.com",
    "msn.com",
    "microsoft.com",
    "apple.com",
    "duckduckgo.com",
    "bing.com",
    "google.com",
    "googleusercontent.com",
    "gstatic.com",
    "yahoo.com",
    "amazon.com",
    "ebay.com",
];

/// Brand labels blocked under any public suffix (`google.fr`, `amazon.co.uk`).
const BLOCKED_BRANDS: &[&str] = &[
    "google",
    "bing",
    "duckduckgo",
    "yahoo",
    "amazon",
    "ebay",
    "tripadvisor",
    "yelp",
    "wikipedia",
    "booking",
];

/// Returns `true` if `url` is unparsable, lacks a registrable domain, or
/// belongs to a blocked non-candidate site.
pub fn is_blocked(url: &str) -> bool {
    let domain = registrable_domain(url);
    if domain.is_empty() {
        return true;
    }
    if BLOCKED_DOMAINS.contains(&domain.as_str()) {
        return true;
    }
    let brand = domain.split('.').next().unwrap_or_default();
    BLOCKED_BRANDS.contains(&brand)
}

/// A hit as found on the page, before URL unwrapping and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHit {
    pub title: String,
    pub href: String,
    pub snippet: String,
}

/// One way of reading hits out of a results page.
pub trait ParseStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract raw hits in page order.
    fn parse(&self, document: &Html) -> Vec<RawHit>;
}

/// Result containers matched by CSS selectors.
#[derive(Debug, Clone, Copy)]
pub struct SelectorStrategy {
    pub name: &'static str,
    /// Selector for one organic result block.
    pub container: &'static str,
    /// Selector for the result link inside the block.
    pub link: &'static str,
    /// Selector for the title; the link text is used when `None`.
    pub title: Option<&'static str>,
    /// Selector for the snippet text.
    pub snippet: &'static str,
}

impl ParseStrategy for SelectorStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, document: &Html) -> Vec<RawHit> {
        let (Ok(container), Ok(link), Ok(snippet)) = (
            Selector::parse(self.container),
            Selector::parse(self.link),
            Selector::parse(self.snippet),
        ) else {
            tracing::warn!(strategy = self.name, "invalid selector in parse strategy");
            return Vec::new();
        };
        let title = self.title.and_then(|t| Selector::parse(t).ok());

        document
            .select(&container)
            .filter_map(|block| {
                let link_el = block.select(&link).next()?;
                let href = link_el.value().attr("href")?.trim().to_owned();
                let title_text = match title {
                    Some(ref sel) => block.select(sel).next().map(element_text),
                    None => None,
                }
                .unwrap_or_else(|| element_text(link_el));
                let snippet_text = block
                    .select(&snippet)
                    .next()
                    .map(element_text)
                    .unwrap_or_default();
                Some(RawHit {
                    title: title_text,
                    href,
                    snippet: snippet_text,
                })
            })
            .collect()
    }
}

/// Last-resort strategy: any link that is, or wraps, an `h2`/`h3` heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingLinkStrategy;

impl ParseStrategy for HeadingLinkStrategy {
    fn name(&self) -> &'static str {
        "heading-links"
    }

    fn parse(&self, document: &Html) -> Vec<RawHit> {
        let (Ok(anchors), Ok(headings)) = (Selector::parse("a[href]"), Selector::parse("h2, h3"))
        else {
            return Vec::new();
        };

        document
            .select(&anchors)
            .filter_map(|a| {
                let inner = a.select(&headings).next();
                let in_heading = a
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .take(3)
                    .any(|el| matches!(el.value().name(), "h2" | "h3"));
                if inner.is_none() && !in_heading {
                    return None;
                }
                let title = inner.map(element_text).unwrap_or_else(|| element_text(a));
                if title.is_empty() {
                    return None;
                }
                Some(RawHit {
                    title,
                    href: a.value().attr("href")?.trim().to_owned(),
                    snippet: String::new(),
                })
            })
            .collect()
    }
}

pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalise_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Run `strategies` in order and return the first non-empty set of hits.
///
/// Every raw href is passed through `unwrap` (engine redirect removal);
/// hits that are not absolute http(s) URLs or are [`is_blocked`] are
/// discarded before a strategy's output is judged empty.
pub fn parse_with_fallback(
    html: &str,
    strategies: &[&dyn ParseStrategy],
    unwrap: impl Fn(&str) -> Option<String>,
) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    for strategy in strategies {
        let raw = strategy.parse(&document);
        let found = raw.len();
        let hits: Vec<SearchHit> = raw
            .into_iter()
            .filter_map(|hit| {
                let url = unwrap(&hit.href)?;
                if !(url.starts_with("http://") || url.starts_with("https://")) || is_blocked(&url)
                {
                    return None;
                }
                Some(SearchHit {
                    title: hit.title,
                    url,
                    snippet: hit.snippet,
                })
            })
            .collect();

        tracing::debug!(strategy = strategy.name(), found, kept = hits.len(), "parse strategy finished");
        if !hits.is_empty() {
            return hits;
        }
    }

    Vec::new()
}

/// A pluggable search backend.
///
/// Implementors only describe the engine: query phrasings, results URL,
/// redirect unwrapping and parse strategies. Fetching, politeness delays
/// and the per-backend result cap live in the harvesting loop.
///
/// All implementations must be `Send + Sync` so backends can run
/// concurrently with respect to each other.
pub trait SearchBackend: Send + Sync {
    /// Which [`Backend`] this implementation represents.
    fn backend(&self) -> Backend;

    /// Upper bound on queries issued per run.
    fn max_queries(&self) -> usize;

    /// Query templates. `{kw}`, `{location}`, `{airport}`, `{city}` and
    /// `{country}` are substituted.
    fn phrasings(&self) -> &'static [&'static str];

    /// Results page URL for `query`.
    fn search_url(&self, query: &str) -> String;

    /// Parse strategies, most specific first.
    fn strategies(&self) -> Vec<&'static dyn ParseStrategy>;

    /// Destination URL behind a result href. `None` drops the hit.
    fn unwrap_url(&self, href: &str) -> Option<String>;

    /// Every keyword × phrasing combination, keyword-major, without
    /// duplicates, capped at [`Self::max_queries`].
    fn build_queries(&self, ctx: &LocationContext, keywords: &[String]) -> Vec<String> {
        let location = ctx.location();
        let mut queries: Vec<String> = Vec::new();
        for kw in keywords {
            for phrasing in self.phrasings() {
                let query = phrasing
                    .replace("{kw}", kw)
                    .replace("{location}", &location)
                    .replace("{airport}", &ctx.airport)
                    .replace("{city}", &ctx.city)
                    .replace("{country}", &ctx.country);
                let query = normalise_whitespace(&query);
                if !query.is_empty() && !queries.contains(&query) {
                    queries.push(query);
                }
            }
        }
        queries.truncate(self.max_queries());
        queries
    }

    /// Parse a results page into filtered hits.
    fn parse(&self, body: &str) -> Vec<SearchHit> {
        parse_with_fallback(body, &self.strategies(), |href| self.unwrap_url(href))
    }
}

/// Percent-encode a query for a `q=` parameter (spaces become `+`).
pub(crate) fn encode_query(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
