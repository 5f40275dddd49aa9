//! HTML page parsing for enrichment: visible text and resolved anchors.
//!
//! Script-like elements are removed before parsing so their contents do
//! not leak into the text. Navigation, headers and footers are kept: on
//! small business sites that is where phone numbers and emails live.

use scraper::{Html, Selector};

use crate::identity::resolve_link;
use crate::text::normalise_whitespace;

/// Elements whose content is never visible text.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "svg", "template", "iframe"];

/// A link found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// `href` attribute as written.
    pub href: String,
    /// Absolute URL, empty for `mailto:`/`tel:`/fragment links.
    pub url: String,
    /// Visible link text, whitespace-normalised.
    pub text: String,
}

/// Parsed view of one fetched page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// URL the page was fetched from (after redirects).
    pub url: String,
    pub title: String,
    /// Visible text, whitespace-normalised.
    pub text: String,
    pub anchors: Vec<Anchor>,
}

/// Parse `html` fetched from `url` into text and anchors.
pub fn parse_page(html: &str, url: &str) -> PageContent {
    let cleaned = strip_non_text_tags(html);
    let document = Html::parse_document(&cleaned);

    PageContent {
        url: url.to_owned(),
        title: extract_title(&document),
        text: extract_text(&document),
        anchors: extract_anchors(&document, url),
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| normalise_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn extract_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let raw = match document.select(&selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => document.root_element().text().collect::<Vec<_>>().join(" "),
    };
    normalise_whitespace(&raw)
}

fn extract_anchors(document: &Html, base: &str) -> Vec<Anchor> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    document
        .select(&selector)
        .filter_map(|el| {
            let href = el.value().attr("href")?.trim().to_owned();
            let text = normalise_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            let url = resolve_link(base, &href);
            Some(Anchor { href, url, text })
        })
        .collect()
}

/// Remove every [`NON_TEXT_TAGS`] element and its content.
fn strip_non_text_tags(html: &str) -> String {
    NON_TEXT_TAGS
        .iter()
        .fold(html.to_owned(), |acc, tag| strip_tag(&acc, tag))
}

/// Remove all instances of `<tag ...>...</tag>`, case-insensitively.
///
/// An unclosed tag swallows the rest of the document.
fn strip_tag(html: &str, tag: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(offset) = lower[pos..].find(&open) {
        let start = pos + offset;
        let after = start + open.len();

        // `<svgfoo>` or `<stylesheet>` are different tags.
        let boundary = lower
            .as_bytes()
            .get(after)
            .is_none_or(|b| matches!(b, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t'));
        if !boundary {
            out.push_str(&html[pos..after]);
            pos = after;
            continue;
        }

        out.push_str(&html[pos..start]);
        match lower[start..].find(&close) {
            Some(end) => pos = start + end + close.len(),
            None => return out,
        }
    }

    out.push_str(&html[pos..]);
    out
}
