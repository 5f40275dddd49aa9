//! URL identity: registrable domains, link resolution and canonical links.
//!
//! The registrable domain (eTLD+1, public-suffix aware) is the merge key
//! for leads and the scope boundary for crawling.

use url::{Host, Url};

/// Tracking query parameters dropped by [`canonical_link`].
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "msclkid",
];

/// Link prefixes that never point at a crawlable page.
const NON_PAGE_PREFIXES: &[&str] = &["mailto:", "tel:", "javascript:", "#"];

/// Parses `raw`, assuming `https://` when no scheme is present.
fn parse_lenient(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = if raw.contains("://") {
        Url::parse(raw)
    } else {
        Url::parse(&format!("https://{raw}"))
    };
    parsed.ok()
}

/// Registrable domain of a URL, e.g. `www.example.co.uk` → `example.co.uk`.
///
/// Returns an empty string when the URL does not parse, has no host, or
/// the host is an IP address or a bare public suffix.
///
/// ```
/// use lead_search::identity::registrable_domain;
///
/// assert_eq!(registrable_domain("https://www.acme-transfers.co.uk/contact"), "acme-transfers.co.uk");
/// assert_eq!(registrable_domain("not a url"), "");
/// ```
pub fn registrable_domain(url: &str) -> String {
    let Some(parsed) = parse_lenient(url) else {
        return String::new();
    };
    match parsed.host() {
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.');
            psl::domain_str(host)
                .map(str::to_lowercase)
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Returns `true` when both URLs share a registrable domain.
///
/// Hosts without a registrable domain (IP addresses, `localhost`) compare
/// by exact host instead. Unparsable URLs never match.
pub fn same_registrable_domain(a: &str, b: &str) -> bool {
    let (da, db) = (registrable_domain(a), registrable_domain(b));
    if !da.is_empty() || !db.is_empty() {
        return da == db;
    }
    match (parse_lenient(a), parse_lenient(b)) {
        (Some(ua), Some(ub)) => match (ua.host_str(), ub.host_str()) {
            (Some(ha), Some(hb)) => ha.eq_ignore_ascii_case(hb),
            _ => false,
        },
        _ => false,
    }
}

/// Resolves `href` against `base`.
///
/// Returns an empty string for `mailto:`, `tel:`, `javascript:` and
/// fragment-only links, and when resolution fails.
pub fn resolve_link(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    let lower = href.to_ascii_lowercase();
    if NON_PAGE_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return String::new();
    }
    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(|u| u.to_string())
        .unwrap_or_default()
}

/// Canonical form of a page link for crawl-queue deduplication.
///
/// Drops the fragment, the default port, tracking parameters and a
/// trailing slash. Unparsable input is returned unchanged.
pub fn canonical_link(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);

    if matches!(
        (parsed.scheme(), parsed.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = parsed.set_port(None);
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    parsed.to_string()
}
