//! Website enrichment: homepage plus a bounded set of contact pages.
//!
//! [`Crawler::enrich`] never fails. Any error fetching the homepage leaves
//! the lead exactly as it was; a failing contact page is skipped.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::config::PipelineConfig;
use crate::content::{parse_page, PageContent};
use crate::error::LeadError;
use crate::http::PageFetcher;
use crate::identity::{canonical_link, same_registrable_domain};
use crate::text::{extract_emails, extract_phones, phone_digits};
use crate::types::Lead;

/// Signal phrase added to notes when a fleet is described.
pub const FLEET_SIGNAL: &str = "Fleet mentioned on website";
/// Signal phrase added to notes when B2B integration is offered.
pub const API_SIGNAL: &str = "API/integration capability detected";

/// Transport-service vocabulary detected in page text.
pub const SERVICE_KEYWORDS: &[&str] = &[
    "airport transfer",
    "chauffeur",
    "taxi",
    "limousine",
    "limo",
    "shuttle",
    "private hire",
    "executive transfer",
    "corporate transport",
    "sedan service",
    "minibus",
    "fleet",
    "vip transfer",
    "meet and greet",
    "point to point",
];

const API_KEYWORDS: &[&str] = &[
    "integration",
    "xml feed",
    "affiliate",
    "b2b portal",
    "partner portal",
];

static CONTACT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(contact|about|impressum|team|book|reserv|enquir|get.in.touch|reach.us)").ok()
});

static LINKEDIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:[a-z]{2,3}\.)?linkedin\.com/company/[\w\-]+/?").ok()
});

static FLEET_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)fleet\s+of\s+\d+|\d+\s+vehicles?\b|fleet\s+size|our\s+fleet").ok()
});

/// `api` as a word, so "capital" or "rapid" do not count.
static API_WORD_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\bapis?\b").ok());

/// Contact data and signals found on one page.
#[derive(Debug, Clone, Default)]
pub struct PageSignals {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub linkedin: Option<String>,
    pub services: Vec<&'static str>,
    pub fleet: bool,
    pub api: bool,
}

impl PageSignals {
    /// Extract signals from a parsed page and its raw HTML.
    ///
    /// Emails come from the raw HTML so `mailto:` links count; phones and
    /// keywords come from visible text only.
    pub fn from_page(page: &PageContent, raw_html: &str) -> Self {
        Self {
            emails: extract_emails(raw_html),
            phones: extract_phones(&page.text),
            linkedin: find_linkedin(page),
            services: detect_services(&page.text),
            fleet: detect_fleet(&page.text),
            api: detect_api(&page.text),
        }
    }
}

/// First LinkedIn company page linked from the page, without trailing `/`.
pub fn find_linkedin(page: &PageContent) -> Option<String> {
    let re = LINKEDIN_RE.as_ref()?;
    page.anchors.iter().find_map(|a| {
        re.find(&a.href)
            .map(|m| m.as_str().trim_end_matches('/').to_owned())
    })
}

/// Service keywords present in `text`, in vocabulary order.
pub fn detect_services(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SERVICE_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect()
}

/// "fleet of 40", "12 vehicles", "fleet size", "our fleet".
pub fn detect_fleet(text: &str) -> bool {
    FLEET_RE.as_ref().is_some_and(|re| re.is_match(text))
}

/// API or B2B integration offered.
pub fn detect_api(text: &str) -> bool {
    let lower = text.to_lowercase();
    API_WORD_RE.as_ref().is_some_and(|re| re.is_match(&lower))
        || API_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Same-site links whose text or href suggests contact details.
///
/// Deduplicated by canonical form in discovery order, the page itself
/// excluded, at most `max_pages`.
pub fn find_contact_links(page: &PageContent, max_pages: usize) -> Vec<String> {
    let Some(re) = CONTACT_RE.as_ref() else {
        return Vec::new();
    };
    let home = canonical_link(&page.url);
    let mut seen: Vec<String> = vec![home];
    let mut links = Vec::new();

    for anchor in &page.anchors {
        if links.len() >= max_pages {
            break;
        }
        if anchor.url.is_empty() || !same_registrable_domain(&page.url, &anchor.url) {
            continue;
        }
        if !re.is_match(&anchor.text) && !re.is_match(&anchor.href) {
            continue;
        }
        let canonical = canonical_link(&anchor.url);
        if seen.contains(&canonical) {
            continue;
        }
        seen.push(canonical);
        links.push(anchor.url.clone());
    }

    links
}

/// Signals accumulated across every page of one site.
#[derive(Debug, Default)]
struct SiteSignals {
    emails: Vec<String>,
    phones: Vec<String>,
    linkedin: Option<String>,
    services: Vec<&'static str>,
    fleet: bool,
    api: bool,
}

impl SiteSignals {
    fn absorb(&mut self, page: PageSignals) {
        for email in page.emails {
            if !self.emails.contains(&email) {
                self.emails.push(email);
            }
        }
        for phone in page.phones {
            let digits = phone_digits(&phone);
            if !self.phones.iter().any(|p| phone_digits(p) == digits) {
                self.phones.push(phone);
            }
        }
        if self.linkedin.is_none() {
            self.linkedin = page.linkedin;
        }
        for service in page.services {
            if !self.services.contains(&service) {
                self.services.push(service);
            }
        }
        self.fleet |= page.fleet;
        self.api |= page.api;
    }

    fn apply(self, mut lead: Lead) -> Lead {
        for email in &self.emails {
            lead.add_email(email);
        }
        if lead.phone.is_empty() {
            if let Some(phone) = self.phones.into_iter().next() {
                lead.phone = phone;
            }
        }
        if lead.linkedin.is_empty() {
            if let Some(linkedin) = self.linkedin {
                lead.linkedin = linkedin;
            }
        }
        for service in self.services {
            lead.add_service(service);
        }

        let mut signals = Vec::new();
        if self.fleet {
            signals.push(FLEET_SIGNAL);
        }
        if self.api {
            signals.push(API_SIGNAL);
        }
        lead.prepend_signals(&signals);
        lead
    }
}

/// Enriches leads by crawling their websites through a shared fetcher.
pub struct Crawler<'a, F> {
    fetcher: &'a F,
    config: &'a PipelineConfig,
}

impl<'a, F: PageFetcher> Crawler<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a PipelineConfig) -> Self {
        Self { fetcher, config }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }

    /// Enrich `lead`, returning it unchanged on any failure.
    pub async fn enrich(&self, lead: Lead) -> Lead {
        match self.try_enrich(&lead).await {
            Ok(enriched) => enriched,
            Err(err) => {
                tracing::warn!(website = %lead.website, error = %err, "crawl failed, keeping lead as found");
                lead
            }
        }
    }

    /// Enrich `lead`, reporting a homepage failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Fetch`] if the homepage cannot be fetched.
    /// Contact page failures are logged and skipped.
    pub async fn try_enrich(&self, lead: &Lead) -> Result<Lead, LeadError> {
        if lead.website.is_empty() {
            return Ok(lead.clone());
        }

        let home = self.fetcher.fetch(&lead.website, self.timeout()).await?;
        let base = if home.final_url.is_empty() {
            lead.website.clone()
        } else {
            home.final_url
        };

        let (mut site, contact_links) = {
            let page = parse_page(&home.body, &base);
            let mut site = SiteSignals::default();
            site.absorb(PageSignals::from_page(&page, &home.body));
            (site, find_contact_links(&page, self.config.max_pages_to_crawl))
        };

        tracing::debug!(website = %lead.website, pages = contact_links.len(), "contact pages discovered");

        for link in contact_links {
            match self.fetcher.fetch(&link, self.timeout()).await {
                Ok(response) => {
                    let page = parse_page(&response.body, &link);
                    site.absorb(PageSignals::from_page(&page, &response.body));
                }
                Err(err) => {
                    tracing::debug!(url = %link, error = %err, "contact page skipped");
                }
            }
        }

        Ok(site.apply(lead.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, html: &str) -> PageContent {
        parse_page(html, url)
    }

    #[test]
    fn static_patterns_compile() {
        assert!(CONTACT_RE.is_some());
        assert!(LINKEDIN_RE.is_some());
        assert!(FLEET_RE.is_some());
        assert!(API_WORD_RE.is_some());
    }

    #[test]
    fn contact_links_same_domain_only() {
        let html = r#"<html><body>
            <a href="/contact-us">Contact Us</a>
            <a href="https://unrelated.com/contact">Partner contact</a>
        </body></html>"#;
        let links = find_contact_links(&page("https://acme-transfers.com/", html), 5);
        assert_eq!(links, vec!["https://acme-transfers.com/contact-us"]);
    }

    #[test]
    fn contact_links_match_text_or_href() {
        let html = r#"<html><body>
            <a href="/page-7">Get in touch</a>
            <a href="/impressum">Legal</a>
            <a href="/fleet">Our cars</a>
            <a href="https://www.acme.com/booking">Reserve</a>
        </body></html>"#;
        let links = find_contact_links(&page("https://acme.com/", html), 5);
        assert_eq!(
            links,
            vec![
                "https://acme.com/page-7",
                "https://acme.com/impressum",
                "https://www.acme.com/booking",
            ]
        );
    }

    #[test]
    fn contact_links_deduplicated_and_capped() {
        let html = r#"<html><body>
            <a href="/">About home</a>
            <a href="/contact">Contact</a>
            <a href="/contact/#form">Contact form</a>
            <a href="/about">About</a>
            <a href="/team">Team</a>
            <a href="/book">Book</a>
        </body></html>"#;
        let links = find_contact_links(&page("https://acme.com/", html), 2);
        assert_eq!(links, vec!["https://acme.com/contact", "https://acme.com/about"]);
    }

    #[test]
    fn linkedin_company_page_found() {
        let html = r#"<a href="https://www.linkedin.com/in/someone">Founder</a>
            <a href="https://uk.linkedin.com/company/acme-transfers/">LinkedIn</a>"#;
        assert_eq!(
            find_linkedin(&page("https://acme.com/", html)).as_deref(),
            Some("https://uk.linkedin.com/company/acme-transfers")
        );
    }

    #[test]
    fn services_detected_case_insensitively() {
        let found = detect_services("We offer AIRPORT TRANSFER, Chauffeur and Minibus hire.");
        assert_eq!(found, vec!["airport transfer", "chauffeur", "minibus"]);
    }

    #[test]
    fn fleet_patterns() {
        assert!(detect_fleet("A fleet of 25 Mercedes"));
        assert!(detect_fleet("We operate 12 vehicles"));
        assert!(detect_fleet("Discover our fleet"));
        assert!(!detect_fleet("Fast and friendly"));
    }

    #[test]
    fn api_keywords() {
        assert!(detect_api("Booking API for travel agents"));
        assert!(detect_api("B2B portal for partners"));
        assert!(detect_api("XML feed available"));
        assert!(!detect_api("Capital city rapid transfers"));
    }

    #[test]
    fn site_signals_apply_respects_existing_fields() {
        let lead = Lead {
            website: "https://acme.com/".into(),
            phone: "+44 20 7946 0000".into(),
            emails: vec!["sales@acme.com".into()],
            notes: "Airport taxi in London".into(),
            ..Default::default()
        };
        let mut site = SiteSignals::default();
        site.absorb(PageSignals {
            emails: vec!["info@acme.com".into(), "sales@acme.com".into()],
            phones: vec!["+44 20 7946 0958".into()],
            linkedin: Some("https://linkedin.com/company/acme".into()),
            services: vec!["taxi", "shuttle"],
            fleet: true,
            api: false,
        });
        let enriched = site.apply(lead);
        assert_eq!(enriched.phone, "+44 20 7946 0000");
        assert_eq!(enriched.emails, vec!["sales@acme.com", "info@acme.com"]);
        assert_eq!(enriched.linkedin, "https://linkedin.com/company/acme");
        assert_eq!(enriched.services, vec!["taxi", "shuttle"]);
        assert_eq!(enriched.notes, "Fleet mentioned on website | Airport taxi in London");
    }

    #[test]
    fn site_signals_dedupe_phones_by_digits() {
        let mut site = SiteSignals::default();
        site.absorb(PageSignals {
            phones: vec!["+33 123 456 789".into()],
            ..Default::default()
        });
        site.absorb(PageSignals {
            phones: vec!["+33-123-456-789".into(), "01 98 765 432".into()],
            ..Default::default()
        });
        assert_eq!(site.phones, vec!["+33 123 456 789", "01 98 765 432"]);
    }
}
