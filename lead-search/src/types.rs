//! Core records flowing through the pipeline: hits, leads, requests and
//! progress events.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::LeadError;
use crate::identity::registrable_domain;

/// Maximum number of email addresses kept on a single lead.
pub const MAX_EMAILS: usize = 5;

/// A raw organic result scraped from a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title as displayed by the engine.
    pub title: String,
    /// Destination URL, already unwrapped from any engine redirect.
    pub url: String,
    /// Text snippet under the result.
    pub snippet: String,
}

/// Supported search backends, declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// DuckDuckGo HTML endpoint. Most tolerant of automated requests.
    DuckDuckGo,
    /// Bing. Good coverage of local businesses.
    Bing,
    /// Google. Best index, most aggressive blocking.
    Google,
}

impl Backend {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
            Self::Google => "Google",
        }
    }

    /// Identifier stored in [`Lead::source`].
    pub fn source_id(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "duckduckgo_search",
            Self::Bing => "bing_search",
            Self::Google => "google_search",
        }
    }

    /// All backends, most reliable first.
    pub fn all() -> &'static [Backend] {
        &[Self::DuckDuckGo, Self::Bing, Self::Google]
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate business with contact and capability metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    /// Best-effort company name.
    pub company_name: String,
    /// Website URL as first observed.
    pub website: String,
    /// Lower-cased, unique, at most [`MAX_EMAILS`].
    pub emails: Vec<String>,
    /// First valid phone number found.
    pub phone: String,
    pub city: String,
    pub country: String,
    /// Detected service keywords, unique.
    pub services: Vec<String>,
    /// LinkedIn company page.
    pub linkedin: String,
    /// Ranking score in `0..=100`.
    pub score: u32,
    /// Free-text notes and detected signals.
    pub notes: String,
    /// Backend that produced the first sighting.
    pub source: String,
}

impl Lead {
    /// Key used to decide whether two leads describe the same company.
    ///
    /// The registrable domain of the website, else the lower-cased trimmed
    /// company name. `None` when neither is available.
    pub fn identity_key(&self) -> Option<String> {
        let domain = registrable_domain(&self.website);
        if !domain.is_empty() {
            return Some(domain);
        }
        let name = self.company_name.trim().to_lowercase();
        (!name.is_empty()).then_some(name)
    }

    /// `true` when every field is blank.
    pub fn is_empty(&self) -> bool {
        [
            &self.company_name,
            &self.website,
            &self.phone,
            &self.city,
            &self.country,
            &self.linkedin,
            &self.notes,
            &self.source,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
            && self.emails.is_empty()
            && self.services.is_empty()
            && self.score == 0
    }

    /// Adds an email, lower-casing it. Ignores duplicates (compared without
    /// regard to case) and anything past the cap. Returns `true` if the
    /// address was added.
    pub fn add_email(&mut self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        if email.is_empty()
            || self.emails.len() >= MAX_EMAILS
            || self.emails.iter().any(|e| e.eq_ignore_ascii_case(&email))
        {
            return false;
        }
        self.emails.push(email);
        true
    }

    /// Adds a service keyword if not already present.
    pub fn add_service(&mut self, service: &str) {
        if !self.services.iter().any(|s| s == service) {
            self.services.push(service.to_owned());
        }
    }

    /// Appends `note` after a `"; "` separator unless the text is already
    /// contained in the notes.
    pub fn append_note(&mut self, note: &str) {
        let note = note.trim();
        if note.is_empty() || self.notes.contains(note) {
            return;
        }
        if self.notes.is_empty() {
            self.notes = note.to_owned();
        } else {
            self.notes = format!("{}; {note}", self.notes);
        }
    }

    /// Places detected signal phrases in front of the existing notes.
    ///
    /// Phrases already present anywhere in the notes are skipped.
    pub fn prepend_signals(&mut self, phrases: &[&str]) {
        let fresh: Vec<&str> = phrases
            .iter()
            .copied()
            .filter(|p| !p.is_empty() && !self.notes.contains(p))
            .collect();
        if fresh.is_empty() {
            return;
        }
        let joined = fresh.join("; ");
        if self.notes.is_empty() {
            self.notes = joined;
        } else {
            self.notes = format!("{joined} | {}", self.notes);
        }
    }
}

/// Pipeline entry request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Country to search in. Required.
    pub country: String,
    /// Airport name, IATA code or free-form location. Required.
    #[serde(alias = "location")]
    pub airport: String,
    /// Optional city override.
    pub city: Option<String>,
    /// Keyword overrides; defaults are used when empty.
    pub keywords: Vec<String>,
}

impl SearchRequest {
    /// Creates a request for an airport in a country.
    pub fn new(country: impl Into<String>, airport: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            airport: airport.into(),
            ..Default::default()
        }
    }

    /// Rejects requests missing a country or airport/location.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.country.trim().is_empty() {
            return Err(LeadError::Validation("country is required".into()));
        }
        if self.airport.trim().is_empty() {
            return Err(LeadError::Validation(
                "airport or location is required".into(),
            ));
        }
        Ok(())
    }
}

/// Resolved location terms used to build search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    /// Airport display name, e.g. `"Paris Charles de Gaulle"`.
    pub airport: String,
    pub city: String,
    pub country: String,
}

impl LocationContext {
    /// `"<city> <country>"`, or just the city when no country is known.
    pub fn location(&self) -> String {
        format!("{} {}", self.city, self.country).trim().to_owned()
    }

    /// Label used on the final result, e.g. `"Paris Orly, Paris, France"`.
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.airport, self.city, self.country)
    }
}

/// Pipeline stage reported in progress events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Searching,
    Dedup,
    Crawling,
    Scoring,
    Exporting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Searching => "searching",
            Self::Dedup => "dedup",
            Self::Crawling => "crawling",
            Self::Scoring => "scoring",
            Self::Exporting => "exporting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Ephemeral status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: Stage,
    /// Human-readable description of what just happened.
    pub message: String,
    pub current: usize,
    pub total: usize,
    pub leads_found: usize,
}

impl ProgressEvent {
    pub(crate) fn new(stage: Stage, message: impl Into<String>, current: usize, total: usize) -> Self {
        Self {
            stage,
            message: message.into(),
            current,
            total,
            leads_found: 0,
        }
    }

    pub(crate) fn with_leads(mut self, leads_found: usize) -> Self {
        self.leads_found = leads_found;
        self
    }
}

/// Terminal pipeline output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultEvent {
    /// Query label, `"<airport>, <city>, <country>"`.
    pub query: String,
    pub total: usize,
    /// Scored leads, highest score first.
    pub leads: Vec<Lead>,
    pub export_csv_path: Option<PathBuf>,
    pub export_json_path: Option<PathBuf>,
}

/// One element of the streamed pipeline sequence.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    Progress(ProgressEvent),
    /// Always the last element.
    Result(ResultEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(website: &str, name: &str) -> Lead {
        Lead {
            website: website.into(),
            company_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn identity_key_prefers_registrable_domain() {
        let l = lead("https://www.acme-transfers.com/contact", "Acme");
        assert_eq!(l.identity_key().as_deref(), Some("acme-transfers.com"));
    }

    #[test]
    fn identity_key_falls_back_to_company_name() {
        let l = lead("", "  Acme Transfers ");
        assert_eq!(l.identity_key().as_deref(), Some("acme transfers"));
        let l = lead("not a url", "Acme");
        assert_eq!(l.identity_key().as_deref(), Some("acme"));
    }

    #[test]
    fn identity_key_none_without_website_or_name() {
        assert!(lead("", "   ").identity_key().is_none());
    }

    #[test]
    fn add_email_lowercases_and_dedupes() {
        let mut l = Lead::default();
        assert!(l.add_email("Info@Acme.com"));
        assert!(!l.add_email("info@acme.com"));
        assert_eq!(l.emails, vec!["info@acme.com"]);
    }

    #[test]
    fn add_email_ignores_case_of_stored_addresses() {
        let mut l = Lead {
            emails: vec!["Info@Acme.com".into()],
            ..Default::default()
        };
        assert!(!l.add_email("info@acme.com"));
        assert!(!l.add_email("INFO@ACME.COM"));
        assert_eq!(l.emails.len(), 1);
    }

    #[test]
    fn is_empty_only_when_every_field_blank() {
        assert!(Lead::default().is_empty());
        assert!(Lead { city: "  ".into(), ..Default::default() }.is_empty());
        assert!(!Lead { phone: "+44 20 7946 0958".into(), ..Default::default() }.is_empty());
        assert!(!Lead { emails: vec!["a@b.com".into()], ..Default::default() }.is_empty());
    }

    #[test]
    fn add_email_caps_at_five() {
        let mut l = Lead::default();
        for i in 0..8 {
            l.add_email(&format!("user{i}@acme.com"));
        }
        assert_eq!(l.emails.len(), MAX_EMAILS);
        assert_eq!(l.emails[4], "user4@acme.com");
    }

    #[test]
    fn append_note_skips_contained_text() {
        let mut l = Lead::default();
        l.append_note("Airport taxi in Paris");
        l.append_note("taxi in Paris");
        l.append_note("Open 24/7");
        assert_eq!(l.notes, "Airport taxi in Paris; Open 24/7");
    }

    #[test]
    fn prepend_signals_goes_before_existing_notes() {
        let mut l = Lead {
            notes: "Snippet text".into(),
            ..Default::default()
        };
        l.prepend_signals(&["Fleet mentioned on website", "API/integration capability detected"]);
        assert_eq!(
            l.notes,
            "Fleet mentioned on website; API/integration capability detected | Snippet text"
        );
        l.prepend_signals(&["Fleet mentioned on website"]);
        assert!(l.notes.starts_with("Fleet mentioned on website; API"));
    }

    #[test]
    fn request_validation() {
        assert!(SearchRequest::new("France", "CDG").validate().is_ok());
        let err = SearchRequest::new(" ", "CDG").validate().unwrap_err();
        assert!(err.to_string().contains("country"));
        let err = SearchRequest::new("France", "").validate().unwrap_err();
        assert!(err.to_string().contains("airport"));
    }

    #[test]
    fn location_label_and_terms() {
        let ctx = LocationContext {
            airport: "Paris Charles de Gaulle".into(),
            city: "Paris".into(),
            country: "France".into(),
        };
        assert_eq!(ctx.location(), "Paris France");
        assert_eq!(ctx.label(), "Paris Charles de Gaulle, Paris, France");
    }

    #[test]
    fn backend_priority_order() {
        assert_eq!(
            Backend::all(),
            &[Backend::DuckDuckGo, Backend::Bing, Backend::Google]
        );
        assert!(Backend::DuckDuckGo < Backend::Google);
        assert_eq!(Backend::Bing.source_id(), "bing_search");
    }

    #[test]
    fn lead_serde_round_trip() {
        let l = Lead {
            company_name: "Acme".into(),
            emails: vec!["info@acme.com".into()],
            score: 70,
            ..Default::default()
        };
        let json = serde_json::to_string(&l).expect("serialize");
        let decoded: Lead = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, l);
    }
}
