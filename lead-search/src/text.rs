//! Contact extraction from free text: emails, phone numbers, company names.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").ok());

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.\-]?)?\(?\d{2,4}\)?[\s.\-]?\d{3,4}[\s.\-]?\d{3,4}").ok()
});

/// Trailing " - Site Name", " | Tagline" and similar title decorations.
static TITLE_SUFFIX_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*[-|–—·•:]\s.*$").ok());

/// Local-part prefixes of role or machine addresses that are never leads.
const EMAIL_BLOCKED_PREFIXES: &[&str] = &[
    "noreply",
    "no-reply",
    "no_reply",
    "donotreply",
    "mailer-daemon",
    "postmaster",
    "abuse",
    "spam",
    "webmaster",
    "hostmaster",
    "test",
    "example",
    "sentry",
    "wixpress",
];

/// Domains that show up in page source but never belong to a lead.
const EMAIL_BLOCKED_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "test.com",
    "sentry.io",
    "wixpress.com",
    "googleapis.com",
    "googleusercontent.com",
    "w3.org",
    "schema.org",
    "facebook.com",
    "twitter.com",
];

/// Asset extensions that look like TLDs in `logo@2x.png`-style names.
const ASSET_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 16;
const MAX_COMPANY_NAME_CHARS: usize = 200;

/// Returns `true` if an (already lower-cased) address passes the filters.
pub fn is_acceptable_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if EMAIL_BLOCKED_PREFIXES.iter().any(|p| local.starts_with(p)) {
        return false;
    }
    if EMAIL_BLOCKED_DOMAINS.contains(&domain) {
        return false;
    }
    !ASSET_EXTENSIONS.iter().any(|ext| domain.ends_with(ext))
}

/// Extract unique, lower-cased, non-blocked email addresses in order of
/// appearance.
pub fn extract_emails(text: &str) -> Vec<String> {
    let Some(re) = EMAIL_RE.as_ref() else {
        return Vec::new();
    };
    let mut found: Vec<String> = Vec::new();
    for m in re.find_iter(text) {
        let email = m.as_str().trim().trim_end_matches('.').to_lowercase();
        if found.contains(&email) || !is_acceptable_email(&email) {
            continue;
        }
        found.push(email);
    }
    found
}

/// Digits of a phone number, used for length checks and deduplication.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Extract phone numbers as written, unique by digit sequence.
///
/// Matches with fewer than 7 or more than 16 digits are discarded.
pub fn extract_phones(text: &str) -> Vec<String> {
    let Some(re) = PHONE_RE.as_ref() else {
        return Vec::new();
    };
    let mut seen: Vec<String> = Vec::new();
    let mut phones = Vec::new();
    for m in re.find_iter(text) {
        let digits = phone_digits(m.as_str());
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
            continue;
        }
        if seen.contains(&digits) {
            continue;
        }
        seen.push(digits);
        phones.push(m.as_str().trim().to_owned());
    }
    phones
}

/// Clean a search result title into a company name.
///
/// Strips trailing separators and whatever follows them, trims quotes and
/// punctuation, and caps the length.
pub fn clean_company_name(title: &str) -> String {
    let title = title.trim();
    let stripped = match TITLE_SUFFIX_RE.as_ref() {
        Some(re) => re.replace(title, ""),
        None => title.into(),
    };
    let trimmed = stripped.trim_matches(|c: char| c.is_whitespace() || "-|·•\"'".contains(c));
    truncate_chars(trimmed, MAX_COMPANY_NAME_CHARS)
}

/// First `max` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_owned(),
        None => text.to_owned(),
    }
}

/// Collapse runs of whitespace into single spaces.
pub fn normalise_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_patterns_compile() {
        assert!(EMAIL_RE.is_some());
        assert!(PHONE_RE.is_some());
        assert!(TITLE_SUFFIX_RE.is_some());
    }

    #[test]
    fn extracts_and_lowercases_emails() {
        let text = "Write to Bookings@Acme-Transfers.com or sales@acme-transfers.com.";
        assert_eq!(
            extract_emails(text),
            vec!["bookings@acme-transfers.com", "sales@acme-transfers.com"]
        );
    }

    #[test]
    fn email_duplicates_removed_case_insensitively() {
        let text = "info@acme.com INFO@ACME.COM Info@Acme.com";
        assert_eq!(extract_emails(text), vec!["info@acme.com"]);
    }

    #[test]
    fn blocked_prefixes_filtered() {
        let text = "noreply@acme.com postmaster@acme.com abuse@acme.com \
                    webmaster@acme.com no-reply@acme.com info@acme.com";
        assert_eq!(extract_emails(text), vec!["info@acme.com"]);
    }

    #[test]
    fn blocked_domains_filtered() {
        let text = "user@example.com abc123@sentry.io bob@w3.org hello@acme.fr";
        assert_eq!(extract_emails(text), vec!["hello@acme.fr"]);
    }

    #[test]
    fn asset_names_are_not_emails() {
        let text = r#"<img src="logo@2x.png"> <img src="hero@3x.webp"> info@acme.com"#;
        assert_eq!(extract_emails(text), vec!["info@acme.com"]);
    }

    #[test]
    fn finds_mailto_in_raw_html() {
        let html = r#"<a href="mailto:reservations@paris-vtc.fr">Email us</a>"#;
        assert_eq!(extract_emails(html), vec!["reservations@paris-vtc.fr"]);
    }

    #[test]
    fn extracts_international_phones() {
        let text = "Call +44 20 7946 0958 or (020) 7946-0958 today";
        let phones = extract_phones(text);
        assert_eq!(phones[0], "+44 20 7946 0958");
        assert!(phones.len() <= 2);
    }

    #[test]
    fn phone_digits_bounds() {
        assert!(extract_phones("ref 12 345").is_empty());
        let phones = extract_phones("Tel: 01 23 456 789");
        assert!(phones.iter().all(|p| {
            let n = phone_digits(p).len();
            (7..=16).contains(&n)
        }));
    }

    #[test]
    fn phones_deduplicated_by_digits() {
        let phones = extract_phones("+33 123 456 789 and +33-123-456-789");
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn clean_company_name_strips_suffix() {
        assert_eq!(
            clean_company_name("Acme Transfers - Airport Taxi Paris"),
            "Acme Transfers"
        );
        assert_eq!(clean_company_name("Blue Cars | Chauffeurs"), "Blue Cars");
        assert_eq!(clean_company_name("\"Royal Limo\" "), "Royal Limo");
        assert_eq!(clean_company_name(""), "");
    }

    #[test]
    fn clean_company_name_keeps_inner_hyphens() {
        assert_eq!(clean_company_name("Jean-Pierre VTC"), "Jean-Pierre VTC");
    }

    #[test]
    fn clean_company_name_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(clean_company_name(&long).chars().count(), 200);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 300), "short");
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(normalise_whitespace("  a \n\t b  c "), "a b c");
    }
}
