//! Deterministic 0-100 lead scoring and ranking.
//!
//! | Signal                                   | Points |
//! |------------------------------------------|--------|
//! | at least one email                       | 25     |
//! | website                                  | 10     |
//! | phone                                    | 10     |
//! | airport-transfer mention                 | 15     |
//! | two or more services                     | 10     |
//! | LinkedIn page                            | 5      |
//! | fleet mention in notes                   | 10     |
//! | API/integration mention in notes         | 5      |
//! | airport proximity terms                  | 5      |
//! | company name                             | 5      |
//!
//! The airport-transfer and proximity signals overlap (both fire on
//! "airport"); the sum is clamped to 100.

use crate::types::Lead;

pub const EMAIL_POINTS: u32 = 25;
pub const WEBSITE_POINTS: u32 = 10;
pub const PHONE_POINTS: u32 = 10;
pub const AIRPORT_TRANSFER_POINTS: u32 = 15;
pub const MULTIPLE_SERVICES_POINTS: u32 = 10;
pub const LINKEDIN_POINTS: u32 = 5;
pub const FLEET_POINTS: u32 = 10;
pub const API_POINTS: u32 = 5;
pub const NEAR_AIRPORT_POINTS: u32 = 5;
pub const COMPANY_NAME_POINTS: u32 = 5;

pub const MAX_SCORE: u32 = 100;

/// Terms that indicate airport transfer work.
const AIRPORT_KEYWORDS: &[&str] = &[
    "airport transfer",
    "airport",
    "meet and greet",
    "flight",
    "terminal",
    "arrivals",
    "departures",
];

const PROXIMITY_KEYWORDS: &[&str] = &["airport", "terminal", "flight"];

/// Score a single lead. Always within `0..=100`.
pub fn score_lead(lead: &Lead) -> u32 {
    let notes = lead.notes.to_lowercase();
    let combined = format!("{} {notes}", lead.services.join(" ").to_lowercase());

    let signals = [
        (!lead.emails.is_empty(), EMAIL_POINTS),
        (!lead.website.is_empty(), WEBSITE_POINTS),
        (!lead.phone.is_empty(), PHONE_POINTS),
        (
            AIRPORT_KEYWORDS.iter().any(|kw| combined.contains(kw)),
            AIRPORT_TRANSFER_POINTS,
        ),
        (lead.services.len() >= 2, MULTIPLE_SERVICES_POINTS),
        (!lead.linkedin.is_empty(), LINKEDIN_POINTS),
        (notes.contains("fleet"), FLEET_POINTS),
        (
            notes.contains("api") || notes.contains("integration"),
            API_POINTS,
        ),
        (
            PROXIMITY_KEYWORDS.iter().any(|kw| combined.contains(kw)),
            NEAR_AIRPORT_POINTS,
        ),
        (!lead.company_name.is_empty(), COMPANY_NAME_POINTS),
    ];

    let total: u32 = signals
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();
    total.min(MAX_SCORE)
}

/// Score every lead and sort by score, highest first.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank_leads(mut leads: Vec<Lead>) -> Vec<Lead> {
    for lead in &mut leads {
        lead.score = score_lead(lead);
    }
    leads.sort_by(|a, b| b.score.cmp(&a.score));
    leads
}
