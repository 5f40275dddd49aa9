//! Lead deduplication by identity key.
//!
//! Leads sharing a registrable domain (or, without a website, a
//! normalised company name) collapse into the first one seen. The
//! survivor keeps its own values and only gains what it lacked.

use std::collections::HashMap;

use crate::types::Lead;

/// Merge leads that share an identity key, preserving first-seen order.
///
/// For a later lead with a known key:
/// - empty scalar fields of the survivor are filled from it,
/// - emails and services are unioned, survivor values first,
/// - its notes are appended unless already contained in the survivor's.
///
/// Survivor emails are lower-cased and deduplicated first, so addresses
/// differing only in case collapse into one.
///
/// Leads with neither a usable website nor a name have no identity: they
/// are kept as they are, in first-seen position, and never merged. Only
/// leads blank on every field are dropped.
pub fn merge_leads(leads: Vec<Lead>) -> Vec<Lead> {
    let mut merged: Vec<Lead> = Vec::with_capacity(leads.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for mut lead in leads {
        if lead.is_empty() {
            continue;
        }
        let Some(key) = lead.identity_key() else {
            tracing::debug!(phone = %lead.phone, "keeping lead without website or name unmerged");
            merged.push(lead);
            continue;
        };

        match index.get(&key) {
            Some(&slot) => absorb(&mut merged[slot], lead),
            None => {
                normalise_emails(&mut lead);
                index.insert(key, merged.len());
                merged.push(lead);
            }
        }
    }

    merged
}

/// Fold `incoming` into `survivor`.
fn absorb(survivor: &mut Lead, incoming: Lead) {
    fill(&mut survivor.company_name, incoming.company_name);
    fill(&mut survivor.website, incoming.website);
    fill(&mut survivor.phone, incoming.phone);
    fill(&mut survivor.linkedin, incoming.linkedin);
    fill(&mut survivor.city, incoming.city);
    fill(&mut survivor.country, incoming.country);
    fill(&mut survivor.source, incoming.source);

    for email in &incoming.emails {
        survivor.add_email(email);
    }
    for service in &incoming.services {
        survivor.add_service(service);
    }
    survivor.append_note(&incoming.notes);
}

fn normalise_emails(lead: &mut Lead) {
    for email in std::mem::take(&mut lead.emails) {
        lead.add_email(&email);
    }
}

fn fill(target: &mut String, value: String) {
    if target.is_empty() {
        *target = value;
    }
}
