//! Flat export rows and the exporter seam.
//!
//! The pipeline hands its final ranked leads to a [`LeadExporter`]; how
//! they are written (CSV, JSON, a database) is up to the host.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::LeadError;
use crate::types::Lead;

/// Column headers in export order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "Company", "Website", "Email", "Phone", "City", "Country", "Services", "LinkedIn", "Score",
    "Notes",
];

/// One flat row per lead, fields in [`EXPORT_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Website")]
    pub website: String,
    /// Emails joined with `"; "`.
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Country")]
    pub country: String,
    /// Services joined with `", "`.
    #[serde(rename = "Services")]
    pub services: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "Score")]
    pub score: u32,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&Lead> for ExportRecord {
    fn from(lead: &Lead) -> Self {
        Self {
            company: lead.company_name.clone(),
            website: lead.website.clone(),
            email: lead.emails.join("; "),
            phone: lead.phone.clone(),
            city: lead.city.clone(),
            country: lead.country.clone(),
            services: lead.services.join(", "),
            linkedin: lead.linkedin.clone(),
            score: lead.score,
            notes: lead.notes.clone(),
        }
    }
}

impl ExportRecord {
    /// Values in [`EXPORT_COLUMNS`] order.
    pub fn values(&self) -> [String; 10] {
        [
            self.company.clone(),
            self.website.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.city.clone(),
            self.country.clone(),
            self.services.clone(),
            self.linkedin.clone(),
            self.score.to_string(),
            self.notes.clone(),
        ]
    }
}

/// Flatten leads into export rows, keeping order.
pub fn export_records(leads: &[Lead]) -> Vec<ExportRecord> {
    leads.iter().map(ExportRecord::from).collect()
}

/// Where an export landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportArtifacts {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

/// Writes the final lead set somewhere durable.
pub trait LeadExporter: Send + Sync {
    /// Persist `leads`, already ranked.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Export`] when writing fails. The pipeline logs
    /// the error and reports no artifact paths.
    fn export(&self, leads: &[Lead]) -> Result<ExportArtifacts, LeadError>;
}

/// Exporter that writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExporter;

impl LeadExporter for NoopExporter {
    fn export(&self, _leads: &[Lead]) -> Result<ExportArtifacts, LeadError> {
        Ok(ExportArtifacts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_flattens_lists() {
        let lead = Lead {
            company_name: "Acme".into(),
            emails: vec!["info@acme.com".into(), "sales@acme.com".into()],
            services: vec!["taxi".into(), "shuttle".into()],
            score: 70,
            ..Default::default()
        };
        let record = ExportRecord::from(&lead);
        assert_eq!(record.email, "info@acme.com; sales@acme.com");
        assert_eq!(record.services, "taxi, shuttle");
        assert_eq!(record.values()[8], "70");
    }

    #[test]
    fn serialized_keys_follow_column_order() {
        let record = ExportRecord::from(&Lead::default());
        let json = serde_json::to_string(&record).expect("serialize");
        let mut last = 0;
        for column in EXPORT_COLUMNS {
            let pos = json
                .find(&format!("\"{column}\""))
                .unwrap_or_else(|| panic!("missing column {column}"));
            assert!(pos >= last, "{column} out of order");
            last = pos;
        }
    }

    #[test]
    fn noop_exporter_reports_no_paths() {
        let artifacts = NoopExporter.export(&[Lead::default()]).expect("noop");
        assert_eq!(artifacts, ExportArtifacts::default());
    }
}
