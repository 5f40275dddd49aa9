//! CSV and JSON export of ranked leads.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lead_search::{EXPORT_COLUMNS, ExportArtifacts, ExportRecord, Lead, LeadError, LeadExporter};

/// Writes `leads_<id>.csv` and `leads_<id>.json` into one directory.
///
/// The directory is created on first export. Both files of one export
/// share the same 8-hex-digit id.
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_csv(path: &Path, leads: &[Lead]) -> Result<(), LeadError> {
        let err = |e: csv::Error| LeadError::Export(format!("{}: {e}", path.display()));
        let mut writer = csv::Writer::from_path(path).map_err(err)?;
        writer.write_record(EXPORT_COLUMNS).map_err(err)?;
        for lead in leads {
            writer
                .write_record(ExportRecord::from(lead).values())
                .map_err(err)?;
        }
        writer
            .flush()
            .map_err(|e| LeadError::Export(format!("{}: {e}", path.display())))
    }

    fn write_json(path: &Path, leads: &[Lead]) -> Result<(), LeadError> {
        let io_err = |e: std::io::Error| LeadError::Export(format!("{}: {e}", path.display()));
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, leads)
            .map_err(|e| LeadError::Export(format!("{}: {e}", path.display())))?;
        writer.flush().map_err(io_err)
    }
}

impl LeadExporter for FileExporter {
    fn export(&self, leads: &[Lead]) -> Result<ExportArtifacts, LeadError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| LeadError::Export(format!("{}: {e}", self.dir.display())))?;

        let id = export_id();
        let csv_path = self.dir.join(format!("leads_{id}.csv"));
        let json_path = self.dir.join(format!("leads_{id}.json"));

        Self::write_csv(&csv_path, leads)?;
        Self::write_json(&json_path, leads)?;

        tracing::info!(
            leads = leads.len(),
            csv = %csv_path.display(),
            json = %json_path.display(),
            "leads exported"
        );
        Ok(ExportArtifacts {
            csv_path: Some(csv_path),
            json_path: Some(json_path),
        })
    }
}

/// First 8 hex digits of a random UUID.
fn export_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn leads() -> Vec<Lead> {
        vec![
            Lead {
                company_name: "Acme Transfers".into(),
                website: "https://acme-transfers.com/".into(),
                emails: vec!["info@acme-transfers.com".into(), "sales@acme-transfers.com".into()],
                phone: "+33 170 384 210".into(),
                city: "Paris".into(),
                country: "France".into(),
                services: vec!["airport transfer".into(), "chauffeur".into()],
                score: 85,
                notes: "Fleet mentioned on website | Meet, greet and \"VIP\" service".into(),
                ..Default::default()
            },
            Lead {
                company_name: "Blue Shuttle".into(),
                website: "https://blue-shuttle.fr/".into(),
                score: 20,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn writes_matching_csv_and_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let exporter = FileExporter::new(dir.path().join("out"));
        let artifacts = exporter.export(&leads()).expect("export");

        let csv_path = artifacts.csv_path.expect("csv path");
        let json_path = artifacts.json_path.expect("json path");
        let csv_name = csv_path.file_name().unwrap().to_string_lossy().into_owned();
        let json_name = json_path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(csv_name.starts_with("leads_") && csv_name.ends_with(".csv"));
        assert_eq!(csv_name.len(), "leads_".len() + 8 + ".csv".len());
        assert_eq!(
            csv_name.trim_end_matches(".csv"),
            json_name.trim_end_matches(".json")
        );

        let mut reader = csv::Reader::from_path(&csv_path).expect("read csv");
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, EXPORT_COLUMNS);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Acme Transfers");
        assert_eq!(&rows[0][2], "info@acme-transfers.com; sales@acme-transfers.com");
        assert_eq!(&rows[0][6], "airport transfer, chauffeur");
        assert_eq!(&rows[0][8], "85");
        assert_eq!(&rows[0][9], "Fleet mentioned on website | Meet, greet and \"VIP\" service");

        let json = std::fs::read_to_string(&json_path).expect("read json");
        let decoded: Vec<Lead> = serde_json::from_str(&json).expect("parse json");
        assert_eq!(decoded, leads());
    }

    #[test]
    fn empty_export_still_has_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifacts = FileExporter::new(dir.path()).export(&[]).expect("export");
        let csv = std::fs::read_to_string(artifacts.csv_path.unwrap()).unwrap();
        assert_eq!(csv.trim_end(), EXPORT_COLUMNS.join(","));
        let json = std::fs::read_to_string(artifacts.json_path.unwrap()).unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn unwritable_directory_is_export_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let err = FileExporter::new(blocker.join("sub")).export(&leads()).unwrap_err();
        assert!(matches!(err, LeadError::Export(_)));
    }

    #[test]
    fn export_ids_differ() {
        assert_ne!(export_id(), export_id());
        assert_eq!(export_id().len(), 8);
    }
}
