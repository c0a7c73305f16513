//! `ulrv scan <path>` – extract report fields from recognised text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use ulrv_core::extract::{self, ExtractedFields};
use ulrv_core::ulr::{self, Decoded, ScopeStatus, UlrRecord};

use crate::cli::Outcome;

#[derive(Debug, Serialize)]
struct ScanReport {
    #[serde(flatten)]
    pub fields: ExtractedFields,
    /// Decoded form of `fields.ulr`, when a ULR was found.
    pub decoded_ulr: Option<UlrRecord>,
    pub scope_status: Option<&'static str>,
    #[serde(skip)]
    decoded: Option<Decoded>,
}

impl ScanReport {
    fn from_text(text: &str) -> Self {
        let fields = extract::extract_fields(text);
        let decoded = fields.ulr.as_deref().map(ulr::decode);
        ScanReport {
            decoded_ulr: decoded.as_ref().map(UlrRecord::from),
            scope_status: decoded.as_ref().map(|d| ScopeStatus::of(d).label()),
            fields,
            decoded,
        }
    }

    /// A ULR was found and it is canonical.
    fn has_valid_ulr(&self) -> bool {
        self.decoded_ulr.as_ref().is_some_and(|r| r.is_valid)
    }
}

pub(super) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read report text {}", path.display()))
}

pub fn run_scan(path: &Path, json: bool) -> Result<Outcome> {
    let report = ScanReport::from_text(&read_text(path)?);
    tracing::info!(path = %path.display(), ulr_valid = report.has_valid_ulr(), "scan");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let f = &report.fields;
        println!("Certificate No: {}", f.certificate_no.as_deref().unwrap_or("-"));
        println!("ULR:            {}", f.ulr.as_deref().unwrap_or("-"));
        if let Some(decoded) = &report.decoded {
            if decoded.is_valid() {
                println!("  Decoded:      {}", ulr::format(decoded));
            }
            println!("  Scope:        {}", report.scope_status.unwrap_or("-"));
        }
        println!("Issue Date:     {}", f.issue_date.as_deref().unwrap_or("-"));
        println!(
            "Lab Type:       {}",
            f.lab_type.map(|t| t.as_str()).unwrap_or("-")
        );
    }

    Ok(Outcome::from_accepted(report.has_valid_ulr()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scan_report_decodes_found_ulr() {
        let report = ScanReport::from_text("ULR No: cc000124512345678p Calibration");
        let rec = report.decoded_ulr.as_ref().unwrap();
        assert!(rec.is_valid);
        assert_eq!(rec.discipline, "CC");
        assert_eq!(report.scope_status, Some("Partial Scope"));
        assert!(report.has_valid_ulr());
    }

    #[test]
    fn scan_report_without_ulr() {
        let report = ScanReport::from_text("nothing here");
        assert!(report.decoded_ulr.is_none());
        assert!(!report.has_valid_ulr());
    }

    #[test]
    fn run_scan_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"Testing TC-5589\nULR: TC123425000000001F\n19/10/2024\n")
            .unwrap();
        f.flush().unwrap();
        assert_eq!(run_scan(f.path(), false).unwrap(), Outcome::Accepted);
        assert_eq!(run_scan(f.path(), true).unwrap(), Outcome::Accepted);
    }

    #[test]
    fn run_scan_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_scan(&dir.path().join("missing.txt"), false).is_err());
    }
}
