//! Lab accreditation registry.
//!
//! A read-only list of accredited labs, loaded from a TOML file of `[[lab]]`
//! tables, against which report claims are verified.
//!
//! `issue_date`, `to_date` and `extend_date` may be native TOML dates
//! (`to_date = 2026-06-15`) or quoted `"YYYY-MM-DD"` strings.
//!
//! Lab types are compared case-insensitively in [`Registry::find`]. Report
//! text mentioning microbiology extracts as `Microbiological`, never
//! `Biological`, so registry rows for such labs need that type to match.

mod error;
mod record;
mod verdict;

pub use error::RegistryError;
pub use record::LabRecord;
pub use verdict::{KnownUlrs, ReportClaim, Verdict, Verification};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "lab")]
    labs: Vec<LabRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    labs: Vec<LabRecord>,
}

impl Registry {
    /// Builds a registry, keeping only the first row for each
    /// `(cert_no, lab_type)` pair.
    pub fn from_records(records: impl IntoIterator<Item = LabRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut labs = Vec::new();
        for mut rec in records {
            rec.normalize();
            if seen.insert((rec.cert_no.clone(), rec.lab_type.clone())) {
                labs.push(rec);
            }
        }
        Registry { labs }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(data)?;
        let total = file.labs.len();
        let registry = Self::from_records(file.labs);
        if registry.len() < total {
            tracing::debug!(
                dropped = total - registry.len(),
                "dropped duplicate registry rows"
            );
        }
        Ok(registry)
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let data = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&data)?;
        tracing::info!(
            "loaded {} labs from registry {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn labs(&self) -> &[LabRecord] {
        &self.labs
    }

    pub fn len(&self) -> usize {
        self.labs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }

    /// Lab for a certificate number, preferring one whose lab type matches
    /// (case-insensitively) and otherwise the first listed.
    pub fn find(&self, cert_no: &str, lab_type: Option<&str>) -> Option<&LabRecord> {
        let cert_no = cert_no.trim().to_uppercase();
        let mut candidates = self.labs.iter().filter(|l| l.cert_no == cert_no);
        let first = candidates.clone().next();
        lab_type
            .and_then(|t| candidates.find(|l| l.lab_type.eq_ignore_ascii_case(t.trim())))
            .or(first)
    }
}
