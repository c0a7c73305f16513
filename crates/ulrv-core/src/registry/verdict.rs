//! Report verdicts: checking a report's claims against the lab registry.

use super::{LabRecord, Registry, RegistryError};
use crate::extract::{parse_issue_date, ExtractedFields};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// What a report says about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportClaim {
    pub certificate_no: Option<String>,
    pub ulr: Option<String>,
    pub lab_type: Option<String>,
    pub issue_date: Option<NaiveDate>,
}

impl From<&ExtractedFields> for ReportClaim {
    fn from(fields: &ExtractedFields) -> Self {
        ReportClaim {
            certificate_no: fields.certificate_no.clone(),
            ulr: fields.ulr.clone(),
            lab_type: fields.lab_type.map(|t| t.as_str().to_string()),
            issue_date: fields.issue_date.as_deref().and_then(parse_issue_date),
        }
    }
}

/// ULRs already recorded by the caller, used to flag duplicates.
/// Entries are compared trimmed and uppercased.
#[derive(Debug, Clone, Default)]
pub struct KnownUlrs(HashSet<String>);

impl KnownUlrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// One ULR per line; blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        let mut known = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                known.insert(line);
            }
        }
        known
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&text))
    }

    pub fn insert(&mut self, ulr: &str) -> bool {
        self.0.insert(normalize_ulr(ulr))
    }

    pub fn contains(&self, ulr: &str) -> bool {
        self.0.contains(&normalize_ulr(ulr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize_ulr(ulr: &str) -> String {
    ulr.trim().to_uppercase()
}

/// Outcome of verifying a report claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Valid,
    InvalidCertificate,
    DuplicateUlr,
    CertificateExpired,
    InvalidIssueDate,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::InvalidCertificate => "INVALID_CERTIFICATE",
            Verdict::DuplicateUlr => "DUPLICATE_ULR",
            Verdict::CertificateExpired => "CERTIFICATE_EXPIRED",
            Verdict::InvalidIssueDate => "INVALID_ISSUE_DATE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the registry entry it was decided against, if one matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification<'a> {
    pub lab: Option<&'a LabRecord>,
    pub verdict: Verdict,
}

impl<'a> Verification<'a> {
    fn new(lab: Option<&'a LabRecord>, verdict: Verdict) -> Self {
        Verification { lab, verdict }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }
}

impl Registry {
    /// Checks `claim` against the registry as of `today`.
    ///
    /// Rules are applied in order and the first failing one decides:
    /// unknown certificate, duplicate ULR, missing or passed expiry, then an
    /// issue date earlier than the lab's accreditation.
    pub fn verify<'a>(
        &'a self,
        claim: &ReportClaim,
        known: &KnownUlrs,
        today: NaiveDate,
    ) -> Verification<'a> {
        let verification = self.decide(claim, known, today);
        tracing::debug!(
            cert_no = claim.certificate_no.as_deref().unwrap_or("-"),
            verdict = %verification.verdict,
            "report verified"
        );
        verification
    }

    fn decide<'a>(
        &'a self,
        claim: &ReportClaim,
        known: &KnownUlrs,
        today: NaiveDate,
    ) -> Verification<'a> {
        let Some(cert_no) = claim.certificate_no.as_deref() else {
            return Verification::new(None, Verdict::InvalidCertificate);
        };
        let Some(lab) = self.find(cert_no, claim.lab_type.as_deref()) else {
            return Verification::new(None, Verdict::InvalidCertificate);
        };

        if claim.ulr.as_deref().is_some_and(|u| known.contains(u)) {
            return Verification::new(Some(lab), Verdict::DuplicateUlr);
        }

        let Some(expiry) = lab.expiry_date() else {
            return Verification::new(Some(lab), Verdict::InvalidCertificate);
        };
        if today > expiry {
            return Verification::new(Some(lab), Verdict::CertificateExpired);
        }

        if let (Some(issued), Some(accredited)) = (claim.issue_date, lab.issue_date) {
            if issued < accredited {
                return Verification::new(Some(lab), Verdict::InvalidIssueDate);
            }
        }

        Verification::new(Some(lab), Verdict::Valid)
    }
}
