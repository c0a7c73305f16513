//! Field extraction from recognised report text.
//!
//! Input is plain text as produced by an upstream OCR step; this module only
//! looks for the certificate number, the ULR, the issue date and the lab type.
//! The extracted ULR is raw text and still has to go through
//! [`crate::ulr::decode`].

mod date;

pub use date::parse_issue_date;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static DASH_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("invalid dash pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

static CERT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2})[- ]?(\d{3,6})\b").expect("invalid certificate pattern")
});

static ULR_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bULR(?:\s*NO\.?)?[:\s-]*([A-Z0-9-]{8,})\b").expect("invalid ULR label pattern")
});

static DATE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"\b\d{2}/\d{2}/\d{4}\b").expect("invalid date pattern"),
        Regex::new(r"\b\d{2}\s+[A-Z]{3}\s+\d{4}\b").expect("invalid date pattern"),
    ]
});

/// Laboratory discipline named on a report.
///
/// Microbiology reports detect as [`LabType::Microbiological`] even though
/// the text also contains `BIOLOGICAL`; this value is what
/// [`crate::registry::Registry::find`] compares against the registry's
/// `lab_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabType {
    Testing,
    Calibration,
    Medical,
    Chemical,
    Biological,
    Microbiological,
}

impl LabType {
    pub fn as_str(self) -> &'static str {
        match self {
            LabType::Testing => "Testing",
            LabType::Calibration => "Calibration",
            LabType::Medical => "Medical",
            LabType::Chemical => "Chemical",
            LabType::Biological => "Biological",
            LabType::Microbiological => "Microbiological",
        }
    }

    /// First keyword found in already-uppercased text, in priority order.
    fn detect(upper: &str) -> Option<Self> {
        // MICROBIOLOGICAL must be tested before BIOLOGICAL, which it contains.
        const KEYWORDS: [(&str, LabType); 7] = [
            ("TESTING", LabType::Testing),
            ("CALIBRATION", LabType::Calibration),
            ("MEDICAL", LabType::Medical),
            ("CHEMICAL", LabType::Chemical),
            ("MICROBIOLOGICAL", LabType::Microbiological),
            ("MICROBIOLOGY", LabType::Microbiological),
            ("BIOLOGICAL", LabType::Biological),
        ];
        KEYWORDS
            .iter()
            .find(|(kw, _)| upper.contains(kw))
            .map(|(_, t)| *t)
    }
}

impl fmt::Display for LabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields found in a report's text. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Certificate number in `XX-NNNN` form.
    pub certificate_no: Option<String>,
    pub ulr: Option<String>,
    /// Issue date exactly as printed; see [`parse_issue_date`].
    pub issue_date: Option<String>,
    pub lab_type: Option<LabType>,
}

/// Uppercases, unifies dashes and collapses whitespace.
pub fn normalize_text(text: &str) -> String {
    let upper = text.to_uppercase().replace(['\u{2013}', '\u{2014}'], "-");
    let dashes = DASH_SPACING.replace_all(&upper, "-");
    WHITESPACE_RUN.replace_all(&dashes, " ").into_owned()
}

/// Extracts report fields from free text.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let clean = normalize_text(text);

    let certificate_no = CERT_PATTERN
        .captures(&clean)
        .map(|c| format!("{}-{}", &c[1], &c[2]));

    let ulr = labelled_ulr(&clean).or_else(|| {
        certificate_no
            .as_deref()
            .and_then(|cert| ulr_after_certificate(&clean, cert))
    });

    let issue_date = DATE_PATTERNS
        .iter()
        .find_map(|p| p.find(&clean))
        .map(|m| m.as_str().to_string());

    let fields = ExtractedFields {
        certificate_no,
        ulr,
        issue_date,
        lab_type: LabType::detect(&clean),
    };
    tracing::debug!(?fields, "extracted report fields");
    fields
}

fn labelled_ulr(clean: &str) -> Option<String> {
    ULR_LABEL_PATTERN
        .captures(clean)
        .map(|c| c[1].replace(' ', ""))
}

/// Unlabelled ULR: a word that starts with the certificate number (dash
/// removed) followed by at least eight alphanumerics.
fn ulr_after_certificate(clean: &str, certificate_no: &str) -> Option<String> {
    let prefix = regex::escape(&certificate_no.replace('-', ""));
    let pattern = Regex::new(&format!(r"\b{prefix}[A-Z0-9]{{8,}}\b")).ok()?;
    pattern.find(clean).map(|m| m.as_str().to_string())
}
