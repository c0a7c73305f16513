//! Typed fields of a decoded ULR.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accreditation discipline marker (first two characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// `TC`
    #[serde(rename = "TC")]
    Testing,
    /// `CC`
    #[serde(rename = "CC")]
    Calibration,
    /// `RC`
    #[serde(rename = "RC")]
    Reference,
}

impl Discipline {
    pub fn as_str(self) -> &'static str {
        match self {
            Discipline::Testing => "TC",
            Discipline::Calibration => "CC",
            Discipline::Reference => "RC",
        }
    }

    /// Human-readable discipline name.
    pub fn label(self) -> &'static str {
        match self {
            Discipline::Testing => "Testing",
            Discipline::Calibration => "Calibration",
            Discipline::Reference => "Reference",
        }
    }

    /// Matches an already-uppercased two-byte prefix.
    pub(super) fn from_prefix(prefix: &[u8]) -> Option<Self> {
        match prefix {
            b"TC" => Some(Discipline::Testing),
            b"CC" => Some(Discipline::Calibration),
            b"RC" => Some(Discipline::Reference),
            _ => None,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope flag (last character): full or partial accreditation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeFlag {
    #[serde(rename = "F")]
    Full,
    #[serde(rename = "P")]
    Partial,
}

impl ScopeFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeFlag::Full => "F",
            ScopeFlag::Partial => "P",
        }
    }

    pub(super) fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'F' => Some(ScopeFlag::Full),
            b'P' => Some(ScopeFlag::Partial),
            _ => None,
        }
    }
}

impl fmt::Display for ScopeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ULR that matched the canonical grammar.
///
/// Only produced by [`super::decode`], so every field is known to be in
/// canonical (uppercase, fixed-width) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UlrCode {
    pub(super) discipline: Discipline,
    pub(super) cert_number: String,
    pub(super) year: String,
    pub(super) location_node: String,
    pub(super) ledger: String,
    pub(super) scope: ScopeFlag,
}

impl UlrCode {
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Four-digit certificate number.
    pub fn cert_number(&self) -> &str {
        &self.cert_number
    }

    /// Last two digits of the issue year.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Issue year as shown to users (`20YY`).
    pub fn issue_year(&self) -> String {
        format!("20{}", self.year)
    }

    pub fn location_node(&self) -> &str {
        &self.location_node
    }

    /// Eight uppercase hex digits.
    pub fn ledger(&self) -> &str {
        &self.ledger
    }

    pub fn scope(&self) -> ScopeFlag {
        self.scope
    }

    pub fn is_partial_scope(&self) -> bool {
        self.scope == ScopeFlag::Partial
    }
}

/// Renders the 18-character canonical form.
impl fmt::Display for UlrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.discipline,
            self.cert_number,
            self.year,
            self.location_node,
            self.ledger,
            self.scope
        )
    }
}

/// Outcome of decoding: either a canonical ULR or the rejected variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decoded {
    Valid(UlrCode),
    Invalid,
}

impl Decoded {
    pub fn is_valid(&self) -> bool {
        matches!(self, Decoded::Valid(_))
    }

    pub fn as_code(&self) -> Option<&UlrCode> {
        match self {
            Decoded::Valid(code) => Some(code),
            Decoded::Invalid => None,
        }
    }

    pub fn into_code(self) -> Option<UlrCode> {
        match self {
            Decoded::Valid(code) => Some(code),
            Decoded::Invalid => None,
        }
    }
}

impl From<UlrCode> for Decoded {
    fn from(code: UlrCode) -> Self {
        Decoded::Valid(code)
    }
}

/// Scope classification surfaced to users, derived only from the decode result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeStatus {
    Full,
    Partial,
    Invalid,
}

impl ScopeStatus {
    pub fn of(decoded: &Decoded) -> Self {
        match decoded {
            Decoded::Valid(code) => match code.scope {
                ScopeFlag::Full => ScopeStatus::Full,
                ScopeFlag::Partial => ScopeStatus::Partial,
            },
            Decoded::Invalid => ScopeStatus::Invalid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScopeStatus::Full => "Full Scope",
            ScopeStatus::Partial => "Partial Scope",
            ScopeStatus::Invalid => "Invalid ULR Format",
        }
    }
}

impl fmt::Display for ScopeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
