//! ULR (Unique Laboratory Report number) decoding.
//!
//! A ULR is an 18-character code: discipline (`TC`/`CC`/`RC`), 4-digit
//! certificate number, 2-digit year, 1-digit location node, 8 hex ledger
//! digits and a scope flag (`F`/`P`). Decoding is total: malformed input is
//! the [`Decoded::Invalid`] outcome, never an error.

mod grammar;
mod record;
mod types;

pub use grammar::ULR_LEN;
pub use record::UlrRecord;
pub use types::{Decoded, Discipline, ScopeFlag, ScopeStatus, UlrCode};

use std::fmt;
use std::str::FromStr;

/// Decodes a raw ULR string.
///
/// Leading/trailing whitespace and byte-order marks (U+FEFF) are trimmed and
/// ASCII letters are uppercased before the anchored grammar is applied.
///
/// # Examples
///
/// - `decode("TC123425000000001F")` → valid, ledger `"00000001"`, full scope
/// - `decode(" tc123425000000001f ")` → same as above
/// - `decode("XX123425000000001F")` → [`Decoded::Invalid`]
pub fn decode(raw: &str) -> Decoded {
    let normalized = raw
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_ascii_uppercase();
    match grammar::match_canonical(&normalized) {
        Some(code) => Decoded::Valid(code),
        None => Decoded::Invalid,
    }
}

/// Space-separated display form (`"TC 1234 25 0 00000001 F"`); empty for an
/// invalid result. Not parseable by [`decode`] until the spaces are removed.
pub fn format(decoded: &Decoded) -> String {
    match decoded {
        Decoded::Valid(code) => format_code(code),
        Decoded::Invalid => String::new(),
    }
}

/// Space-separated display form of a valid code.
pub fn format_code(code: &UlrCode) -> String {
    format!(
        "{} {} {} {} {} {}",
        code.discipline(),
        code.cert_number(),
        code.year(),
        code.location_node(),
        code.ledger(),
        code.scope()
    )
}

/// 18-character canonical form; empty for an invalid result.
pub fn canonical(decoded: &Decoded) -> String {
    decoded.as_code().map(UlrCode::to_string).unwrap_or_default()
}

/// Returned by [`UlrCode::from_str`] when the input is not a canonical ULR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidUlr;

impl fmt::Display for InvalidUlr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input does not match the ULR format")
    }
}

impl std::error::Error for InvalidUlr {}

impl FromStr for UlrCode {
    type Err = InvalidUlr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).into_code().ok_or(InvalidUlr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "TC123425000000001F";
    const PARTIAL: &str = "TC999925000000002P";

    fn valid(raw: &str) -> UlrCode {
        match decode(raw) {
            Decoded::Valid(code) => code,
            Decoded::Invalid => panic!("expected {raw:?} to decode"),
        }
    }

    #[test]
    fn decode_full_scope() {
        let code = valid(FULL);
        assert_eq!(code.discipline(), Discipline::Testing);
        assert_eq!(code.cert_number(), "1234");
        assert_eq!(code.year(), "25");
        assert_eq!(code.location_node(), "0");
        assert_eq!(code.ledger(), "00000001");
        assert_eq!(code.scope(), ScopeFlag::Full);
        assert!(!code.is_partial_scope());
    }

    #[test]
    fn decode_partial_scope() {
        let code = valid(PARTIAL);
        assert_eq!(code.cert_number(), "9999");
        assert_eq!(code.ledger(), "00000002");
        assert_eq!(code.scope(), ScopeFlag::Partial);
        assert_eq!(ScopeStatus::of(&decode(PARTIAL)), ScopeStatus::Partial);
    }

    #[test]
    fn decode_other_disciplines() {
        assert_eq!(valid("CC000124512345678F").discipline(), Discipline::Calibration);
        assert_eq!(valid("RC000124512345678P").discipline(), Discipline::Reference);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("tc123425000000001f"), decode(FULL));
        let code = valid("cc00012619abcdef0p");
        assert_eq!(code.ledger(), "9ABCDEF0");
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        assert_eq!(decode(&format!("  {FULL}  ")), decode(FULL));
        assert_eq!(decode(&format!("\t{FULL}\n")), decode(FULL));
    }

    #[test]
    fn decode_strips_byte_order_mark() {
        assert_eq!(decode(&format!("\u{FEFF}{FULL}")), decode(FULL));
        assert_eq!(decode(&format!("\u{FEFF} {FULL}\u{FEFF}")), decode(FULL));
        // Only at the ends.
        assert_eq!(decode("TC1234\u{FEFF}25000000001F"), Decoded::Invalid);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        for raw in [
            "",
            "   ",
            "XX123425000000001F",  // bad discipline
            "TC12342500000001F",   // 17 characters
            "TC1234250000000001F", // 19 characters
            "TC12A425000000001F",  // letter in certificate number
            "TC1234250000000G1F",  // non-hex ledger digit
            "TC123425000000001X",  // bad scope flag
            "TC1234 25000000001F", // embedded space
            "TC123425000000001F!", // trailing garbage
            "-TC123425000000001F", // leading garbage
            "TC１２３４25000000001F", // full-width digits
        ] {
            assert_eq!(decode(raw), Decoded::Invalid, "input {raw:?}");
            assert_eq!(format(&decode(raw)), "");
            assert_eq!(canonical(&decode(raw)), "");
        }
    }

    #[test]
    fn format_inserts_single_spaces() {
        assert_eq!(format(&decode(FULL)), "TC 1234 25 0 00000001 F");
        assert_eq!(format(&decode(PARTIAL)), "TC 9999 25 0 00000002 P");
    }

    #[test]
    fn format_without_spaces_decodes_back() {
        for raw in [FULL, PARTIAL, "rc000124512345678p", "CC0001261DEADBEEFF"] {
            let decoded = decode(raw);
            let joined: String = format(&decoded).split(' ').collect();
            assert_eq!(decode(&joined), decoded);
            assert_eq!(joined, canonical(&decoded));
        }
    }

    #[test]
    fn canonical_is_uppercase_and_fixed_width() {
        let c = canonical(&decode(" cc0001261deadbeeff "));
        assert_eq!(c, "CC0001261DEADBEEFF");
        assert_eq!(c.len(), ULR_LEN);
    }

    #[test]
    fn scope_status_labels() {
        assert_eq!(ScopeStatus::of(&decode(FULL)).label(), "Full Scope");
        assert_eq!(ScopeStatus::of(&decode(PARTIAL)).label(), "Partial Scope");
        assert_eq!(ScopeStatus::of(&decode("nope")).label(), "Invalid ULR Format");
    }

    #[test]
    fn from_str_rejects_invalid() {
        let code: UlrCode = FULL.parse().unwrap();
        assert_eq!(code.issue_year(), "2025");
        assert_eq!(code.discipline().label(), "Testing");
        assert_eq!("XX".parse::<UlrCode>(), Err(InvalidUlr));
    }
}
