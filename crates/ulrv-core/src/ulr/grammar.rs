//! Fixed-width ULR grammar: `(TC|CC|RC) d{4} d{2} d [0-9A-F]{8} (F|P)`.

use super::types::{Discipline, ScopeFlag, UlrCode};
use std::ops::Range;

/// Total length of a canonical ULR.
pub const ULR_LEN: usize = 18;

const DISCIPLINE: Range<usize> = 0..2;
const CERT_NUMBER: Range<usize> = 2..6;
const YEAR: Range<usize> = 6..8;
const LOCATION_NODE: Range<usize> = 8..9;
const LEDGER: Range<usize> = 9..17;
const SCOPE_FLAG: usize = 17;

/// Matches an already-normalized (trimmed, uppercased) string against the
/// grammar. The whole input must match; there is no partial acceptance.
pub(super) fn match_canonical(normalized: &str) -> Option<UlrCode> {
    let bytes = normalized.as_bytes();
    if bytes.len() != ULR_LEN {
        return None;
    }

    let discipline = Discipline::from_prefix(&bytes[DISCIPLINE])?;
    if !all_digits(&bytes[CERT_NUMBER])
        || !all_digits(&bytes[YEAR])
        || !all_digits(&bytes[LOCATION_NODE])
    {
        return None;
    }
    if !bytes[LEDGER].iter().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return None;
    }
    let scope = ScopeFlag::from_byte(bytes[SCOPE_FLAG])?;

    // Every byte checked above is ASCII, so these ranges are char boundaries.
    Some(UlrCode {
        discipline,
        cert_number: normalized[CERT_NUMBER].to_string(),
        year: normalized[YEAR].to_string(),
        location_node: normalized[LOCATION_NODE].to_string(),
        ledger: normalized[LEDGER].to_string(),
        scope,
    })
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}
