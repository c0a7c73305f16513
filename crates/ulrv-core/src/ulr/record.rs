//! Flat record view of a decode result, for JSON output and storage layers.

use super::types::Decoded;
use serde::{Deserialize, Serialize};

/// Six string fields plus `isValid`. A rejected decode yields empty strings
/// in every field, never a partially populated record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UlrRecord {
    #[serde(rename = "type")]
    pub discipline: String,
    pub cert_number: String,
    pub year: String,
    pub location_node: String,
    pub ledger: String,
    pub scope_flag: String,
    pub is_valid: bool,
}

impl From<&Decoded> for UlrRecord {
    fn from(decoded: &Decoded) -> Self {
        match decoded {
            Decoded::Valid(code) => UlrRecord {
                discipline: code.discipline().as_str().to_string(),
                cert_number: code.cert_number().to_string(),
                year: code.year().to_string(),
                location_node: code.location_node().to_string(),
                ledger: code.ledger().to_string(),
                scope_flag: code.scope().as_str().to_string(),
                is_valid: true,
            },
            Decoded::Invalid => UlrRecord::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ulr::decode;

    #[test]
    fn valid_record_fields() {
        let rec = UlrRecord::from(&decode("rc00012630abcdef0p"));
        assert!(rec.is_valid);
        assert_eq!(rec.discipline, "RC");
        assert_eq!(rec.cert_number, "0001");
        assert_eq!(rec.year, "26");
        assert_eq!(rec.location_node, "3");
        assert_eq!(rec.ledger, "0ABCDEF0");
        assert_eq!(rec.scope_flag, "P");
    }

    #[test]
    fn invalid_record_is_all_empty() {
        let rec = UlrRecord::from(&decode("XX123425000000001F"));
        assert_eq!(rec, UlrRecord::default());
        assert!(!rec.is_valid);
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let rec = UlrRecord::from(&decode("TC123425000000001F"));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "TC");
        assert_eq!(json["certNumber"], "1234");
        assert_eq!(json["locationNode"], "0");
        assert_eq!(json["scopeFlag"], "F");
        assert_eq!(json["isValid"], true);
    }
}
