//! Lab accreditation record as stored in the registry file.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One accredited lab entry. Dates are either TOML dates (`2026-06-15`) or
/// `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabRecord {
    pub lab_id: String,
    pub laboratory_name: String,
    /// Accreditation certificate number, e.g. `TC-5589`. Uppercased on load.
    pub cert_no: String,
    pub lab_type: String,
    #[serde(
        default,
        deserialize_with = "lab_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "lab_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_date: Option<NaiveDate>,
    /// Extension of `to_date`, when granted.
    #[serde(
        default,
        deserialize_with = "lab_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub extend_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl LabRecord {
    /// Date after which the accreditation no longer holds.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.extend_date.or(self.to_date)
    }

    pub(super) fn normalize(&mut self) {
        self.lab_id = self.lab_id.trim().to_string();
        self.laboratory_name = self.laboratory_name.trim().to_string();
        self.cert_no = self.cert_no.trim().to_uppercase();
        self.lab_type = self.lab_type.trim().to_string();
    }
}

/// Accepts a native TOML date or a `YYYY-MM-DD` string.
fn lab_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => s
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(D::Error::custom),
        toml::Value::Datetime(dt) => {
            let date = dt
                .date
                .ok_or_else(|| D::Error::custom(format!("expected a date, found time {dt}")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("date out of range: {dt}")))
        }
        other => Err(D::Error::custom(format!(
            "expected a date, found {}",
            other.type_str()
        ))),
    }
}
