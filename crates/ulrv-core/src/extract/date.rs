//! Issue-date parsing for extracted report text.

use chrono::NaiveDate;

/// Accepted layouts: `19/10/2024` and `19 OCT 2024`.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d %b %Y"];

/// Parses an issue date as printed on a report. Returns `None` for anything
/// that is not one of the accepted layouts or not a real calendar date.
pub fn parse_issue_date(text: &str) -> Option<NaiveDate> {
    let value = text.trim().to_uppercase();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn slash_layout_is_day_first() {
        assert_eq!(parse_issue_date("19/10/2024"), Some(ymd(2024, 10, 19)));
        assert_eq!(parse_issue_date(" 01/02/2025 "), Some(ymd(2025, 2, 1)));
    }

    #[test]
    fn month_name_layout() {
        assert_eq!(parse_issue_date("19 OCT 2024"), Some(ymd(2024, 10, 19)));
        assert_eq!(parse_issue_date("5 jan 2026"), Some(ymd(2026, 1, 5)));
    }

    #[test]
    fn rejects_other_input() {
        assert_eq!(parse_issue_date(""), None);
        assert_eq!(parse_issue_date("2024-10-19"), None);
        assert_eq!(parse_issue_date("31/02/2024"), None);
        assert_eq!(parse_issue_date("soon"), None);
    }
}
