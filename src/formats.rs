//! Scalar format checks shared by the record and capability validators.
//!
//! Both checks are total: malformed input yields `false`, never an error.

use chrono::NaiveDate;
use url::Url;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true when `value` is a `YYYY-MM-DD` date naming a real calendar day.
///
/// The shape is checked byte by byte before parsing so chrono's leniency
/// around signs and padding never widens the accepted format. chrono rejects
/// impossible days (`2024-02-30`, month 13) instead of rolling them over.
pub fn is_valid_date(value: &str) -> bool {
    if !has_date_shape(value) {
        return false;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Returns true when `value` parses as an absolute `http` or `https` URL.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
