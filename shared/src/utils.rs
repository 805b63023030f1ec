use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::constants::{API_PRODUCTS, ROOT_API};

const MONTHS: [&str; 12] = ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"];

pub fn api_path(endpoint: &str) -> String {
    format!("/{ROOT_API}/{endpoint}")
}

pub fn product_path(id: &str) -> String {
    format!("/{ROOT_API}/{API_PRODUCTS}/{id}")
}

/// A missing token still yields a header, with an empty credential.
pub fn bearer(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}

/// Renders an RFC 3339 timestamp as `18 oct 2026, 14:05` in the given
/// offset (minutes east of UTC). Anything unparseable is returned as is.
pub fn format_date(value: &str, offset_minutes: i32) -> String {
    let parsed = match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed,
        Err(_) => return value.to_string(),
    };
    let offset = FixedOffset::east_opt(offset_minutes * 60)
        .unwrap_or_else(|| *parsed.offset());
    let local = parsed.with_timezone(&offset);
    format!(
        "{} {} {}, {:02}:{:02}",
        local.day(),
        MONTHS[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(api_path("auth/login"), "/api/auth/login");
        assert_eq!(api_path(API_PRODUCTS), "/api/products");
        assert_eq!(product_path("abc123"), "/api/products/abc123");
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer(Some("tkn")), "Bearer tkn");
        assert_eq!(bearer(None), "Bearer ");
    }

    #[test]
    fn test_format_date_utc() {
        assert_eq!(format_date("2024-01-12T10:05:00Z", 0), "12 ene 2024, 10:05");
    }

    #[test]
    fn test_format_date_shifts_into_local_offset() {
        assert_eq!(format_date("2024-09-30T23:30:00Z", 120), "1 oct 2024, 01:30");
        assert_eq!(format_date("2024-03-01T00:15:00.250+00:00", -60), "29 feb 2024, 23:15");
    }

    #[test]
    fn test_format_date_keeps_unparseable_input() {
        assert_eq!(format_date("ayer", 0), "ayer");
        assert_eq!(format_date("", 0), "");
    }
}
