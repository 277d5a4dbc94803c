//! Log timestamps
//!
//! Rows are stamped with the Indonesian rendering of Jakarta local time
//! (`3/10/2025, 10.27.04`), which is what ends up in the sheet. Only the date
//! part is ever read back.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Asia/Jakarta is UTC+07:00 all year round
const JAKARTA_UTC_OFFSET_SECS: i32 = 7 * 3600;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("valid date pattern"));

fn jakarta() -> FixedOffset {
    FixedOffset::east_opt(JAKARTA_UTC_OFFSET_SECS).expect("offset within a day")
}

/// Render an instant the way `id-ID` / `Asia/Jakarta` locale formatting does
pub fn format_log_timestamp(at: DateTime<Utc>) -> String {
    jakarta()
        .from_utc_datetime(&at.naive_utc())
        .format("%-d/%-m/%Y, %H.%M.%S")
        .to_string()
}

/// Current wall-clock time as a log timestamp
pub fn now_log_timestamp() -> String {
    format_log_timestamp(Utc::now())
}

/// Extract the calendar date from a raw timestamp cell.
///
/// The first `D/M/YYYY` substring anywhere in the text wins; the rest of the
/// cell is ignored. Matches that are not real dates (`31/2/2025`) yield `None`:
/// out-of-range days are rejected, never rolled over into the following month,
/// so such a row counts as a visit but contributes no date.
pub fn parse_log_timestamp(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_PATTERN.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_uses_jakarta_time() {
        let at = Utc.with_ymd_and_hms(2025, 10, 3, 3, 27, 4).unwrap();
        assert_eq!(format_log_timestamp(at), "3/10/2025, 10.27.04");
    }

    #[test]
    fn test_format_crosses_midnight() {
        // 18:30 UTC is already the next day in Jakarta
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 18, 30, 0).unwrap();
        assert_eq!(format_log_timestamp(at), "1/1/2025, 01.30.00");
    }

    #[test]
    fn test_parse_locale_timestamp() {
        assert_eq!(parse_log_timestamp("3/10/2025, 10.27.04"), Some(date(2025, 10, 3)));
        assert_eq!(parse_log_timestamp("15/1/2024, 08.00.00"), Some(date(2024, 1, 15)));
        assert_eq!(parse_log_timestamp("09/09/2025"), Some(date(2025, 9, 9)));
    }

    #[test]
    fn test_parse_substring_anywhere() {
        assert_eq!(parse_log_timestamp("Jumat 3/10/2025 pagi"), Some(date(2025, 10, 3)));
        assert_eq!(parse_log_timestamp("123/4/2025"), Some(date(2025, 4, 23)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_log_timestamp(""), None);
        assert_eq!(parse_log_timestamp("2025-10-03T10:27:04Z"), None);
        assert_eq!(parse_log_timestamp("3/10/25"), None);
        assert_eq!(parse_log_timestamp("31/2/2025"), None);
        assert_eq!(parse_log_timestamp("0/10/2025"), None);
    }

    #[test]
    fn test_rendered_timestamp_parses_back() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(parse_log_timestamp(&format_log_timestamp(at)), Some(date(2025, 1, 5)));
    }
}
