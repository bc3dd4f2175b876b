use chrono::{Months, NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::BOOKING_WINDOW_MONTHS;

lazy_static! {
    /// Regex for the 24-hour clock format used on the wire ("HH:mm")
    /// - Valid: "09:00", "14:30", "23:59"
    /// - Invalid: "9:00", "24:00", "10:60", "10:00:00"
    pub static ref TIME_REGEX: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
}

/// Parse a calendar date in the wire format `YYYY-MM-DD`
pub fn parse_booking_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a time-of-day in the wire format `HH:mm`
pub fn parse_booking_time(value: &str) -> Option<NaiveTime> {
    if !TIME_REGEX.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Latest bookable date given today's date.
///
/// Adding months clamps to the last day of the target month when the same
/// day-of-month does not exist (e.g. Nov 30 + 3 months = Feb 28/29).
pub fn booking_window_end(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(BOOKING_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `date` lies within `[today, today + BOOKING_WINDOW_MONTHS]`
pub fn is_within_booking_window(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date <= booking_window_end(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_time_regex_valid() {
        assert!(TIME_REGEX.is_match("09:00"));
        assert!(TIME_REGEX.is_match("14:30"));
        assert!(TIME_REGEX.is_match("00:00"));
        assert!(TIME_REGEX.is_match("23:59"));
    }

    #[test]
    fn test_time_regex_invalid() {
        assert!(!TIME_REGEX.is_match("9:00")); // missing leading zero
        assert!(!TIME_REGEX.is_match("24:00")); // hour out of range
        assert!(!TIME_REGEX.is_match("10:60")); // minute out of range
        assert!(!TIME_REGEX.is_match("10:00:00")); // seconds not allowed
        assert!(!TIME_REGEX.is_match(""));
    }

    #[test]
    fn test_parse_booking_date() {
        assert_eq!(parse_booking_date("2025-06-15"), Some(d(2025, 6, 15)));
        assert_eq!(parse_booking_date("2025-02-30"), None);
        assert_eq!(parse_booking_date("15/06/2025"), None);
        assert_eq!(parse_booking_date(""), None);
    }

    #[test]
    fn test_parse_booking_time() {
        assert_eq!(
            parse_booking_time("10:00"),
            NaiveTime::from_hms_opt(10, 0, 0)
        );
        assert_eq!(parse_booking_time("10:00:00"), None);
        assert_eq!(parse_booking_time("25:00"), None);
    }

    #[test]
    fn test_booking_window_boundaries() {
        let today = d(2025, 6, 15);
        assert!(is_within_booking_window(today, today));
        assert!(is_within_booking_window(d(2025, 9, 15), today)); // exact end
        assert!(!is_within_booking_window(d(2025, 9, 16), today)); // one past end
        assert!(!is_within_booking_window(d(2025, 6, 14), today)); // yesterday
    }

    #[test]
    fn test_booking_window_end_clamps_to_month_end() {
        // Nov 30 + 3 months: Feb 30 does not exist, clamps to Feb 28
        assert_eq!(booking_window_end(d(2025, 11, 30)), d(2026, 2, 28));
        // Leap year target
        assert_eq!(booking_window_end(d(2027, 11, 30)), d(2028, 2, 29));
        // Dec 31 + 3 months = Mar 31 exists
        assert_eq!(booking_window_end(d(2025, 12, 31)), d(2026, 3, 31));
    }
}
