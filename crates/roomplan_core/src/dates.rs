//! Date helpers for contribution tracking
//!
//! Thin wrappers over `jiff::civil::Date`. The string-edge functions accept
//! whatever a form field might contain and substitute an empty/zero/false
//! result for garbage instead of failing — parse at the edge with
//! [`parse_date`] when the caller needs to distinguish.

use jiff::civil::Date;

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Option<Date> {
    s.trim().parse().ok()
}

/// Format a date string for display (en-CA locale, `YYYY-MM-DD`).
///
/// Invalid or empty input yields an empty string. Never panics.
pub fn format_date(s: &str) -> String {
    parse_date(s).map(|d| d.to_string()).unwrap_or_default()
}

/// Whole years of age at `today` for someone born on `date_of_birth`,
/// decremented by one when today's month/day precedes the birth month/day.
/// Floored at zero.
#[inline]
pub fn age_on(date_of_birth: Date, today: Date) -> i16 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age.max(0)
}

/// Age today from a date-of-birth string; invalid input yields 0.
pub fn calculate_age(date_of_birth: &str) -> i16 {
    match parse_date(date_of_birth) {
        Some(dob) => age_on(dob, jiff::Zoned::now().date()),
        None => 0,
    }
}

/// True iff `date` falls in the first RRSP contribution period of its
/// calendar year, i.e. before March 1.
///
/// The CRA first-60-days attribution rule simplified to a fixed cutoff,
/// regardless of leap years or weekend adjustments.
#[inline]
pub fn in_first_contribution_period(date: Date) -> bool {
    date < jiff::civil::date(date.year(), 3, 1)
}

/// String edge of [`in_first_contribution_period`]; invalid input is false.
pub fn first_contribution_period(s: &str) -> bool {
    parse_date(s).is_some_and(in_first_contribution_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-15"), Some(date(2024, 2, 15)));
        assert_eq!(parse_date(" 2024-02-15 "), Some(date(2024, 2, 15)));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-02-15"), "2024-02-15");
        assert_eq!(format_date("garbage"), "");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_age_on_before_birthday() {
        let dob = date(2000, 6, 15);
        assert_eq!(age_on(dob, date(2024, 6, 14)), 23);
        assert_eq!(age_on(dob, date(2024, 6, 15)), 24);
        assert_eq!(age_on(dob, date(2024, 6, 16)), 24);
    }

    #[test]
    fn test_age_on_month_boundary() {
        let dob = date(2000, 6, 15);
        assert_eq!(age_on(dob, date(2024, 5, 31)), 23);
        assert_eq!(age_on(dob, date(2024, 7, 1)), 24);
    }

    #[test]
    fn test_age_floored_at_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_calculate_age_invalid() {
        assert_eq!(calculate_age("nonsense"), 0);
        assert_eq!(calculate_age(""), 0);
    }

    #[test]
    fn test_first_contribution_period() {
        assert!(first_contribution_period("2024-02-15"));
        assert!(first_contribution_period("2024-01-01"));
        assert!(!first_contribution_period("2024-03-01"));
        assert!(!first_contribution_period("2024-03-15"));
        assert!(!first_contribution_period("2024-12-31"));
    }

    #[test]
    fn test_first_contribution_period_leap_year() {
        // Feb 29 still counts; the cutoff is March 1 regardless of leap year
        assert!(first_contribution_period("2024-02-29"));
    }

    #[test]
    fn test_first_contribution_period_invalid() {
        assert!(!first_contribution_period("not a date"));
        assert!(!first_contribution_period(""));
    }
}
