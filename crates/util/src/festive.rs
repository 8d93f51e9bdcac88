//! Calendar predicate for the header's New Year easter egg.

use chrono::{Datelike, NaiveDate};

/// True on the days the console arms its New Year celebration: January 1,
/// or February 9 through 24 (the Lunar New Year window).
pub fn is_new_year_window(date: NaiveDate) -> bool {
    match (date.month(), date.day()) {
        (1, 1) => true,
        (2, day) => (9..=24).contains(&day),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn new_years_day_is_festive() {
        assert!(is_new_year_window(date(2026, 1, 1)));
        assert!(!is_new_year_window(date(2026, 1, 2)));
    }

    #[test]
    fn lunar_window_boundaries() {
        assert!(!is_new_year_window(date(2026, 2, 8)));
        assert!(is_new_year_window(date(2026, 2, 9)));
        assert!(is_new_year_window(date(2026, 2, 24)));
        assert!(!is_new_year_window(date(2026, 2, 25)));
    }

    #[test]
    fn ordinary_days_are_not_festive() {
        assert!(!is_new_year_window(date(2026, 8, 5)));
        assert!(!is_new_year_window(date(2026, 12, 31)));
    }
}
