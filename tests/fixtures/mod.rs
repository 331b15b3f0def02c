// Test fixtures - reusable test data
// Provides consistent dates and picker configurations across test files

use chrono::{NaiveDate, NaiveDateTime};
use rust_datepicker::locale::Locale;
use rust_datepicker::models::config::{PickerOptions, RangeOptions, TimeConfig};
use rust_datepicker::models::granularity::Granularity;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    /// Returns Aug 6, 2026 at midnight
    pub fn aug_6_2026() -> NaiveDateTime {
        at(2026, 8, 6, 0, 0)
    }

    /// Returns Aug 10, 2026 at midnight
    pub fn aug_10_2026() -> NaiveDateTime {
        at(2026, 8, 10, 0, 0)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29, 12, 0)
    }

    /// Returns Dec 31, 2026 at 23:59 (year boundary)
    pub fn new_years_eve_2026() -> NaiveDateTime {
        at(2026, 12, 31, 23, 59)
    }
}

/// Picker configurations used by more than one test
pub mod options {
    use super::*;

    pub fn date() -> PickerOptions<NaiveDateTime> {
        PickerOptions::new(Granularity::Date, Locale::en_us())
    }

    pub fn date_time() -> PickerOptions<NaiveDateTime> {
        let mut opts = date();
        opts.time = Some(TimeConfig::default());
        opts
    }

    pub fn date_range() -> RangeOptions<NaiveDateTime> {
        RangeOptions::new(date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn fixture_dates_are_valid() {
        assert_eq!(dates::aug_6_2026().year(), 2026);
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert_eq!(dates::new_years_eve_2026().hour(), 23);
    }

    #[test]
    fn fixture_options_resolve_confirmation() {
        assert!(!options::date().resolved_needs_confirm());
        assert!(options::date_time().resolved_needs_confirm());
        assert!(options::date_range().resolved_order());
    }
}
