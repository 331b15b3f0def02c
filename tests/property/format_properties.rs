// Property-based tests for formatting, masks and submission invariants
// Exercises the core guarantees with random inputs

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use rust_datepicker::adapter::{format_with, ChronoAdapter, DateAdapter};
use rust_datepicker::locale::Locale;
use rust_datepicker::models::config::{PickerOptions, RangeOptions, TimeConfig};
use rust_datepicker::models::granularity::Granularity;
use rust_datepicker::models::value::{RangeValue, ValueSource};
use rust_datepicker::picker::RangePicker;
use rust_datepicker::services::mask::MaskFormat;
use rust_datepicker::services::time_select::find_valid_time;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (
        1900..2100i32,
        1..=12u32,
        1..=28u32,
        0..24u32,
        0..60u32,
        0..60u32,
    )
        .prop_map(|(y, m, d, h, min, s)| dt(y, m, d, h, min, s))
}

fn any_format() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("YYYY-MM-DD"),
        Just("MM/DD/YYYY"),
        Just("DD.MM.YYYY HH:mm"),
        Just("YYYY-MM-DD HH:mm:ss"),
        Just("hh:mm A"),
        Just("HH:mm:ss.SSS"),
    ]
}

proptest! {
    /// Property: a value formatted with a parseable pattern parses back to
    /// the same value through the same pattern.
    #[test]
    fn prop_format_then_parse_round_trips(date in any_datetime()) {
        let adapter = ChronoAdapter;
        let locale = Locale::en_us();
        let fmt = "YYYY-MM-DD HH:mm:ss";
        let text = format_with(&adapter, &locale, &date, fmt);
        let parsed = adapter.parse(&locale, &text, &[fmt]);
        prop_assert_eq!(parsed, Some(date));
    }

    /// Property: mask cells partition both the normalized format and the
    /// rendered text with no gaps and no overlaps, and concatenating the
    /// cell texts reproduces the normalized format.
    #[test]
    fn prop_mask_cells_partition_the_text(fmt in any_format()) {
        let mask = MaskFormat::parse(fmt);
        let mut format_cursor = 0;
        let mut text_cursor = 0;
        let mut rebuilt = String::new();
        for cell in mask.cells() {
            prop_assert_eq!(cell.start, format_cursor);
            prop_assert_eq!(cell.text_start, text_cursor);
            prop_assert!(cell.text_end > cell.text_start);
            format_cursor = cell.end;
            text_cursor = cell.text_end;
            rebuilt.push_str(&cell.text);
        }
        prop_assert_eq!(rebuilt.as_str(), mask.format_str());
        prop_assert_eq!(text_cursor, mask.text_width());
        prop_assert_eq!(mask.template().chars().count(), mask.text_width());
    }

    /// Property: the template the mask produces is accepted by its own
    /// matcher, so a freshly opened editor is never flagged mismatched.
    #[test]
    fn prop_mask_accepts_its_own_template(fmt in any_format()) {
        let mask = MaskFormat::parse(fmt);
        prop_assert!(mask.match_text(&mask.template()));
    }

    /// Property: submitting a complete tuple through an ordered range
    /// picker always commits start before end, whichever way the
    /// endpoints arrived.
    #[test]
    fn prop_submission_orders_endpoints(a in any_datetime(), b in any_datetime()) {
        let options = RangeOptions::new(PickerOptions::new(
            Granularity::Date,
            Locale::en_us(),
        ));
        let mut picker = RangePicker::new(
            ChronoAdapter,
            options,
            ValueSource::Uncontrolled(None),
        );
        picker
            .trigger_submit(Some(RangeValue::new(Some(a), Some(b))))
            .unwrap();
        let value = picker.value();
        let (start, end) = (value.start().unwrap(), value.end().unwrap());
        prop_assert!(start.date() <= end.date());
    }

    /// Property: a predicate that disables every date makes every
    /// non-bypass submission fail, whatever the candidate.
    #[test]
    fn prop_all_disabled_rejects_every_submit(date in any_datetime()) {
        use rust_datepicker::picker::SinglePicker;
        let mut options = PickerOptions::new(Granularity::Date, Locale::en_us());
        options.disabled_date = Some(Box::new(|_, _| true));
        let mut picker = SinglePicker::new(
            ChronoAdapter,
            options,
            ValueSource::Uncontrolled(None),
        );
        prop_assert!(picker.trigger_submit(Some(Some(date))).is_err());
        prop_assert_eq!(picker.value(), None);
    }

    /// Property: snapping a value onto the enabled time grid is
    /// idempotent; a snapped value snaps to itself.
    #[test]
    fn prop_find_valid_time_is_idempotent(
        date in any_datetime(),
        disabled_hour in 0..24u32,
        minute_step in 1..=15u32,
    ) {
        let adapter = ChronoAdapter;
        let mut config = TimeConfig::default();
        config.minute_step = minute_step;
        config.legacy_disabled_hours = Some(vec![disabled_hour]);
        if let Some(once) = find_valid_time(&adapter, &config, &date) {
            let twice = find_valid_time(&adapter, &config, &once);
            prop_assert_eq!(twice, Some(once));
        }
    }
}
