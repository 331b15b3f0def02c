// Chrono-backed date adapter
// The crate's shipped backend over NaiveDateTime (no timezone handling)

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::adapter::DateAdapter;
use crate::locale::Locale;
use crate::utils::format_token::{scan_token, to_strftime, FormatToken};

/// Stateless adapter over `chrono::NaiveDateTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoAdapter;

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn with_ymd(date: &NaiveDateTime, year: i32, month: u32, day: u32) -> NaiveDateTime {
    let month = month.clamp(1, 12);
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.and_time(date.time()))
        .unwrap_or(*date)
}

fn collect_tokens(fmt: &str) -> Vec<FormatToken> {
    let chars: Vec<char> = fmt.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if let Some((token, run)) = scan_token(&chars, pos) {
            tokens.push(token);
            pos += run;
        } else {
            pos += 1;
        }
    }
    tokens
}

/// Parse one candidate format, padding fields the format omits (a month
/// field without a day parses as the first of the month, a bare hour as
/// minute zero).
fn parse_one(text: &str, fmt: &str) -> Option<NaiveDateTime> {
    let tokens = collect_tokens(fmt);
    let has = |t: FormatToken| tokens.contains(&t);
    let has_date = has(FormatToken::Year) || has(FormatToken::Month) || has(FormatToken::DayOfMonth);
    let has_time = has(FormatToken::Hour24)
        || has(FormatToken::Hour12)
        || has(FormatToken::Minute)
        || has(FormatToken::Second)
        || has(FormatToken::Millisecond);
    if !has_date && !has_time {
        return None;
    }

    let mut strf = to_strftime(fmt);
    let mut text = text.to_string();
    if has_date {
        if !has(FormatToken::Year) {
            strf.push_str(" %Y");
            text.push_str(" 1970");
        }
        if !has(FormatToken::Month) {
            strf.push_str(" %m");
            text.push_str(" 1");
        }
        if !has(FormatToken::DayOfMonth) {
            strf.push_str(" %d");
            text.push_str(" 1");
        }
    }
    if has_time && !has(FormatToken::Minute) {
        strf.push_str(" %M");
        text.push_str(" 0");
    }

    match (has_date, has_time) {
        (true, true) => NaiveDateTime::parse_from_str(&text, &strf).ok(),
        (true, false) => NaiveDate::parse_from_str(&text, &strf)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0)),
        (false, _) => NaiveTime::parse_from_str(&text, &strf)
            .ok()
            .and_then(|t| NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| d.and_time(t))),
    }
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDateTime;

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    // NaiveDateTime cannot represent an out-of-range date, so structural
    // validity is inherent to the type.
    fn is_valid(&self, _date: &NaiveDateTime) -> bool {
        true
    }

    fn is_after(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a > b
    }

    fn get_week_day(&self, date: &NaiveDateTime) -> u32 {
        date.weekday().num_days_from_sunday()
    }

    fn get_year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn get_month(&self, date: &NaiveDateTime) -> u32 {
        date.month()
    }

    fn get_date(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn get_hour(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn get_minute(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn get_second(&self, date: &NaiveDateTime) -> u32 {
        date.second()
    }

    fn get_millisecond(&self, date: &NaiveDateTime) -> u32 {
        let ms = date.nanosecond() / 1_000_000;
        // leap second representation folds back into the last millisecond
        if ms >= 1000 {
            ms - 1000
        } else {
            ms
        }
    }

    fn add_year(&self, date: &NaiveDateTime, diff: i32) -> NaiveDateTime {
        self.set_year(date, date.year() + diff)
    }

    fn add_month(&self, date: &NaiveDateTime, diff: i32) -> NaiveDateTime {
        let total = date.year() * 12 + date.month0() as i32 + diff;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        with_ymd(date, year, month, date.day())
    }

    fn add_date(&self, date: &NaiveDateTime, diff: i64) -> NaiveDateTime {
        date.checked_add_signed(Duration::days(diff)).unwrap_or(*date)
    }

    fn set_year(&self, date: &NaiveDateTime, year: i32) -> NaiveDateTime {
        with_ymd(date, year, date.month(), date.day())
    }

    fn set_month(&self, date: &NaiveDateTime, month: u32) -> NaiveDateTime {
        with_ymd(date, date.year(), month, date.day())
    }

    fn set_date(&self, date: &NaiveDateTime, day: u32) -> NaiveDateTime {
        with_ymd(date, date.year(), date.month(), day)
    }

    fn set_hour(&self, date: &NaiveDateTime, hour: u32) -> NaiveDateTime {
        date.with_hour(hour.min(23)).unwrap_or(*date)
    }

    fn set_minute(&self, date: &NaiveDateTime, minute: u32) -> NaiveDateTime {
        date.with_minute(minute.min(59)).unwrap_or(*date)
    }

    fn set_second(&self, date: &NaiveDateTime, second: u32) -> NaiveDateTime {
        date.with_second(second.min(59)).unwrap_or(*date)
    }

    fn set_millisecond(&self, date: &NaiveDateTime, millisecond: u32) -> NaiveDateTime {
        date.with_nanosecond(millisecond.min(999) * 1_000_000)
            .unwrap_or(*date)
    }

    fn week_first_day(&self, locale: &Locale) -> u32 {
        locale.week_first_day % 7
    }

    /// Monday-first locales use ISO week numbering; otherwise the week
    /// containing January 1st is week 1, with weeks cut at the locale's
    /// first day.
    fn week_number(&self, locale: &Locale, date: &NaiveDateTime) -> u32 {
        let first = self.week_first_day(locale);
        if first == 1 {
            return date.iso_week().week();
        }
        let Some(jan1) = NaiveDate::from_ymd_opt(date.year(), 1, 1) else {
            return 1;
        };
        let offset = (7 + jan1.weekday().num_days_from_sunday() - first) % 7;
        (date.ordinal0() + offset) / 7 + 1
    }

    fn format(&self, _locale: &Locale, date: &NaiveDateTime, fmt: &str) -> String {
        date.format(&to_strftime(fmt)).to_string()
    }

    fn parse(&self, _locale: &Locale, text: &str, formats: &[&str]) -> Option<NaiveDateTime> {
        formats.iter().find_map(|fmt| parse_one(text, fmt))
    }

    fn short_week_days(&self, locale: &Locale) -> Option<Vec<String>> {
        if locale.short_week_days.is_empty() {
            None
        } else {
            Some(locale.short_week_days.clone())
        }
    }

    fn short_months(&self, locale: &Locale) -> Option<Vec<String>> {
        if locale.short_months.is_empty() {
            None
        } else {
            Some(locale.short_months.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{format_with, same_week, start_of_week};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn set_month_clamps_day() {
        let adapter = ChronoAdapter;
        let jan31 = dt(2026, 1, 31, 10, 0, 0);
        let feb = adapter.set_month(&jan31, 2);
        assert_eq!(adapter.get_month(&feb), 2);
        assert_eq!(adapter.get_date(&feb), 28);
        assert_eq!(adapter.get_hour(&feb), 10);
    }

    #[test]
    fn set_year_clamps_leap_day() {
        let adapter = ChronoAdapter;
        let leap = dt(2024, 2, 29, 0, 0, 0);
        let plain = adapter.set_year(&leap, 2025);
        assert_eq!(adapter.get_date(&plain), 28);
    }

    #[test_case(0, 13, 2027, 2; "forward across year")]
    #[test_case(0, -1, 2025, 12; "back across year")]
    #[test_case(0, 0, 2026, 1; "zero is identity")]
    fn add_month_arithmetic(_unused: i32, diff: i32, year: i32, month: u32) {
        let adapter = ChronoAdapter;
        let base = dt(2026, 1, 15, 0, 0, 0);
        let moved = adapter.add_month(&base, diff);
        assert_eq!(adapter.get_year(&moved), year);
        assert_eq!(adapter.get_month(&moved), month);
    }

    #[test]
    fn format_tokens_render() {
        let adapter = ChronoAdapter;
        let locale = Locale::default();
        let date = dt(2026, 8, 6, 14, 5, 9);
        assert_eq!(
            adapter.format(&locale, &date, "YYYY-MM-DD HH:mm:ss"),
            "2026-08-06 14:05:09"
        );
        assert_eq!(adapter.format(&locale, &date, "hh:mm A"), "02:05 PM");
    }

    #[test]
    fn parse_tries_each_format() {
        let adapter = ChronoAdapter;
        let locale = Locale::default();
        let parsed = adapter
            .parse(&locale, "06/08/2026", &["YYYY-MM-DD", "DD/MM/YYYY"])
            .unwrap();
        assert_eq!(parsed, dt(2026, 8, 6, 0, 0, 0));
        assert!(adapter.parse(&locale, "not a date", &["YYYY-MM-DD"]).is_none());
    }

    #[test]
    fn parse_pads_missing_fields() {
        let adapter = ChronoAdapter;
        let locale = Locale::default();
        let month = adapter.parse(&locale, "2026-03", &["YYYY-MM"]).unwrap();
        assert_eq!(month, dt(2026, 3, 1, 0, 0, 0));
        let year = adapter.parse(&locale, "2026", &["YYYY"]).unwrap();
        assert_eq!(year, dt(2026, 1, 1, 0, 0, 0));
        let time = adapter.parse(&locale, "13:45:30", &["HH:mm:ss"]).unwrap();
        assert_eq!(time.time(), NaiveTime::from_hms_opt(13, 45, 30).unwrap());
    }

    #[test]
    fn week_numbering_respects_first_day() {
        let adapter = ChronoAdapter;
        let sunday_first = Locale::en_us();
        let monday_first = Locale::en_gb();
        // 2026-01-01 is a Thursday
        let jan1 = dt(2026, 1, 1, 0, 0, 0);
        assert_eq!(adapter.week_number(&sunday_first, &jan1), 1);
        assert_eq!(adapter.week_number(&monday_first, &jan1), 1);
        // the following Sunday starts week 2 in a Sunday-first locale
        let jan4 = dt(2026, 1, 4, 0, 0, 0);
        assert_eq!(adapter.week_number(&sunday_first, &jan4), 2);
        assert_eq!(adapter.week_number(&monday_first, &jan4), 1);
    }

    #[test]
    fn week_equality_depends_on_locale() {
        let adapter = ChronoAdapter;
        let sunday_first = Locale::en_us();
        let monday_first = Locale::en_gb();
        // Sunday 2026-01-04 and Monday 2026-01-05
        let sun = dt(2026, 1, 4, 0, 0, 0);
        let mon = dt(2026, 1, 5, 0, 0, 0);
        assert!(same_week(&adapter, &sunday_first, &sun, &mon));
        assert!(!same_week(&adapter, &monday_first, &sun, &mon));
        let start = start_of_week(&adapter, &monday_first, &sun);
        assert_eq!(adapter.get_date(&start), 29);
    }

    #[test]
    fn quarter_and_week_placeholders_expand() {
        let adapter = ChronoAdapter;
        let locale = Locale::en_us();
        let date = dt(2026, 8, 6, 0, 0, 0);
        assert_eq!(format_with(&adapter, &locale, &date, "YYYY-QQ"), "2026-3");
        let week = adapter.week_number(&locale, &date);
        assert_eq!(
            format_with(&adapter, &locale, &date, "YYYY-ww"),
            format!("2026-{week:02}")
        );
    }
}
