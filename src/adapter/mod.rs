// Date adapter contract
// The pickers never touch a concrete date library; everything goes through
// this trait so alternative backends can be plugged in

pub mod chrono_adapter;

pub use chrono_adapter::ChronoAdapter;

use crate::locale::Locale;
use crate::models::granularity::Granularity;
use crate::utils::format_token::{scan_token, FormatToken};

/// Arithmetic, comparison and text conversion over an opaque date type.
///
/// Conventions every implementation must follow: months are 1-based,
/// week days are 0-based with 0 = Sunday, and the `set_*` family clamps
/// out-of-range day-of-month values instead of failing (setting January 31
/// to February yields February 28/29).
pub trait DateAdapter {
    type Date: Clone + PartialEq + std::fmt::Debug;

    fn now(&self) -> Self::Date;
    /// Structural validity of the value itself, independent of any picker
    /// configuration. A structurally invalid date is rejected everywhere.
    fn is_valid(&self, date: &Self::Date) -> bool;
    /// Strict ordering: `a` is later than `b`.
    fn is_after(&self, a: &Self::Date, b: &Self::Date) -> bool;

    fn get_week_day(&self, date: &Self::Date) -> u32;
    fn get_year(&self, date: &Self::Date) -> i32;
    fn get_month(&self, date: &Self::Date) -> u32;
    fn get_date(&self, date: &Self::Date) -> u32;
    fn get_hour(&self, date: &Self::Date) -> u32;
    fn get_minute(&self, date: &Self::Date) -> u32;
    fn get_second(&self, date: &Self::Date) -> u32;
    fn get_millisecond(&self, date: &Self::Date) -> u32;

    fn add_year(&self, date: &Self::Date, diff: i32) -> Self::Date;
    fn add_month(&self, date: &Self::Date, diff: i32) -> Self::Date;
    fn add_date(&self, date: &Self::Date, diff: i64) -> Self::Date;

    fn set_year(&self, date: &Self::Date, year: i32) -> Self::Date;
    fn set_month(&self, date: &Self::Date, month: u32) -> Self::Date;
    fn set_date(&self, date: &Self::Date, day: u32) -> Self::Date;
    fn set_hour(&self, date: &Self::Date, hour: u32) -> Self::Date;
    fn set_minute(&self, date: &Self::Date, minute: u32) -> Self::Date;
    fn set_second(&self, date: &Self::Date, second: u32) -> Self::Date;
    fn set_millisecond(&self, date: &Self::Date, millisecond: u32) -> Self::Date;

    /// First day of the week for the locale, 0 = Sunday.
    fn week_first_day(&self, locale: &Locale) -> u32;
    fn week_number(&self, locale: &Locale, date: &Self::Date) -> u32;
    fn format(&self, locale: &Locale, date: &Self::Date, fmt: &str) -> String;
    /// Try each format in order; the first that matches the whole text wins.
    fn parse(&self, locale: &Locale, text: &str, formats: &[&str]) -> Option<Self::Date>;

    fn short_week_days(&self, locale: &Locale) -> Option<Vec<String>> {
        let _ = locale;
        None
    }

    fn short_months(&self, locale: &Locale) -> Option<Vec<String>> {
        let _ = locale;
        None
    }
}

/// The first day of the week containing `date` under the locale's rule.
pub fn start_of_week<A: DateAdapter>(adapter: &A, locale: &Locale, date: &A::Date) -> A::Date {
    let first = adapter.week_first_day(locale);
    let back = (7 + adapter.get_week_day(date) - first) % 7;
    adapter.add_date(date, -(back as i64))
}

pub fn quarter_of<A: DateAdapter>(adapter: &A, date: &A::Date) -> u32 {
    (adapter.get_month(date) - 1) / 3 + 1
}

pub fn same_year<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    adapter.get_year(a) == adapter.get_year(b)
}

pub fn same_month<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    same_year(adapter, a, b) && adapter.get_month(a) == adapter.get_month(b)
}

pub fn same_date<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    same_month(adapter, a, b) && adapter.get_date(a) == adapter.get_date(b)
}

pub fn same_quarter<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    same_year(adapter, a, b) && quarter_of(adapter, a) == quarter_of(adapter, b)
}

pub fn same_week<A: DateAdapter>(adapter: &A, locale: &Locale, a: &A::Date, b: &A::Date) -> bool {
    same_date(
        adapter,
        &start_of_week(adapter, locale, a),
        &start_of_week(adapter, locale, b),
    )
}

pub fn same_time<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    adapter.get_hour(a) == adapter.get_hour(b)
        && adapter.get_minute(a) == adapter.get_minute(b)
        && adapter.get_second(a) == adapter.get_second(b)
        && adapter.get_millisecond(a) == adapter.get_millisecond(b)
}

pub fn same_decade<A: DateAdapter>(adapter: &A, a: &A::Date, b: &A::Date) -> bool {
    adapter.get_year(a).div_euclid(10) == adapter.get_year(b).div_euclid(10)
}

/// Equality at the precision of one panel cell. This is the comparison the
/// pickers use for change detection and for matching a click back to the
/// current value; identity of the underlying representation never matters.
pub fn same_cell<A: DateAdapter>(
    adapter: &A,
    locale: &Locale,
    granularity: Granularity,
    a: &A::Date,
    b: &A::Date,
) -> bool {
    match granularity {
        Granularity::Time => same_time(adapter, a, b),
        Granularity::Date => same_date(adapter, a, b),
        Granularity::Week => same_week(adapter, locale, a, b),
        Granularity::Month => same_month(adapter, a, b),
        Granularity::Quarter => same_quarter(adapter, a, b),
        Granularity::Year => same_year(adapter, a, b),
        Granularity::Decade => same_decade(adapter, a, b),
    }
}

/// Strict "later than" at cell precision. Two dates in the same cell are
/// never after one another; for bare times only the time of day counts.
pub fn is_after_at<A: DateAdapter>(
    adapter: &A,
    locale: &Locale,
    granularity: Granularity,
    a: &A::Date,
    b: &A::Date,
) -> bool {
    if same_cell(adapter, locale, granularity, a, b) {
        return false;
    }
    if granularity == Granularity::Time {
        let key = |d: &A::Date| {
            (
                adapter.get_hour(d),
                adapter.get_minute(d),
                adapter.get_second(d),
                adapter.get_millisecond(d),
            )
        };
        return key(a) > key(b);
    }
    adapter.is_after(a, b)
}

/// Expand quarter (`Q`) and week (`w`) placeholder runs, which are panel
/// concepts the date backend does not know about, then delegate the rest of
/// the format string to the adapter.
pub fn format_with<A: DateAdapter>(
    adapter: &A,
    locale: &Locale,
    date: &A::Date,
    fmt: &str,
) -> String {
    let chars: Vec<char> = fmt.chars().collect();
    let mut expanded = String::with_capacity(fmt.len());
    let mut pos = 0;
    while pos < chars.len() {
        match chars[pos] {
            'Q' => {
                let run = chars[pos..].iter().take_while(|&&c| c == 'Q').count();
                expanded.push_str(&quarter_of(adapter, date).to_string());
                pos += run;
            }
            'w' => {
                let run = chars[pos..].iter().take_while(|&&c| c == 'w').count();
                let week = adapter.week_number(locale, date);
                if run >= 2 {
                    expanded.push_str(&format!("{week:02}"));
                } else {
                    expanded.push_str(&week.to_string());
                }
                pos += run;
            }
            _ => {
                if let Some((_, run)) = scan_token(&chars, pos) {
                    for _ in 0..run {
                        expanded.push(chars[pos]);
                    }
                    pos += run;
                } else {
                    expanded.push(chars[pos]);
                    pos += 1;
                }
            }
        }
    }
    adapter.format(locale, date, &expanded)
}

/// Whether a format string contains any time-of-day token.
pub fn format_has_time(fmt: &str) -> bool {
    let chars: Vec<char> = fmt.chars().collect();
    let mut pos = 0;
    while pos < chars.len() {
        if let Some((token, run)) = scan_token(&chars, pos) {
            if matches!(
                token,
                FormatToken::Hour24
                    | FormatToken::Hour12
                    | FormatToken::Minute
                    | FormatToken::Second
                    | FormatToken::Millisecond
            ) {
                return true;
            }
            pos += run;
        } else {
            pos += 1;
        }
    }
    false
}
