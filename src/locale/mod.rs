// Locale records
// Plain data consumed by the adapter and the pickers; read-only after
// construction

pub mod presets;

use serde::{Deserialize, Serialize};

use crate::models::granularity::Granularity;

/// Labels, format strings and week rules for one locale.
///
/// Field formats use the crate's token vocabulary plus the `Q` and `w`
/// placeholders for quarter and week numbers. `short_week_days` starts at
/// Sunday regardless of `week_first_day`; renderers rotate it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub code: String,
    /// 0 = Sunday, 1 = Monday.
    pub week_first_day: u32,
    /// Header ordering: true renders the month selector before the year.
    pub month_before_year: bool,

    pub today_label: String,
    pub now_label: String,
    pub ok_label: String,
    pub clear_label: String,
    pub month_select_label: String,
    pub year_select_label: String,
    pub am_label: String,
    pub pm_label: String,

    pub short_week_days: Vec<String>,
    pub short_months: Vec<String>,

    pub field_date_format: String,
    pub field_date_time_format: String,
    pub field_time_format: String,
    pub field_week_format: String,
    pub field_month_format: String,
    pub field_quarter_format: String,
    pub field_year_format: String,
    pub cell_date_format: String,
}

impl Locale {
    /// The field format used when the picker options name none.
    pub fn default_field_format(&self, granularity: Granularity, shows_time: bool) -> &str {
        match granularity {
            Granularity::Time => &self.field_time_format,
            Granularity::Date => {
                if shows_time {
                    &self.field_date_time_format
                } else {
                    &self.field_date_format
                }
            }
            Granularity::Week => &self.field_week_format,
            Granularity::Month => &self.field_month_format,
            Granularity::Quarter => &self.field_quarter_format,
            Granularity::Year | Granularity::Decade => &self.field_year_format,
        }
    }

    /// Week day labels rotated so the locale's first day comes first.
    pub fn rotated_week_days(&self) -> Vec<String> {
        let first = (self.week_first_day % 7) as usize;
        (0..7)
            .map(|i| self.short_week_days[(first + i) % 7].clone())
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_selection() {
        let locale = Locale::en_us();
        assert_eq!(
            locale.default_field_format(Granularity::Date, false),
            "MM/DD/YYYY"
        );
        assert_eq!(
            locale.default_field_format(Granularity::Date, true),
            "MM/DD/YYYY HH:mm:ss"
        );
        assert_eq!(
            locale.default_field_format(Granularity::Decade, false),
            "YYYY"
        );
    }

    #[test]
    fn week_days_rotate_to_first_day() {
        let gb = Locale::en_gb();
        let rotated = gb.rotated_week_days();
        assert_eq!(rotated[0], "Mon");
        assert_eq!(rotated[6], "Sun");
    }

    #[test]
    fn locale_round_trips_through_json() {
        let locale = Locale::de_de();
        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
