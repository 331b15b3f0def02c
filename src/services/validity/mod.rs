// Composed invalidity predicate
// One ordered merge of every way a candidate date can be rejected

use crate::adapter::{is_after_at, DateAdapter};
use crate::locale::Locale;
use crate::models::config::{DisabledContext, DisabledDateFn, TimeConfig};
use crate::models::granularity::Granularity;
use crate::services::time_select;

/// Everything the invalidity check needs, borrowed from the picker.
pub struct ValidityContext<'a, A: DateAdapter> {
    pub adapter: &'a A,
    pub locale: &'a Locale,
    pub granularity: Granularity,
    pub min_date: Option<&'a A::Date>,
    pub max_date: Option<&'a A::Date>,
    pub disabled_date: Option<&'a DisabledDateFn<A::Date>>,
    pub time: Option<&'a TimeConfig>,
}

impl<'a, A: DateAdapter> ValidityContext<'a, A> {
    fn checks_time_units(&self) -> bool {
        self.time.is_some()
            && matches!(self.granularity, Granularity::Time | Granularity::Date)
    }

    /// Whether `date` may not be selected or submitted. Checks run in
    /// order: structural validity, min/max bounds at cell precision, the
    /// user predicate, then per-unit time disablement for time-bearing
    /// granularities. The first failing check wins.
    pub fn is_invalid(&self, date: &A::Date, role: &DisabledContext<A::Date>) -> bool {
        if !self.adapter.is_valid(date) {
            return true;
        }
        if let Some(min) = self.min_date {
            if is_after_at(self.adapter, self.locale, self.granularity, min, date) {
                return true;
            }
        }
        if let Some(max) = self.max_date {
            if is_after_at(self.adapter, self.locale, self.granularity, date, max) {
                return true;
            }
        }
        if let Some(predicate) = self.disabled_date {
            if predicate(date, role) {
                return true;
            }
        }
        if self.checks_time_units() {
            if let Some(config) = self.time {
                if time_select::time_is_disabled(self.adapter, config, date) {
                    return true;
                }
            }
        }
        false
    }
}
