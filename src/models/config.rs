// Picker configuration structs
// Everything a picker needs is named here explicitly; no ambient context

use crate::locale::Locale;
use crate::models::granularity::Granularity;
use crate::models::value::RangeValue;

/// Which field of a picker a date is being evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Single,
    Start,
    End,
}

/// Context handed to the user's `disabled_date` predicate.
///
/// `from` is the anchored opposite endpoint during range selection, when one
/// exists; single pickers always pass `None`.
#[derive(Debug, Clone)]
pub struct DisabledContext<T> {
    pub role: FieldRole,
    pub from: Option<T>,
}

impl<T> DisabledContext<T> {
    pub fn single() -> Self {
        DisabledContext {
            role: FieldRole::Single,
            from: None,
        }
    }

    pub fn range(role: FieldRole, from: Option<T>) -> Self {
        DisabledContext { role, from }
    }
}

pub type DisabledDateFn<T> = Box<dyn Fn(&T, &DisabledContext<T>) -> bool>;

/// How a committed value is rendered to text and which patterns parse input.
///
/// `Pattern` uses one string both ways. `Patterns` formats with the first
/// entry and accepts any entry when parsing typed text. `Custom` formats
/// through a callback; custom-formatted fields are not parseable and the
/// mask editor is bypassed for them.
pub enum FormatSpec<T> {
    Pattern(String),
    Patterns(Vec<String>),
    Custom(Box<dyn Fn(&T) -> String>),
}

impl<T> FormatSpec<T> {
    pub fn pattern(fmt: impl Into<String>) -> Self {
        FormatSpec::Pattern(fmt.into())
    }

    /// The pattern used for formatting, when one exists.
    pub fn primary_pattern(&self) -> Option<&str> {
        match self {
            FormatSpec::Pattern(p) => Some(p),
            FormatSpec::Patterns(ps) => ps.first().map(String::as_str),
            FormatSpec::Custom(_) => None,
        }
    }

    /// Every pattern accepted when parsing typed text.
    pub fn parse_patterns(&self) -> Vec<&str> {
        match self {
            FormatSpec::Pattern(p) => vec![p.as_str()],
            FormatSpec::Patterns(ps) => ps.iter().map(String::as_str).collect(),
            FormatSpec::Custom(_) => Vec::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FormatSpec::Custom(_))
    }
}

impl<T> std::fmt::Debug for FormatSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatSpec::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            FormatSpec::Patterns(ps) => f.debug_tuple("Patterns").field(ps).finish(),
            FormatSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

pub type DisabledHoursFn = Box<dyn Fn() -> Vec<u32>>;
pub type DisabledMinutesFn = Box<dyn Fn(u32) -> Vec<u32>>;
pub type DisabledSecondsFn = Box<dyn Fn(u32, u32) -> Vec<u32>>;
pub type DisabledMillisecondsFn = Box<dyn Fn(u32, u32, u32) -> Vec<u32>>;

/// Cascading per-column disablement callbacks. Each level receives the
/// selected values of the coarser columns.
#[derive(Default)]
pub struct DisabledUnits {
    pub hours: Option<DisabledHoursFn>,
    pub minutes: Option<DisabledMinutesFn>,
    pub seconds: Option<DisabledSecondsFn>,
    pub milliseconds: Option<DisabledMillisecondsFn>,
}

impl DisabledUnits {
    pub fn is_empty(&self) -> bool {
        self.hours.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
            && self.milliseconds.is_none()
    }
}

/// Time column configuration for time and datetime granularities.
pub struct TimeConfig {
    pub use_12_hours: bool,
    pub show_hour: bool,
    pub show_minute: bool,
    pub show_second: bool,
    pub show_millisecond: bool,
    pub hour_step: u32,
    pub minute_step: u32,
    pub second_step: u32,
    pub millisecond_step: u32,
    pub disabled_units: DisabledUnits,
    /// Older flat lists, deprecated but still honored; merged with
    /// `disabled_units` when both are present.
    pub legacy_disabled_hours: Option<Vec<u32>>,
    pub legacy_disabled_minutes: Option<Vec<u32>>,
    pub legacy_disabled_seconds: Option<Vec<u32>>,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            use_12_hours: false,
            show_hour: true,
            show_minute: true,
            show_second: true,
            show_millisecond: false,
            hour_step: 1,
            minute_step: 1,
            second_step: 1,
            millisecond_step: 100,
            disabled_units: DisabledUnits::default(),
            legacy_disabled_hours: None,
            legacy_disabled_minutes: None,
            legacy_disabled_seconds: None,
        }
    }
}

impl TimeConfig {
    /// Emit developer warnings for misconfiguration. Steps that do not
    /// divide their cycle are honored with a shorter final interval; legacy
    /// flat lists alongside `disabled_units` are honored but deprecated.
    pub fn warn_on_misconfiguration(&self) {
        check_step("hour_step", self.hour_step, 24);
        check_step("minute_step", self.minute_step, 60);
        check_step("second_step", self.second_step, 60);
        check_step("millisecond_step", self.millisecond_step, 1000);
        let legacy = self.legacy_disabled_hours.is_some()
            || self.legacy_disabled_minutes.is_some()
            || self.legacy_disabled_seconds.is_some();
        if legacy && !self.disabled_units.is_empty() {
            log::warn!(
                "legacy disabled hour/minute/second lists are deprecated; \
                 prefer disabled_units callbacks"
            );
        }
    }
}

fn check_step(name: &str, step: u32, cycle: u32) {
    if step == 0 {
        log::warn!("{name} of 0 treated as 1");
    } else if cycle % step != 0 {
        log::warn!("{name} {step} does not divide {cycle}; final interval will be shorter");
    }
}

/// Named shortcut the panel offers for one-click submission.
pub struct Preset<V> {
    pub label: String,
    pub value: V,
}

impl<V> Preset<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Preset {
            label: label.into(),
            value,
        }
    }
}

/// Configuration shared by single and range pickers.
pub struct PickerOptions<T> {
    pub granularity: Granularity,
    pub locale: Locale,
    pub format: Option<FormatSpec<T>>,
    /// `None` resolves per granularity: time and datetime confirm through
    /// an OK action, everything else commits directly.
    pub needs_confirm: Option<bool>,
    pub time: Option<TimeConfig>,
    pub min_date: Option<T>,
    pub max_date: Option<T>,
    pub disabled_date: Option<DisabledDateFn<T>>,
    pub presets: Vec<Preset<Option<T>>>,
}

impl<T> PickerOptions<T> {
    pub fn new(granularity: Granularity, locale: Locale) -> Self {
        PickerOptions {
            granularity,
            locale,
            format: None,
            needs_confirm: None,
            time: None,
            min_date: None,
            max_date: None,
            disabled_date: None,
            presets: Vec::new(),
        }
    }

    /// Whether the panel shows time columns alongside or instead of dates.
    pub fn shows_time(&self) -> bool {
        self.granularity.is_time_based() || self.time.is_some()
    }

    pub fn resolved_needs_confirm(&self) -> bool {
        self.needs_confirm.unwrap_or_else(|| self.shows_time())
    }
}

impl<T> Default for PickerOptions<T> {
    fn default() -> Self {
        PickerOptions::new(Granularity::default(), Locale::default())
    }
}

/// Range-specific configuration layered over the shared options.
pub struct RangeOptions<T> {
    pub base: PickerOptions<T>,
    /// Per-field permission to submit with that field empty.
    pub allow_empty: [bool; 2],
    /// Per-field hard disable; a disabled field keeps its committed value.
    pub disabled: [bool; 2],
    /// `None` resolves per granularity: bare time ranges stay unordered,
    /// everything else is sorted on submission.
    pub order: Option<bool>,
    pub presets: Vec<Preset<RangeValue<T>>>,
}

impl<T> RangeOptions<T> {
    pub fn new(base: PickerOptions<T>) -> Self {
        RangeOptions {
            base,
            allow_empty: [false, false],
            disabled: [false, false],
            order: None,
            presets: Vec::new(),
        }
    }

    pub fn resolved_order(&self) -> bool {
        self.order
            .unwrap_or(self.base.granularity != Granularity::Time)
    }
}

impl<T> Default for RangeOptions<T> {
    fn default() -> Self {
        RangeOptions::new(PickerOptions::default())
    }
}
