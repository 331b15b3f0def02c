// Time column generation and validation
// Builds the hour/minute/second/millisecond columns and normalizes
// candidate times against the disablement cascade

use crate::adapter::DateAdapter;
use crate::locale::Locale;
use crate::models::config::TimeConfig;
use crate::models::time_unit::TimeUnit;

/// The generated selection columns. A column absent from the configuration
/// is `None`; the meridiem column exists only in 12-hour mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeColumns {
    pub hours: Option<Vec<TimeUnit>>,
    pub minutes: Option<Vec<TimeUnit>>,
    pub seconds: Option<Vec<TimeUnit>>,
    pub milliseconds: Option<Vec<TimeUnit>>,
    pub meridiem: Option<Vec<TimeUnit>>,
}

fn effective_step(step: u32) -> u32 {
    step.max(1)
}

/// Values a column offers: multiples of the step below the cycle length.
/// A step that does not divide the cycle simply ends with a shorter final
/// interval (the misconfiguration warning fires at picker construction).
fn step_values(cycle: u32, step: u32) -> Vec<u32> {
    let step = effective_step(step);
    (0..cycle).step_by(step as usize).collect()
}

fn merged(legacy: &Option<Vec<u32>>, from_callback: Option<Vec<u32>>) -> Vec<u32> {
    let mut out = legacy.clone().unwrap_or_default();
    if let Some(more) = from_callback {
        out.extend(more);
    }
    out
}

fn disabled_hours(config: &TimeConfig) -> Vec<u32> {
    merged(
        &config.legacy_disabled_hours,
        config.disabled_units.hours.as_ref().map(|f| f()),
    )
}

fn disabled_minutes(config: &TimeConfig, hour: u32) -> Vec<u32> {
    merged(
        &config.legacy_disabled_minutes,
        config.disabled_units.minutes.as_ref().map(|f| f(hour)),
    )
}

fn disabled_seconds(config: &TimeConfig, hour: u32, minute: u32) -> Vec<u32> {
    merged(
        &config.legacy_disabled_seconds,
        config.disabled_units.seconds.as_ref().map(|f| f(hour, minute)),
    )
}

fn disabled_milliseconds(config: &TimeConfig, hour: u32, minute: u32, second: u32) -> Vec<u32> {
    config
        .disabled_units
        .milliseconds
        .as_ref()
        .map(|f| f(hour, minute, second))
        .unwrap_or_default()
}

/// The enabled column value closest at or below `target`, else the first
/// enabled value. `None` when the column has no enabled value left.
fn closest_enabled(values: &[u32], disabled: &[u32], target: u32) -> Option<u32> {
    let enabled = |v: &&u32| !disabled.contains(v);
    values
        .iter()
        .filter(enabled)
        .filter(|&&v| v <= target)
        .max()
        .or_else(|| values.iter().filter(enabled).min())
        .copied()
}

fn units(values: &[u32], disabled: &[u32], label_width: usize) -> Vec<TimeUnit> {
    values
        .iter()
        .map(|&v| TimeUnit {
            label: format!("{v:0label_width$}"),
            value: v,
            disabled: disabled.contains(&v),
        })
        .collect()
}

fn hour_label_12(hour: u32) -> String {
    let display = hour % 12;
    let display = if display == 0 { 12 } else { display };
    format!("{display:02}")
}

/// Generate the columns around `current`. Finer columns are evaluated
/// against the selected-or-nearest-valid prefix, so a disabled hour never
/// poisons the minute flags with callbacks for an hour that cannot be
/// chosen.
pub fn columns<A: DateAdapter>(
    adapter: &A,
    config: &TimeConfig,
    locale: &Locale,
    current: &A::Date,
) -> TimeColumns {
    let mut out = TimeColumns::default();

    let hour_values = step_values(24, config.hour_step);
    let hour_disabled = disabled_hours(config);
    let anchor_hour = closest_enabled(&hour_values, &hour_disabled, adapter.get_hour(current))
        .unwrap_or_else(|| adapter.get_hour(current));

    if config.show_hour {
        if config.use_12_hours {
            let pm = anchor_hour >= 12;
            let half: Vec<u32> = hour_values
                .iter()
                .copied()
                .filter(|&h| (h >= 12) == pm)
                .collect();
            out.hours = Some(
                half.iter()
                    .map(|&h| TimeUnit {
                        label: hour_label_12(h),
                        value: h,
                        disabled: hour_disabled.contains(&h),
                    })
                    .collect(),
            );
            let am_all_disabled = hour_values
                .iter()
                .filter(|&&h| h < 12)
                .all(|h| hour_disabled.contains(h));
            let pm_all_disabled = hour_values
                .iter()
                .filter(|&&h| h >= 12)
                .all(|h| hour_disabled.contains(h));
            out.meridiem = Some(vec![
                TimeUnit {
                    label: locale.am_label.clone(),
                    value: 0,
                    disabled: am_all_disabled,
                },
                TimeUnit {
                    label: locale.pm_label.clone(),
                    value: 1,
                    disabled: pm_all_disabled,
                },
            ]);
        } else {
            out.hours = Some(units(&hour_values, &hour_disabled, 2));
        }
    }

    let minute_values = step_values(60, config.minute_step);
    let minute_disabled = disabled_minutes(config, anchor_hour);
    let anchor_minute =
        closest_enabled(&minute_values, &minute_disabled, adapter.get_minute(current))
            .unwrap_or_else(|| adapter.get_minute(current));
    if config.show_minute {
        out.minutes = Some(units(&minute_values, &minute_disabled, 2));
    }

    let second_values = step_values(60, config.second_step);
    let second_disabled = disabled_seconds(config, anchor_hour, anchor_minute);
    let anchor_second =
        closest_enabled(&second_values, &second_disabled, adapter.get_second(current))
            .unwrap_or_else(|| adapter.get_second(current));
    if config.show_second {
        out.seconds = Some(units(&second_values, &second_disabled, 2));
    }

    if config.show_millisecond {
        let ms_values = step_values(1000, config.millisecond_step);
        let ms_disabled = disabled_milliseconds(config, anchor_hour, anchor_minute, anchor_second);
        out.milliseconds = Some(units(&ms_values, &ms_disabled, 3));
    }

    out
}

/// Normalize a candidate's time fields to the nearest enabled column
/// values, coarse to fine. Returns `None` when some visible column has no
/// enabled value at all. Applying the result again is a no-op.
pub fn find_valid_time<A: DateAdapter>(
    adapter: &A,
    config: &TimeConfig,
    date: &A::Date,
) -> Option<A::Date> {
    let mut result = date.clone();

    let hour = if config.show_hour {
        let values = step_values(24, config.hour_step);
        let hour = closest_enabled(&values, &disabled_hours(config), adapter.get_hour(date))?;
        result = adapter.set_hour(&result, hour);
        hour
    } else {
        adapter.get_hour(date)
    };

    let minute = if config.show_minute {
        let values = step_values(60, config.minute_step);
        let minute = closest_enabled(
            &values,
            &disabled_minutes(config, hour),
            adapter.get_minute(date),
        )?;
        result = adapter.set_minute(&result, minute);
        minute
    } else {
        adapter.get_minute(date)
    };

    let second = if config.show_second {
        let values = step_values(60, config.second_step);
        let second = closest_enabled(
            &values,
            &disabled_seconds(config, hour, minute),
            adapter.get_second(date),
        )?;
        result = adapter.set_second(&result, second);
        second
    } else {
        adapter.get_second(date)
    };

    if config.show_millisecond {
        let values = step_values(1000, config.millisecond_step);
        let ms = closest_enabled(
            &values,
            &disabled_milliseconds(config, hour, minute, second),
            adapter.get_millisecond(date),
        )?;
        result = adapter.set_millisecond(&result, ms);
    }

    Some(result)
}

/// Whether any visible time field of `date` sits on a disabled unit. Used
/// by the validity composer for time-bearing granularities.
pub fn time_is_disabled<A: DateAdapter>(adapter: &A, config: &TimeConfig, date: &A::Date) -> bool {
    let hour = adapter.get_hour(date);
    let minute = adapter.get_minute(date);
    let second = adapter.get_second(date);
    if config.show_hour && disabled_hours(config).contains(&hour) {
        return true;
    }
    if config.show_minute && disabled_minutes(config, hour).contains(&minute) {
        return true;
    }
    if config.show_second && disabled_seconds(config, hour, minute).contains(&second) {
        return true;
    }
    if config.show_millisecond
        && disabled_milliseconds(config, hour, minute, second)
            .contains(&adapter.get_millisecond(date))
    {
        return true;
    }
    false
}

/// Identity of a time column, used when a unit click is applied back onto
/// a candidate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
    Millisecond,
    Meridiem,
}

/// Write one clicked unit into `date`. A meridiem click keeps the 12-hour
/// display hour and moves it into the other half of the day.
pub fn apply_unit<A: DateAdapter>(
    adapter: &A,
    field: TimeField,
    value: u32,
    date: &A::Date,
) -> A::Date {
    match field {
        TimeField::Hour => adapter.set_hour(date, value),
        TimeField::Minute => adapter.set_minute(date, value),
        TimeField::Second => adapter.set_second(date, value),
        TimeField::Millisecond => adapter.set_millisecond(date, value),
        TimeField::Meridiem => {
            let display = adapter.get_hour(date) % 12;
            let hour = if value == 1 { display + 12 } else { display };
            adapter.set_hour(date, hour)
        }
    }
}
