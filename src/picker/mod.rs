// Module exports for picker state machines

pub mod events;
pub mod input;
pub mod range;
pub mod single;

pub use events::{PickerError, PickerEvent, RangeEvent, SubmitResult};
pub use input::MaskedInput;
pub use range::RangePicker;
pub use single::SinglePicker;

use crate::adapter::{format_with, DateAdapter};
use crate::models::config::{FormatSpec, PickerOptions};

/// Render a value with the configured format, falling back to the locale's
/// default for the granularity.
pub(crate) fn render_value<A: DateAdapter>(
    adapter: &A,
    options: &PickerOptions<A::Date>,
    date: &A::Date,
) -> String {
    if let Some(spec) = &options.format {
        if let FormatSpec::Custom(render) = spec {
            return render(date);
        }
        if let Some(pattern) = spec.primary_pattern() {
            return format_with(adapter, &options.locale, date, pattern);
        }
    }
    let fmt = options
        .locale
        .default_field_format(options.granularity, options.time.is_some())
        .to_string();
    format_with(adapter, &options.locale, date, &fmt)
}

/// Every pattern typed text is matched against. Custom formats are not
/// parseable and yield the locale default as the only candidate.
pub(crate) fn parse_patterns<T>(options: &PickerOptions<T>) -> Vec<String> {
    match &options.format {
        Some(spec) if !spec.is_custom() => spec
            .parse_patterns()
            .into_iter()
            .map(str::to_string)
            .collect(),
        _ => vec![options
            .locale
            .default_field_format(options.granularity, options.time.is_some())
            .to_string()],
    }
}
