// Module exports for models

pub mod config;
pub mod granularity;
pub mod time_unit;
pub mod value;

pub use config::{
    DisabledContext, DisabledDateFn, DisabledUnits, FieldRole, FormatSpec, PickerOptions, Preset,
    RangeOptions, TimeConfig,
};
pub use granularity::{Granularity, PanelMode};
pub use time_unit::TimeUnit;
pub use value::{RangeValue, ValueSource};
