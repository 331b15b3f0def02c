// A single entry in a time selection column

use serde::{Deserialize, Serialize};

/// One selectable unit in an hour/minute/second/millisecond/meridiem column.
///
/// `value` is the numeric payload the picker stores back into the date. For
/// the meridiem column the values are 0 (AM) and 1 (PM); the label carries
/// the locale text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUnit {
    pub label: String,
    pub value: u32,
    pub disabled: bool,
}

impl TimeUnit {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        TimeUnit {
            label: label.into(),
            value,
            disabled: false,
        }
    }

    pub fn disabled(label: impl Into<String>, value: u32) -> Self {
        TimeUnit {
            label: label.into(),
            value,
            disabled: true,
        }
    }
}
