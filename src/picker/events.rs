// Picker events and errors
// Pickers queue events; the embedding application drains them after each
// interaction

use thiserror::Error;

use crate::models::granularity::PanelMode;
use crate::models::value::RangeValue;

/// Why a submission or text edit was rejected. Rejection is never fatal:
/// the picker stays in its current interaction and marks the field invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("text '{text}' does not parse with any configured format")]
    ParseFailed { text: String },
    #[error("candidate value is disabled")]
    ValueDisabled,
    #[error("field {field} may not be submitted empty")]
    EmptyNotAllowed { field: usize },
}

pub type SubmitResult = Result<(), PickerError>;

/// Events emitted by a single-value picker, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent<T> {
    /// The committed value changed.
    Change { value: Option<T>, text: String },
    /// The transient in-panel selection changed.
    CalendarChange { value: Option<T> },
    /// The confirm action fired on the current value.
    Ok { value: Option<T> },
    OpenChange { open: bool },
    PanelChange { mode: PanelMode },
}

/// Events emitted by a range picker.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeEvent<T> {
    Change {
        value: RangeValue<T>,
        texts: [String; 2],
    },
    CalendarChange { value: RangeValue<T> },
    /// Focus moved to a field, or left the picker entirely.
    ActiveChange { index: Option<usize> },
    Ok { value: RangeValue<T> },
    OpenChange { open: bool },
    PanelChange { mode: PanelMode },
}
