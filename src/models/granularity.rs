// Granularity and panel mode enums
// Core vocabulary shared by the panel state machine and both pickers

use serde::{Deserialize, Serialize};

/// Coarseness of selection requested by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Time,
    Date,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
}

impl Granularity {
    /// Whether values of this granularity carry a time-of-day component on
    /// their own (independent of any extra time configuration).
    pub fn is_time_based(self) -> bool {
        matches!(self, Granularity::Time)
    }

    /// The panel mode in which a cell click selects a final value.
    pub fn terminal_mode(self) -> PanelMode {
        match self {
            Granularity::Time => PanelMode::Time,
            Granularity::Date => PanelMode::Date,
            Granularity::Week => PanelMode::Week,
            Granularity::Month => PanelMode::Month,
            Granularity::Quarter => PanelMode::Quarter,
            Granularity::Year => PanelMode::Year,
            Granularity::Decade => PanelMode::Decade,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Date
    }
}

/// The calendar page currently rendered. A superset of [`Granularity`]:
/// `DateTime` is a composite of the date and time panels shown together and
/// is entered directly, never reached by drilling down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    Time,
    Date,
    DateTime,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
}

impl PanelMode {
    /// Whether this mode renders time columns (alone or beside the date grid).
    pub fn shows_time(self) -> bool {
        matches!(self, PanelMode::Time | PanelMode::DateTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_mode_matches_granularity() {
        assert_eq!(Granularity::Week.terminal_mode(), PanelMode::Week);
        assert_eq!(Granularity::Quarter.terminal_mode(), PanelMode::Quarter);
        assert_eq!(Granularity::Time.terminal_mode(), PanelMode::Time);
    }

    #[test]
    fn granularity_serializes_lowercase() {
        let json = serde_json::to_string(&Granularity::Decade).unwrap();
        assert_eq!(json, "\"decade\"");
        let back: Granularity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Granularity::Decade);
    }
}
