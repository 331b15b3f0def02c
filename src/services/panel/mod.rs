// Panel mode state machine
// Drill-down queues, terminal commit detection and page stepping

use crate::adapter::DateAdapter;
use crate::models::granularity::{Granularity, PanelMode};

/// The drill-down queue for a granularity, coarsest first. The panel opens
/// at the queue's last (terminal) mode; header clicks move toward the
/// front, cell selection moves toward the back.
pub fn mode_queue(granularity: Granularity) -> &'static [PanelMode] {
    match granularity {
        Granularity::Time => &[PanelMode::Time],
        Granularity::Date | Granularity::Week => &[
            PanelMode::Decade,
            PanelMode::Year,
            PanelMode::Month,
            PanelMode::Date,
        ],
        Granularity::Month => &[PanelMode::Decade, PanelMode::Year, PanelMode::Month],
        Granularity::Quarter => &[PanelMode::Decade, PanelMode::Year, PanelMode::Quarter],
        Granularity::Year => &[PanelMode::Decade, PanelMode::Year],
        Granularity::Decade => &[PanelMode::Decade],
    }
}

/// The mode a freshly opened panel renders. `DateTime` is entered directly
/// when a date picker carries time columns; it never appears in a queue.
pub fn initial_mode(granularity: Granularity, has_time: bool) -> PanelMode {
    if granularity == Granularity::Date && has_time {
        PanelMode::DateTime
    } else {
        granularity.terminal_mode()
    }
}

/// What a cell click at the current mode does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to the finer mode, keeping the clicked cell as the new page.
    Drill(PanelMode),
    /// The click selects a final value.
    Commit,
}

pub fn next_on_select(granularity: Granularity, current: PanelMode) -> Transition {
    let queue = mode_queue(granularity);
    match queue.iter().position(|&m| m == current) {
        Some(pos) if pos + 1 < queue.len() => Transition::Drill(queue[pos + 1]),
        // terminal mode, or a composite/foreign mode that cannot drill
        _ => Transition::Commit,
    }
}

/// The coarser mode a header click switches to, `None` at the front of the
/// queue. The composite datetime view drills up like its date half.
pub fn enclosing_mode(granularity: Granularity, current: PanelMode) -> Option<PanelMode> {
    let queue = mode_queue(granularity);
    let effective = if current == PanelMode::DateTime {
        PanelMode::Date
    } else {
        current
    };
    match queue.iter().position(|&m| m == effective) {
        Some(pos) if pos > 0 => Some(queue[pos - 1]),
        _ => None,
    }
}

/// Step the visible page by one unit, or one super-unit (the next coarser
/// page size) when `super_unit` is set. Time panels have no pages.
pub fn page_step<A: DateAdapter>(
    adapter: &A,
    mode: PanelMode,
    page: &A::Date,
    dir: i32,
    super_unit: bool,
) -> A::Date {
    match mode {
        PanelMode::Time => page.clone(),
        PanelMode::Date | PanelMode::DateTime | PanelMode::Week => {
            if super_unit {
                adapter.add_year(page, dir)
            } else {
                adapter.add_month(page, dir)
            }
        }
        PanelMode::Month | PanelMode::Quarter => {
            adapter.add_year(page, if super_unit { dir * 10 } else { dir })
        }
        PanelMode::Year => adapter.add_year(page, if super_unit { dir * 100 } else { dir * 10 }),
        PanelMode::Decade => adapter.add_year(page, dir * 100),
    }
}

/// The forced page offset applied to an empty end panel so the two panels
/// of a range picker never show the same page.
pub fn forced_end_offset<A: DateAdapter>(
    adapter: &A,
    granularity: Granularity,
    start_page: &A::Date,
) -> A::Date {
    match granularity {
        Granularity::Time => start_page.clone(),
        Granularity::Date | Granularity::Week => adapter.add_month(start_page, 1),
        Granularity::Month | Granularity::Quarter => adapter.add_year(start_page, 1),
        Granularity::Year => adapter.add_year(start_page, 10),
        Granularity::Decade => adapter.add_year(start_page, 100),
    }
}

/// The page an end panel shows: the end value's own page when one exists,
/// else the start page pushed forward by the forced offset.
pub fn end_panel_page<A: DateAdapter>(
    adapter: &A,
    granularity: Granularity,
    start_page: &A::Date,
    end_value: Option<&A::Date>,
) -> A::Date {
    match end_value {
        Some(end) => end.clone(),
        None => forced_end_offset(adapter, granularity, start_page),
    }
}
