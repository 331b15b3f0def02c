// Two-field range reconciliation engine
// Field focus chaining, cross-field validity and ordered submission

use crate::adapter::{is_after_at, same_cell, DateAdapter};
use crate::models::config::{DisabledContext, FieldRole, RangeOptions};
use crate::models::granularity::PanelMode;
use crate::models::value::{RangeValue, ValueSource};
use crate::picker::events::{PickerError, RangeEvent, SubmitResult};
use crate::services::panel::{self, Transition};
use crate::services::scheduler::FrameScheduler;
use crate::services::time_select::{self, TimeColumns, TimeField};
use crate::services::validity::ValidityContext;

/// State machine for one start/end range picker.
///
/// The calendar tuple is the working draft; it mirrors the committed tuple
/// whenever no selection is in flight. A selection chain walks the two
/// fields once each and submits when no unvisited enabled field remains.
pub struct RangePicker<A: DateAdapter> {
    adapter: A,
    options: RangeOptions<A::Date>,
    value: ValueSource<RangeValue<A::Date>>,
    calendar: RangeValue<A::Date>,
    active: Option<usize>,
    visited: [bool; 2],
    invalid: [bool; 2],
    start_page: A::Date,
    mode: PanelMode,
    open: bool,
    scheduler: FrameScheduler,
    events: Vec<RangeEvent<A::Date>>,
}

impl<A: DateAdapter> RangePicker<A> {
    pub fn new(
        adapter: A,
        options: RangeOptions<A::Date>,
        value: ValueSource<RangeValue<A::Date>>,
    ) -> Self {
        if let Some(time) = &options.base.time {
            time.warn_on_misconfiguration();
        }
        let committed = value.current().unwrap_or_default();
        let start_page = committed
            .start()
            .cloned()
            .unwrap_or_else(|| adapter.now());
        let mode = panel::initial_mode(options.base.granularity, options.base.time.is_some());
        RangePicker {
            adapter,
            options,
            value,
            calendar: committed,
            active: None,
            visited: [false; 2],
            invalid: [false; 2],
            start_page,
            mode,
            open: false,
            scheduler: FrameScheduler::new(),
            events: Vec::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn options(&self) -> &RangeOptions<A::Date> {
        &self.options
    }

    pub fn value(&self) -> RangeValue<A::Date> {
        self.value.current().unwrap_or_default()
    }

    pub fn calendar_value(&self) -> &RangeValue<A::Date> {
        &self.calendar
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn invalid_fields(&self) -> [bool; 2] {
        self.invalid
    }

    /// The page anchoring the start panel.
    pub fn start_page(&self) -> &A::Date {
        &self.start_page
    }

    /// The page the end panel shows: the end draft's own page when one
    /// exists, else the start page pushed forward by one panel unit so the
    /// two panels never coincide.
    pub fn end_page(&self) -> A::Date {
        panel::end_panel_page(
            &self.adapter,
            self.options.base.granularity,
            &self.start_page,
            self.calendar.end(),
        )
    }

    pub fn drain_events(&mut self) -> Vec<RangeEvent<A::Date>> {
        std::mem::take(&mut self.events)
    }

    fn role_of(index: usize) -> FieldRole {
        if index == 0 {
            FieldRole::Start
        } else {
            FieldRole::End
        }
    }

    fn values_equal(&self, a: Option<&A::Date>, b: Option<&A::Date>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => same_cell(
                &self.adapter,
                &self.options.base.locale,
                self.options.base.granularity,
                a,
                b,
            ),
            _ => false,
        }
    }

    fn ranges_equal(&self, a: &RangeValue<A::Date>, b: &RangeValue<A::Date>) -> bool {
        self.values_equal(a.get(0), b.get(0)) && self.values_equal(a.get(1), b.get(1))
    }

    /// Whether `date` may not occupy the field at `index`. On top of the
    /// shared checks, a field whose opposite is hard-disabled must respect
    /// the ordering against that frozen endpoint; a live opposite field can
    /// still be re-picked, so ordering is deferred to submission there.
    fn field_disabled(&self, index: usize, date: &A::Date) -> bool {
        let other = 1 - index;
        let anchor = self.calendar.get(other).cloned();
        let ctx = ValidityContext {
            adapter: &self.adapter,
            locale: &self.options.base.locale,
            granularity: self.options.base.granularity,
            min_date: self.options.base.min_date.as_ref(),
            max_date: self.options.base.max_date.as_ref(),
            disabled_date: self.options.base.disabled_date.as_ref(),
            time: self.options.base.time.as_ref(),
        };
        let role = DisabledContext::range(Self::role_of(index), anchor.clone());
        if ctx.is_invalid(date, &role) {
            return true;
        }
        if self.options.disabled[other] && self.options.resolved_order() {
            if let Some(anchor) = &anchor {
                let locale = &self.options.base.locale;
                let granularity = self.options.base.granularity;
                let out_of_order = if index == 0 {
                    is_after_at(&self.adapter, locale, granularity, date, anchor)
                } else {
                    is_after_at(&self.adapter, locale, granularity, anchor, date)
                };
                if out_of_order {
                    return true;
                }
            }
        }
        false
    }

    pub fn format_value(&self, date: &A::Date) -> String {
        super::render_value(&self.adapter, &self.options.base, date)
    }

    fn render_texts(&self, value: &RangeValue<A::Date>) -> [String; 2] {
        [0, 1].map(|i| {
            value
                .get(i)
                .map(|v| self.format_value(v))
                .unwrap_or_default()
        })
    }

    /// Both fields rendered from the committed tuple.
    pub fn texts(&self) -> [String; 2] {
        self.render_texts(&self.value())
    }

    fn set_active(&mut self, index: Option<usize>) {
        if self.active != index {
            self.active = index;
            self.events.push(RangeEvent::ActiveChange { index });
        }
    }

    /// Focus a field and open the panel. Focusing a hard-disabled field is
    /// ignored.
    pub fn focus_field(&mut self, index: usize) {
        if self.options.disabled[index] {
            return;
        }
        self.visited[index] = true;
        self.set_active(Some(index));
        self.request_open();
    }

    /// The field a finished selection hands focus to, `None` when the
    /// chain is complete. Visited and hard-disabled fields are skipped;
    /// emptiness permissions only matter at submission.
    fn next_active_index(&self, index: usize) -> Option<usize> {
        let other = 1 - index;
        if !self.visited[other] && !self.options.disabled[other] {
            Some(other)
        } else {
            None
        }
    }

    fn set_calendar_field(&mut self, index: usize, date: A::Date) {
        if self.values_equal(self.calendar.get(index), Some(&date)) {
            return;
        }
        if index == 0 {
            self.start_page = date.clone();
        }
        self.calendar.set(index, Some(date));
        self.events.push(RangeEvent::CalendarChange {
            value: self.calendar.clone(),
        });
    }

    fn commit(&mut self, candidate: RangeValue<A::Date>) {
        let changed = !self.ranges_equal(&self.value(), &candidate);
        self.value.commit(Some(candidate.clone()));
        self.calendar = self.value();
        self.invalid = [false; 2];
        if let Some(start) = self.calendar.start() {
            self.start_page = start.clone();
        }
        if changed {
            let texts = self.render_texts(&candidate);
            self.events.push(RangeEvent::Change {
                value: candidate,
                texts,
            });
        }
    }

    fn validate(&mut self, candidate: &RangeValue<A::Date>) -> SubmitResult {
        for index in 0..2 {
            match candidate.get(index) {
                None => {
                    if !(self.options.allow_empty[index] || self.options.disabled[index]) {
                        self.invalid[index] = true;
                        return Err(PickerError::EmptyNotAllowed { field: index });
                    }
                }
                Some(date) => {
                    if !self.options.disabled[index] && self.field_disabled(index, date) {
                        self.invalid[index] = true;
                        return Err(PickerError::ValueDisabled);
                    }
                }
            }
        }
        Ok(())
    }

    fn sort_candidate(&self, candidate: &mut RangeValue<A::Date>) {
        if !self.options.resolved_order() || !candidate.is_complete() {
            return;
        }
        if self.options.disabled.iter().any(|&d| d) {
            return;
        }
        let (Some(start), Some(end)) = (candidate.start(), candidate.end()) else {
            return;
        };
        if is_after_at(
            &self.adapter,
            &self.options.base.locale,
            self.options.base.granularity,
            start,
            end,
        ) {
            candidate.swap();
        }
    }

    /// The tuple a submission acts on: the draft, with hard-disabled
    /// fields pinned to their committed value.
    fn submit_candidate(&self) -> RangeValue<A::Date> {
        let committed = self.value();
        let mut candidate = self.calendar.clone();
        for index in 0..2 {
            if self.options.disabled[index] {
                candidate.set(index, committed.get(index).cloned());
            }
        }
        candidate
    }

    /// Submit a tuple to the committed slot.
    ///
    /// `None` submits the current draft. The empty tuple is the explicit
    /// clear override and commits unconditionally. Anything else validates
    /// both fields, sorts when ordering applies, and commits.
    pub fn trigger_submit(&mut self, candidate: Option<RangeValue<A::Date>>) -> SubmitResult {
        let mut candidate = candidate.unwrap_or_else(|| self.submit_candidate());
        if candidate.is_empty() {
            self.commit(RangeValue::EMPTY);
            return Ok(());
        }
        self.validate(&candidate)?;
        self.sort_candidate(&mut candidate);
        self.commit(candidate);
        Ok(())
    }

    /// Confirm the current draft, emit `Ok`, and close.
    pub fn trigger_ok(&mut self) -> SubmitResult {
        self.trigger_submit(None)?;
        self.events.push(RangeEvent::Ok {
            value: self.value(),
        });
        self.request_close();
        Ok(())
    }

    /// Handle a cell click at the current mode: drill down when a finer
    /// mode exists, otherwise select into the active field.
    pub fn select_cell(&mut self, date: A::Date) -> SubmitResult {
        match panel::next_on_select(self.options.base.granularity, self.mode) {
            Transition::Drill(next) => {
                self.start_page = date;
                self.set_mode(next);
                Ok(())
            }
            Transition::Commit => self.select_value(date),
        }
    }

    fn active_or_first_enabled(&self) -> usize {
        self.active
            .unwrap_or(if self.options.disabled[0] { 1 } else { 0 })
    }

    fn select_value(&mut self, date: A::Date) -> SubmitResult {
        let index = self.active_or_first_enabled();
        let candidate = match &self.options.base.time {
            Some(config) => match time_select::find_valid_time(&self.adapter, config, &date) {
                Some(valid) => valid,
                None => {
                    self.invalid[index] = true;
                    return Err(PickerError::ValueDisabled);
                }
            },
            None => date,
        };
        if self.field_disabled(index, &candidate) {
            self.invalid[index] = true;
            return Err(PickerError::ValueDisabled);
        }
        self.invalid[index] = false;
        self.visited[index] = true;
        self.set_calendar_field(index, candidate);
        if !self.options.base.resolved_needs_confirm() {
            match self.next_active_index(index) {
                Some(next) => self.set_active(Some(next)),
                None => {
                    self.trigger_submit(None)?;
                    self.request_close();
                }
            }
        }
        Ok(())
    }

    /// Enter on the active field: advance the selection chain, submitting
    /// and closing once every enabled field has been visited.
    pub fn confirm_field(&mut self) -> SubmitResult {
        let index = self.active_or_first_enabled();
        self.visited[index] = true;
        match self.next_active_index(index) {
            Some(next) => {
                self.set_active(Some(next));
                Ok(())
            }
            None => {
                let result = self.trigger_submit(None);
                if result.is_ok() {
                    self.request_close();
                }
                result
            }
        }
    }

    /// Apply a clicked time unit onto the active field's draft.
    pub fn select_unit(&mut self, field: TimeField, value: u32) -> SubmitResult {
        let index = self.active_or_first_enabled();
        let base = self
            .calendar
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.adapter.now());
        let candidate = time_select::apply_unit(&self.adapter, field, value, &base);
        self.select_value(candidate)
    }

    /// Select the current moment into the active field.
    pub fn select_now(&mut self) -> SubmitResult {
        self.select_value(self.adapter.now())
    }

    /// Submit a named preset wholesale. An empty preset is an explicit
    /// clear and bypasses validation like the clear action.
    pub fn apply_preset(&mut self, index: usize) -> SubmitResult {
        let Some(preset) = self.options.presets.get(index) else {
            return Ok(());
        };
        let value = preset.value.clone();
        let result = self.trigger_submit(Some(value));
        if result.is_ok() {
            self.request_close();
        }
        result
    }

    /// The explicit whole-tuple clear override: commits the empty tuple
    /// without consulting validation.
    pub fn clear(&mut self) {
        self.commit(RangeValue::EMPTY);
        self.request_close();
    }

    /// Owner-pushed tuple for controlled usage.
    pub fn set_value(&mut self, value: RangeValue<A::Date>) {
        if let Some(start) = value.start() {
            self.start_page = start.clone();
        }
        self.value.set(Some(value.clone()));
        self.calendar = value;
        self.invalid = [false; 2];
    }

    /// Typed text updates one field's draft only; submission happens on
    /// enter or blur through `trigger_submit(None)`.
    pub fn input_text(&mut self, index: usize, text: &str) -> SubmitResult {
        let patterns = super::parse_patterns(&self.options.base);
        let formats: Vec<&str> = patterns.iter().map(String::as_str).collect();
        match self
            .adapter
            .parse(&self.options.base.locale, text, &formats)
        {
            Some(date) => {
                if self.field_disabled(index, &date) {
                    self.invalid[index] = true;
                    return Err(PickerError::ValueDisabled);
                }
                self.invalid[index] = false;
                self.visited[index] = true;
                self.set_calendar_field(index, date);
                Ok(())
            }
            None => {
                self.invalid[index] = true;
                Err(PickerError::ParseFailed {
                    text: text.to_string(),
                })
            }
        }
    }

    /// Generated time columns for the active field's draft, when the
    /// picker shows time at all.
    pub fn time_columns(&self) -> Option<TimeColumns> {
        let config = self.options.base.time.as_ref()?;
        let index = self.active_or_first_enabled();
        let current = self
            .calendar
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.adapter.now());
        Some(time_select::columns(
            &self.adapter,
            config,
            &self.options.base.locale,
            &current,
        ))
    }

    fn set_mode(&mut self, mode: PanelMode) {
        if self.mode != mode {
            self.mode = mode;
            self.events.push(RangeEvent::PanelChange { mode });
        }
    }

    /// Header click toward the coarser mode.
    pub fn drill_up(&mut self) {
        if let Some(mode) = panel::enclosing_mode(self.options.base.granularity, self.mode) {
            self.set_mode(mode);
        }
    }

    /// Step the start page by one unit or one super-unit; the end page
    /// follows through the forced offset.
    pub fn page(&mut self, dir: i32, super_unit: bool) {
        self.start_page =
            panel::page_step(&self.adapter, self.mode, &self.start_page, dir, super_unit);
    }

    pub fn request_open(&mut self) {
        self.scheduler.request(true);
    }

    pub fn request_close(&mut self) {
        self.scheduler.request(false);
    }

    /// Apply the deferred open/close request, if one is pending.
    pub fn tick(&mut self) {
        if let Some(open) = self.scheduler.tick() {
            self.apply_open(open);
        }
    }

    fn apply_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            self.mode = panel::initial_mode(
                self.options.base.granularity,
                self.options.base.time.is_some(),
            );
            self.visited = [false; 2];
            self.calendar = self.value();
            if let Some(start) = self.calendar.start() {
                self.start_page = start.clone();
            }
        } else {
            // closing flushes direct-commit pickers and rolls back
            // confirmed ones; a draft the flush rejects rolls back too
            self.scheduler.cancel();
            if self.options.base.resolved_needs_confirm() {
                self.calendar = self.value();
                self.invalid = [false; 2];
            } else if !self.ranges_equal(&self.calendar, &self.value())
                && self.trigger_submit(None).is_err()
            {
                self.calendar = self.value();
                self.invalid = [false; 2];
            }
            self.set_active(None);
        }
        self.events.push(RangeEvent::OpenChange { open });
    }
}
