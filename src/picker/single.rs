// Single-value reconciliation engine
// Owns the committed/calendar/page value split and the event queue for one
// picker instance

use crate::adapter::{format_with, same_cell, DateAdapter};
use crate::models::config::{DisabledContext, PickerOptions};
use crate::models::granularity::PanelMode;
use crate::models::value::ValueSource;
use crate::picker::events::{PickerError, PickerEvent, SubmitResult};
use crate::services::panel::{self, Transition};
use crate::services::scheduler::FrameScheduler;
use crate::services::time_select::{self, TimeColumns, TimeField};
use crate::services::validity::ValidityContext;

/// State machine for one single-value picker.
///
/// Three values with different lifecycles flow through it. The committed
/// value is what the embedding application sees. The calendar value is the
/// transient in-panel draft, discarded on cancel. The picker value anchors
/// the visible page and never carries selection meaning.
pub struct SinglePicker<A: DateAdapter> {
    adapter: A,
    options: PickerOptions<A::Date>,
    value: ValueSource<A::Date>,
    calendar_value: Option<A::Date>,
    picker_value: A::Date,
    mode: PanelMode,
    open: bool,
    invalid: bool,
    scheduler: FrameScheduler,
    events: Vec<PickerEvent<A::Date>>,
}

impl<A: DateAdapter> SinglePicker<A> {
    pub fn new(adapter: A, options: PickerOptions<A::Date>, value: ValueSource<A::Date>) -> Self {
        if let Some(time) = &options.time {
            time.warn_on_misconfiguration();
        }
        let picker_value = value.current().unwrap_or_else(|| adapter.now());
        let mode = panel::initial_mode(options.granularity, options.time.is_some());
        SinglePicker {
            adapter,
            options,
            value,
            calendar_value: None,
            picker_value,
            mode,
            open: false,
            invalid: false,
            scheduler: FrameScheduler::new(),
            events: Vec::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn options(&self) -> &PickerOptions<A::Date> {
        &self.options
    }

    pub fn value(&self) -> Option<A::Date> {
        self.value.current()
    }

    pub fn calendar_value(&self) -> Option<&A::Date> {
        self.calendar_value.as_ref()
    }

    pub fn picker_value(&self) -> &A::Date {
        &self.picker_value
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// The value a commit would act on right now.
    pub fn effective_value(&self) -> Option<A::Date> {
        self.calendar_value.clone().or_else(|| self.value.current())
    }

    pub fn drain_events(&mut self) -> Vec<PickerEvent<A::Date>> {
        std::mem::take(&mut self.events)
    }

    fn is_disabled(&self, date: &A::Date) -> bool {
        let ctx = ValidityContext {
            adapter: &self.adapter,
            locale: &self.options.locale,
            granularity: self.options.granularity,
            min_date: self.options.min_date.as_ref(),
            max_date: self.options.max_date.as_ref(),
            disabled_date: self.options.disabled_date.as_ref(),
            time: self.options.time.as_ref(),
        };
        ctx.is_invalid(date, &DisabledContext::single())
    }

    /// Equality at the granularity's precision; never by representation.
    fn values_equal(&self, a: Option<&A::Date>, b: Option<&A::Date>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => same_cell(
                &self.adapter,
                &self.options.locale,
                self.options.granularity,
                a,
                b,
            ),
            _ => false,
        }
    }

    /// Render a value with the configured format, falling back to the
    /// locale default for the granularity.
    pub fn format_value(&self, date: &A::Date) -> String {
        super::render_value(&self.adapter, &self.options, date)
    }

    fn parse_patterns(&self) -> Vec<String> {
        super::parse_patterns(&self.options)
    }

    fn field_text(&self) -> String {
        self.value
            .current()
            .map(|v| self.format_value(&v))
            .unwrap_or_default()
    }

    /// Update the transient draft and keep the visible page under it.
    pub fn trigger_calendar_change(&mut self, date: A::Date) {
        if self.values_equal(self.calendar_value.as_ref(), Some(&date)) {
            return;
        }
        self.picker_value = date.clone();
        self.calendar_value = Some(date.clone());
        self.events.push(PickerEvent::CalendarChange {
            value: Some(date),
        });
    }

    fn commit(&mut self, candidate: Option<A::Date>) {
        let changed = !self.values_equal(self.value.current().as_ref(), candidate.as_ref());
        self.value.commit(candidate.clone());
        self.calendar_value = None;
        self.invalid = false;
        if let Some(v) = &candidate {
            self.picker_value = v.clone();
        }
        if changed {
            let text = candidate
                .as_ref()
                .map(|v| self.format_value(v))
                .unwrap_or_default();
            self.events.push(PickerEvent::Change {
                value: candidate,
                text,
            });
        }
    }

    /// Submit a value to the committed slot.
    ///
    /// `None` submits the current draft. `Some(None)` is the explicit
    /// clear override and commits unconditionally. `Some(Some(_))`
    /// validates the candidate first; rejection leaves the draft intact
    /// and flags the field invalid.
    pub fn trigger_submit(&mut self, candidate: Option<Option<A::Date>>) -> SubmitResult {
        match candidate {
            Some(None) => {
                self.commit(None);
                Ok(())
            }
            Some(Some(date)) => {
                if self.is_disabled(&date) {
                    self.invalid = true;
                    return Err(PickerError::ValueDisabled);
                }
                self.commit(Some(date));
                Ok(())
            }
            None => match self.effective_value() {
                Some(date) => self.trigger_submit(Some(Some(date))),
                None => {
                    self.commit(None);
                    Ok(())
                }
            },
        }
    }

    /// Confirm the current draft, emit `Ok`, and close.
    pub fn trigger_ok(&mut self) -> SubmitResult {
        let draft = self.effective_value();
        self.trigger_submit(draft.map(Some).or(Some(None)))?;
        self.events.push(PickerEvent::Ok {
            value: self.value.current(),
        });
        self.request_close();
        Ok(())
    }

    /// Handle a cell click at the current mode: drill down when a finer
    /// mode exists, otherwise select. Invalid terminal clicks are ignored.
    pub fn select_cell(&mut self, date: A::Date) -> SubmitResult {
        match panel::next_on_select(self.options.granularity, self.mode) {
            Transition::Drill(next) => {
                self.picker_value = date;
                self.set_mode(next);
                Ok(())
            }
            Transition::Commit => self.select_value(date),
        }
    }

    fn select_value(&mut self, date: A::Date) -> SubmitResult {
        let candidate = match &self.options.time {
            Some(config) => match time_select::find_valid_time(&self.adapter, config, &date) {
                Some(valid) => valid,
                None => {
                    self.invalid = true;
                    return Err(PickerError::ValueDisabled);
                }
            },
            None => date,
        };
        if self.is_disabled(&candidate) {
            self.invalid = true;
            return Err(PickerError::ValueDisabled);
        }
        self.invalid = false;
        self.trigger_calendar_change(candidate.clone());
        if !self.options.resolved_needs_confirm() {
            self.trigger_submit(Some(Some(candidate)))?;
            self.request_close();
        }
        Ok(())
    }

    /// Apply a clicked time unit onto the current draft.
    pub fn select_unit(&mut self, field: TimeField, value: u32) -> SubmitResult {
        let base = self
            .effective_value()
            .unwrap_or_else(|| self.adapter.now());
        let candidate = time_select::apply_unit(&self.adapter, field, value, &base);
        self.select_value(candidate)
    }

    /// Select the current moment through the locale's today/now shortcut.
    /// A disabled "now" is rejected like any other candidate.
    pub fn select_now(&mut self) -> SubmitResult {
        let now = self.adapter.now();
        let candidate = match &self.options.time {
            Some(config) => match time_select::find_valid_time(&self.adapter, config, &now) {
                Some(valid) => valid,
                None => {
                    self.invalid = true;
                    return Err(PickerError::ValueDisabled);
                }
            },
            None => now,
        };
        if self.is_disabled(&candidate) {
            self.invalid = true;
            return Err(PickerError::ValueDisabled);
        }
        self.trigger_calendar_change(candidate.clone());
        self.trigger_submit(Some(Some(candidate)))?;
        self.request_close();
        Ok(())
    }

    /// Submit a named preset wholesale. An empty preset is an explicit
    /// clear and bypasses validation like the clear action.
    pub fn apply_preset(&mut self, index: usize) -> SubmitResult {
        let Some(preset) = self.options.presets.get(index) else {
            return Ok(());
        };
        match preset.value.clone() {
            None => {
                self.clear();
                Ok(())
            }
            Some(date) => {
                let result = self.trigger_submit(Some(Some(date)));
                if result.is_ok() {
                    self.request_close();
                }
                result
            }
        }
    }

    /// The explicit whole-value clear override: commits the empty value
    /// without consulting validation.
    pub fn clear(&mut self) {
        self.commit(None);
        self.request_close();
    }

    /// Owner-pushed value for controlled usage.
    pub fn set_value(&mut self, value: Option<A::Date>) {
        if let Some(v) = &value {
            self.picker_value = v.clone();
        }
        self.value.set(value);
        self.calendar_value = None;
        self.invalid = false;
    }

    /// Typed text updates the draft only; submission happens on enter or
    /// blur through `trigger_submit(None)`.
    pub fn input_text(&mut self, text: &str) -> SubmitResult {
        let patterns = self.parse_patterns();
        let formats: Vec<&str> = patterns.iter().map(String::as_str).collect();
        match self.adapter.parse(&self.options.locale, text, &formats) {
            Some(date) => {
                if self.is_disabled(&date) {
                    self.invalid = true;
                    return Err(PickerError::ValueDisabled);
                }
                self.invalid = false;
                self.trigger_calendar_change(date);
                Ok(())
            }
            None => {
                self.invalid = true;
                Err(PickerError::ParseFailed {
                    text: text.to_string(),
                })
            }
        }
    }

    /// Generated time columns for the current draft, when the picker shows
    /// time at all.
    pub fn time_columns(&self) -> Option<TimeColumns> {
        let config = self.options.time.as_ref()?;
        let current = self
            .effective_value()
            .unwrap_or_else(|| self.adapter.now());
        Some(time_select::columns(
            &self.adapter,
            config,
            &self.options.locale,
            &current,
        ))
    }

    fn set_mode(&mut self, mode: PanelMode) {
        if self.mode != mode {
            self.mode = mode;
            self.events.push(PickerEvent::PanelChange { mode });
        }
    }

    /// Header click toward the coarser mode.
    pub fn drill_up(&mut self) {
        if let Some(mode) = panel::enclosing_mode(self.options.granularity, self.mode) {
            self.set_mode(mode);
        }
    }

    /// Step the visible page by one unit or one super-unit.
    pub fn page(&mut self, dir: i32, super_unit: bool) {
        self.picker_value =
            panel::page_step(&self.adapter, self.mode, &self.picker_value, dir, super_unit);
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
            self.mode = panel::initial_mode(self.options.granularity, self.options.time.is_some());
            if let Some(v) = self.value.current() {
                self.picker_value = v;
            }
        } else {
            // closing flushes direct-commit pickers and rolls back
            // confirmed ones
            self.scheduler.cancel();
            if self.options.resolved_needs_confirm() {
                self.calendar_value = None;
                self.invalid = false;
            } else if self.calendar_value.is_some() {
                let _ = self.trigger_submit(None);
            }
        }
        self.events.push(PickerEvent::OpenChange { open });
    }

    /// The committed value rendered for the field, empty when unset.
    pub fn text(&self) -> String {
        self.field_text()
    }
}
