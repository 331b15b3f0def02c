// Integration tests for full picker interaction flows
// Drives the public API the way an embedding application would

mod fixtures;

use anyhow::Result;
use fixtures::{dates, options};
use rust_datepicker::adapter::ChronoAdapter;
use rust_datepicker::models::config::Preset;
use rust_datepicker::models::value::{RangeValue, ValueSource};
use rust_datepicker::picker::{
    MaskedInput, PickerEvent, RangeEvent, RangePicker, SinglePicker,
};
use rust_datepicker::services::mask::MaskFormat;
use rust_datepicker::services::time_select::TimeField;

fn open(picker: &mut SinglePicker<ChronoAdapter>) {
    picker.request_open();
    picker.tick();
    picker.drain_events();
}

#[test]
fn datetime_confirmation_flow() -> Result<()> {
    let mut picker = SinglePicker::new(
        ChronoAdapter,
        options::date_time(),
        ValueSource::Uncontrolled(None),
    );
    open(&mut picker);

    // picking a date and a time only moves the draft
    picker.select_cell(dates::aug_6_2026())?;
    picker.select_unit(TimeField::Hour, 14)?;
    picker.select_unit(TimeField::Minute, 30)?;
    assert_eq!(picker.value(), None);
    assert_eq!(picker.calendar_value(), Some(&dates::at(2026, 8, 6, 14, 30)));

    // the OK action commits, reports, and closes
    picker.trigger_ok()?;
    assert_eq!(picker.value(), Some(dates::at(2026, 8, 6, 14, 30)));
    assert_eq!(picker.text(), "08/06/2026 14:30:00");
    let events = picker.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PickerEvent::Ok { value: Some(_) })));
    picker.tick();
    assert!(!picker.is_open());
    Ok(())
}

#[test]
fn masked_typing_feeds_the_picker() -> Result<()> {
    let mut picker = SinglePicker::new(
        ChronoAdapter,
        options::date(),
        ValueSource::Uncontrolled(None),
    );
    open(&mut picker);

    // the keyboard editor produces exactly the text the parser accepts
    let mut editor = MaskedInput::new(MaskFormat::parse("MM/DD/YYYY"), 2026);
    for digit in [0, 8, 0, 6, 2, 0, 2, 6] {
        editor.input_digit(digit);
    }
    assert_eq!(editor.text(), "08/06/2026");

    picker.input_text(&editor.text())?;
    picker.trigger_submit(None)?;
    assert_eq!(picker.value(), Some(dates::aug_6_2026()));
    Ok(())
}

#[test]
fn range_selection_chain_and_forced_offset() -> Result<()> {
    let mut picker = RangePicker::new(
        ChronoAdapter,
        options::date_range(),
        ValueSource::Uncontrolled(None),
    );
    picker.focus_field(0);
    picker.tick();
    picker.drain_events();

    picker.select_cell(dates::aug_6_2026())?;
    // the empty end panel never shows the start page
    assert_eq!(picker.end_page(), dates::at(2026, 9, 6, 0, 0));
    assert_eq!(picker.active(), Some(1));

    picker.select_cell(dates::aug_10_2026())?;
    assert_eq!(
        picker.value(),
        RangeValue::new(Some(dates::aug_6_2026()), Some(dates::aug_10_2026()))
    );
    let events = picker.drain_events();
    let changes = events
        .iter()
        .filter(|e| matches!(e, RangeEvent::Change { .. }))
        .count();
    assert_eq!(changes, 1, "one Change per completed selection chain");
    Ok(())
}

#[test]
fn partial_range_flushes_on_close() -> Result<()> {
    let mut opts = options::date_range();
    opts.allow_empty = [false, true];
    let mut picker = RangePicker::new(ChronoAdapter, opts, ValueSource::Uncontrolled(None));
    picker.focus_field(0);
    picker.tick();

    picker.select_cell(dates::aug_6_2026())?;
    picker.request_close();
    picker.tick();
    assert_eq!(
        picker.value(),
        RangeValue::new(Some(dates::aug_6_2026()), None)
    );
    assert_eq!(picker.texts(), ["08/06/2026".to_string(), String::new()]);
    Ok(())
}

#[test]
fn controlled_picker_defers_to_owner() -> Result<()> {
    let mut picker = SinglePicker::new(
        ChronoAdapter,
        options::date(),
        ValueSource::Controlled(Some(dates::aug_6_2026())),
    );
    open(&mut picker);
    picker.select_cell(dates::aug_10_2026())?;

    // the committed value waits for the owner even though Change fired
    assert_eq!(picker.value(), Some(dates::aug_6_2026()));
    let events = picker.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PickerEvent::Change { value: Some(_), .. })));

    picker.set_value(Some(dates::aug_10_2026()));
    assert_eq!(picker.value(), Some(dates::aug_10_2026()));
    assert_eq!(picker.text(), "08/10/2026");
    Ok(())
}

#[test]
fn presets_and_clear_bypass_validation() -> Result<()> {
    let mut opts = options::date();
    // everything is disabled, yet explicit empty overrides still commit
    opts.disabled_date = Some(Box::new(|_, _| true));
    opts.presets.push(Preset::new("Unset", None));
    let mut picker = SinglePicker::new(
        ChronoAdapter,
        opts,
        ValueSource::Uncontrolled(Some(dates::leap_day_2024())),
    );

    picker.apply_preset(0)?;
    assert_eq!(picker.value(), None);

    // a clear succeeds even when the empty-allowed matrix forbids an
    // empty end field; the override is unconditional
    let mut range_opts = options::date_range();
    range_opts.allow_empty = [true, false];
    let mut range = RangePicker::new(
        ChronoAdapter,
        range_opts,
        ValueSource::Uncontrolled(Some(RangeValue::new(
            Some(dates::aug_6_2026()),
            Some(dates::aug_10_2026()),
        ))),
    );
    range.clear();
    assert_eq!(range.value(), RangeValue::EMPTY);
    Ok(())
}

#[test]
fn month_granularity_drills_from_decade() -> Result<()> {
    use rust_datepicker::locale::Locale;
    use rust_datepicker::models::config::PickerOptions;
    use rust_datepicker::models::granularity::{Granularity, PanelMode};

    let mut picker = SinglePicker::new(
        ChronoAdapter,
        PickerOptions::new(Granularity::Month, Locale::en_us()),
        ValueSource::Uncontrolled(None),
    );
    open(&mut picker);
    assert_eq!(picker.mode(), PanelMode::Month);
    picker.drill_up();
    picker.drill_up();
    assert_eq!(picker.mode(), PanelMode::Decade);

    picker.select_cell(dates::at(2020, 1, 1, 0, 0))?;
    assert_eq!(picker.mode(), PanelMode::Year);
    picker.select_cell(dates::at(2026, 1, 1, 0, 0))?;
    assert_eq!(picker.mode(), PanelMode::Month);
    assert_eq!(picker.value(), None);

    // the terminal month click is the committing selection
    picker.select_cell(dates::at(2026, 8, 1, 0, 0))?;
    assert_eq!(picker.value(), Some(dates::at(2026, 8, 1, 0, 0)));
    assert_eq!(picker.text(), "2026-08");
    Ok(())
}

#[test]
fn year_boundary_paging_stays_consistent() {
    let mut picker = SinglePicker::new(
        ChronoAdapter,
        options::date(),
        ValueSource::Uncontrolled(Some(dates::new_years_eve_2026())),
    );
    open(&mut picker);
    picker.page(1, false);
    assert_eq!(picker.picker_value(), &dates::at(2027, 1, 31, 23, 59));
    picker.page(-1, true);
    assert_eq!(picker.picker_value(), &dates::at(2026, 1, 31, 23, 59));
}
