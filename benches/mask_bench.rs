// Benchmark for mask parsing and time grid snapping
// Measures the hot paths behind keystroke handling and column generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use rust_datepicker::adapter::{format_with, ChronoAdapter};
use rust_datepicker::locale::Locale;
use rust_datepicker::models::config::TimeConfig;
use rust_datepicker::services::mask::MaskFormat;
use rust_datepicker::services::time_select::find_valid_time;

const FORMATS: [&str; 4] = [
    "YYYY-MM-DD",
    "MM/DD/YYYY HH:mm:ss",
    "DD.MM.YYYY hh:mm A",
    "YYYY-MM-DD HH:mm:ss.SSS",
];

fn bench_mask_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_parse");

    for fmt in FORMATS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(fmt), fmt, |b, &fmt| {
            b.iter(|| MaskFormat::parse(black_box(fmt)));
        });
    }

    group.finish();
}

fn bench_caret_lookup(c: &mut Criterion) {
    let mask = MaskFormat::parse("MM/DD/YYYY HH:mm:ss");
    let width = mask.text_width();

    c.bench_function("caret_lookup_full_sweep", |b| {
        b.iter(|| {
            for caret in 0..=width {
                black_box(mask.cell_index_at(black_box(caret)));
            }
        });
    });
}

fn bench_format_render(c: &mut Criterion) {
    let adapter = ChronoAdapter;
    let locale = Locale::en_us();
    let date = NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let mut group = c.benchmark_group("format_render");

    for fmt in FORMATS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(fmt), fmt, |b, &fmt| {
            b.iter(|| format_with(&adapter, &locale, black_box(&date), black_box(fmt)));
        });
    }

    group.finish();
}

fn bench_time_snap(c: &mut Criterion) {
    let adapter = ChronoAdapter;
    let mut config = TimeConfig::default();
    config.minute_step = 15;
    config.disabled_units.hours = Some(Box::new(|| (0..8).collect()));
    let date = NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(3, 42, 17)
        .unwrap();

    c.bench_function("find_valid_time_snap", |b| {
        b.iter(|| find_valid_time(&adapter, black_box(&config), black_box(&date)));
    });
}

criterion_group!(
    benches,
    bench_mask_parse,
    bench_caret_lookup,
    bench_format_render,
    bench_time_snap
);
criterion_main!(benches);
