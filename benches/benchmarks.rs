//! Performance benchmarks for the configurator core.
//!
//! Measures the hot paths a renderer hits on every keypress:
//! - Full view projection while browsing and while editing
//! - A color application followed by re-projection
//! - Script parsing

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gearsmith::catalog::{Catalog, GearType, Hex};
use gearsmith::engine::Session;
use gearsmith::script;

fn editing_session() -> Session {
    let mut session = Session::start(Catalog::standard(), GearType::Gloves, true);
    session.open_editor();
    session.set_active_zone(1);
    session
}

/// Benchmark projection of the style list screen.
fn bench_project_browsing(c: &mut Criterion) {
    let session = Session::default();

    c.bench_function("project_browsing", |b| b.iter(|| black_box(&session).view()));
}

/// Benchmark projection of the editor screen (palette page, preview, zone tabs).
fn bench_project_editing(c: &mut Criterion) {
    let session = editing_session();

    c.bench_function("project_editing", |b| b.iter(|| black_box(&session).view()));
}

/// Benchmark one recolor round trip as the TUI performs it.
fn bench_apply_and_project(c: &mut Criterion) {
    let mut session = editing_session();
    let colors: Vec<Hex> = session
        .catalog()
        .palette()
        .iter()
        .map(|entry| entry.color)
        .collect();

    c.bench_function("apply_color_and_project", |b| {
        let mut idx = 0;
        b.iter(|| {
            idx = (idx + 1) % colors.len();
            let _ = session.apply_color(black_box(colors[idx]));
            session.view()
        })
    });
}

/// Benchmark parsing a long action script.
fn bench_script_parse(c: &mut Criterion) {
    let source = "gear shorts\ntoggle style-2\nopen\nzone 1\ncolor #2E8B57\nnext\nprev\nclose\n"
        .repeat(128);

    c.bench_function("script_parse_1024_lines", |b| {
        b.iter(|| script::parse(black_box(&source)))
    });
}

criterion_group!(
    benches,
    bench_project_browsing,
    bench_project_editing,
    bench_apply_and_project,
    bench_script_parse,
);
criterion_main!(benches);
