//! Benchmark template compilation, rendering and pagination.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use benches::{context, repeat, BLOG};
use quill::pagination::{window, Paginator};

criterion_main! { benches }
criterion_group! { benches, bench_compile, bench_render, bench_pagination }

/// Benchmarks the time taken to compile a template.
fn bench_compile(c: &mut Criterion) {
    let mut g = c.benchmark_group("compile");
    let source = repeat(BLOG, 50);
    let engine = quill::Engine::new();
    g.bench_function("blog", |b| {
        b.iter(|| engine.compile(&source).unwrap());
    });
}

/// Benchmarks the time taken to render a template as a string.
fn bench_render(c: &mut Criterion) {
    let mut g = c.benchmark_group("render");
    let source = repeat(BLOG, 20);
    let ctx = context::random(2_000);
    let mut engine = quill::Engine::new();
    engine.add_template("bench", &source).unwrap();

    g.bench_function("serialize", |b| {
        let template = engine.get_template("bench").unwrap();
        b.iter(|| template.render(&ctx).unwrap());
    });

    let value = serde_json::to_value(&ctx).unwrap();
    g.bench_function("value", |b| {
        let template = engine.get_template("bench").unwrap();
        b.iter(|| template.render_from(&value).unwrap());
    });
}

/// Benchmarks computing the page links for a long listing.
fn bench_pagination(c: &mut Criterion) {
    let mut g = c.benchmark_group("pagination");
    g.bench_function("window", |b| {
        b.iter(|| window(black_box(500), black_box(1_000), black_box(9)).unwrap());
    });
    let paginator = Paginator::builder().page_show(11).build().unwrap();
    g.bench_function("links", |b| {
        b.iter(|| paginator.page(black_box(10_000), black_box(500)).links().unwrap());
    });
}
