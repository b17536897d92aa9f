// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use demo_preview::catalog::parse_demo;
use demo_preview::ui::demo_preview::source::decode_component;
use demo_preview::ui::demo_preview::SourceMarkup;
use std::hint::black_box;

const BASIC_DEMO: &str = include_str!("../assets/demos/basic.toml");

fn show_code(content: &str) -> String {
    let table: toml::Table = toml::from_str(content).unwrap();
    let encoded = table["show_code"].as_str().unwrap();
    decode_component(encoded).unwrap()
}

fn markup_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_parsing");
    let html = show_code(BASIC_DEMO);

    group.bench_function("parse_highlighted_markup", |b| {
        b.iter(|| black_box(SourceMarkup::parse(black_box(&html))));
    });

    group.bench_function("parse_demo_file", |b| {
        b.iter(|| black_box(parse_demo("basic", black_box(BASIC_DEMO)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, markup_parsing_benchmark);
criterion_main!(benches);
