// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the filter hot path and the harness.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use illogic_core::{Evaluator, SubtractiveFilter};
use illogic_types::Sample;

// ── SubtractiveFilter.apply() ───────────────────────────────────────

fn bench_apply_short_text(c: &mut Criterion) {
    let sf = SubtractiveFilter::new();
    c.bench_function("apply_short_text", |b| {
        b.iter(|| {
            let r = sf.apply(black_box("Cats always land on their feet and never fall."));
            sf.reset();
            r
        })
    });
}

fn bench_apply_long_text(c: &mut Criterion) {
    let sf = SubtractiveFilter::new();
    let text = (0..200)
        .map(|i| format!("Sentence number {i} states a plain fact."))
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("apply_long_text_200_sentences", |b| {
        b.iter(|| {
            let r = sf.apply(black_box(text.as_str()));
            sf.reset();
            r
        })
    });
}

fn bench_apply_sequence(c: &mut Criterion) {
    let sf = SubtractiveFilter::new();
    let items: Vec<_> = (0..1000).map(|i| json!(i % 7)).collect();
    c.bench_function("apply_sequence_1000", |b| {
        b.iter(|| {
            let r = sf.apply(black_box(items.clone()));
            sf.reset();
            r
        })
    });
}

// ── Evaluator.evaluate() ────────────────────────────────────────────

fn bench_evaluate_1000_samples(c: &mut Criterion) {
    let samples: Vec<Sample> = (0..1000)
        .map(|i| {
            if i % 2 == 0 {
                Sample::new("It is always true and never false.", true).with_group("synthetic")
            } else {
                Sample::new("Water boils at one hundred degrees.", false).with_group("clean")
            }
        })
        .collect();
    let sf = SubtractiveFilter::new();
    let evaluator = Evaluator::default();
    c.bench_function("evaluate_1000_samples", |b| {
        b.iter(|| {
            let m = evaluator.evaluate(black_box(&samples), &sf);
            sf.reset();
            m
        })
    });
}

criterion_group!(
    benches,
    bench_apply_short_text,
    bench_apply_long_text,
    bench_apply_sequence,
    bench_evaluate_1000_samples,
);
criterion_main!(benches);
