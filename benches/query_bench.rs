#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use microprolog::{Engine, EngineConfig};

fn setup_family(people: usize) -> Engine {
    let mut engine = Engine::new();

    // every person has two children
    for i in 0..people {
        for child in [2 * i + 1, 2 * i + 2] {
            engine
                .add_fact_text(&format!("roditelj(p{i}, p{child})"))
                .unwrap();
        }
    }
    engine
        .add_rule_text("brat(X, Y)", &["roditelj(Z, X)", "roditelj(Z, Y)"])
        .unwrap();
    engine
        .add_rule_text("unuk(X, Y)", &["roditelj(Z, X)", "roditelj(Y, Z)"])
        .unwrap();
    engine
}

fn setup_chain(length: usize, max_depth: usize) -> Engine {
    let mut engine = Engine::with_config(EngineConfig::default().with_max_depth(max_depth));
    for i in 0..length {
        engine
            .add_rule_text(&format!("step(c{i})"), &[format!("step(c{})", i + 1)])
            .unwrap();
    }
    engine.add_fact_text(&format!("step(c{length})")).unwrap();
    engine
}

fn query_fact_lookup(c: &mut Criterion) {
    let engine = setup_family(500);

    c.bench_function("query_fact_lookup", |b| {
        b.iter(|| black_box(engine.query(black_box("roditelj(p10, Dijete)")).unwrap()));
    });
}

fn query_conjunctive_rule(c: &mut Criterion) {
    let engine = setup_family(500);

    c.bench_function("query_conjunctive_rule", |b| {
        b.iter(|| black_box(engine.query(black_box("unuk(p43, Djed)")).unwrap()));
    });
}

fn query_rule_chain(c: &mut Criterion) {
    let engine = setup_chain(64, 65);

    c.bench_function("query_rule_chain", |b| {
        b.iter(|| black_box(engine.query(black_box("step(c0)")).unwrap()));
    });
}

fn query_depth_cutoff(c: &mut Criterion) {
    let engine = setup_chain(64, 10);

    c.bench_function("query_depth_cutoff", |b| {
        b.iter(|| black_box(engine.query_with_diagnostics(black_box("step(c0)")).unwrap()));
    });
}

criterion_group!(
    benches,
    query_fact_lookup,
    query_conjunctive_rule,
    query_rule_chain,
    query_depth_cutoff
);
criterion_main!(benches);
