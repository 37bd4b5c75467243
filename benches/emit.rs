//! Benchmarks for loading and rendering.

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use onto_shop::config::GeneratorConfig;
use onto_shop::entity::EntityKind;
use onto_shop::generator::Generator;
use onto_shop::graph::builder::SnapshotBuilder;
use onto_shop::graph::snapshot::KnowledgeSnapshot;
use onto_shop::loader;
use onto_shop::relation::Relation;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/logistics.ttl")
}

/// Many domains, each with a handful of parameterized operators.
fn wide_kb(domains: usize, operators: usize) -> KnowledgeSnapshot {
    let mut b = SnapshotBuilder::new();
    let at = b.labeled("urn:at", "at");
    b.set_comment(at, "Parameters: [x;y]");
    let x = b.entity("urn:x");
    b.assert(at, Relation::PrHasParameter, x);

    for d in 0..domains {
        let domain = b.labeled(&format!("urn:d{d}"), &format!("D{d}"));
        b.set_kind(domain, EntityKind::DomainDefinition);
        for o in 0..operators {
            let op = b.labeled(&format!("urn:d{d}/op{o}"), &format!("op{o}"));
            b.set_comment(op, "Parameters: [x;y]");
            b.assert(op, Relation::OpHasParameter, x);
            b.assert(op, Relation::OpHasPrecondition, at);
            b.assert(op, Relation::AddsPredicate, at);
            b.assert(domain, Relation::HasOperator, op);
        }
    }
    b.build()
}

fn bench_load_turtle(c: &mut Criterion) {
    let path = fixture();
    let config = GeneratorConfig::default();
    c.bench_function("load_logistics_ttl", |bench| {
        bench.iter(|| black_box(loader::load_path(&path, None, &config).unwrap()))
    });
}

fn bench_generate(c: &mut Criterion) {
    let kb = wide_kb(64, 32);
    let sequential = Generator::new(&kb, GeneratorConfig::default());
    let parallel = Generator::new(
        &kb,
        GeneratorConfig {
            parallel: true,
            ..Default::default()
        },
    );

    c.bench_function("generate_64x32_sequential", |bench| {
        bench.iter(|| black_box(sequential.generate().text()))
    });
    c.bench_function("generate_64x32_parallel", |bench| {
        bench.iter(|| black_box(parallel.generate().text()))
    });
}

criterion_group!(benches, bench_load_turtle, bench_generate);
criterion_main!(benches);
