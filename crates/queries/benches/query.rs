#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ethspam_queries::{test_utils::MockState, MethodWeights, QueriesGenerator, RpcMethod, State};
use std::hint::black_box;

/// Benchmark sampling from weight tables of different widths
fn sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Query sampling");

    let tables = [
        ("infura_2019", MethodWeights::default()),
        ("uniform", RpcMethod::all_variants().iter().map(|method| (*method, 1)).collect()),
    ];

    for (name, weights) in tables {
        let generator = QueriesGenerator::from_weights(weights).unwrap();
        let state = MockState::seeded(42);

        group.bench_function(BenchmarkId::new("pick", name), |b| {
            b.iter(|| black_box(generator.pick(state.rand_i64()).unwrap()));
        });

        group.bench_function(BenchmarkId::new("query", name), |b| {
            b.iter(|| black_box(generator.query(&state).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(query, sampling);
criterion_main!(query);
