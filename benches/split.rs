//! Split generation benchmark.
//!
//! Measures map materialization over configurations spanning small and
//! large simulation counts. Cost is dominated by
//! n_ticks * C(n_folds, n_test_folds).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cpcv::{CpcvConfig, CpcvSplitter, EmbargoConfig};

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for &(n_ticks, n_folds, n_test_folds) in &[
        (10_000, 10, 2),   // 45 simulations
        (10_000, 12, 4),   // 495 simulations
        (100_000, 10, 2),  // tall matrices
    ] {
        let config = CpcvConfig::new(n_ticks, n_folds, n_test_folds, EmbargoConfig::symmetric(50));
        let splitter = CpcvSplitter::new(config).unwrap();
        let id = format!("{n_ticks}x{n_folds}c{n_test_folds}");
        group.bench_function(&id, |b| b.iter(|| black_box(splitter.split())));
    }

    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
