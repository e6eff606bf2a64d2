mod utils;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use istanbul_remap::{CoverageMap, CoverageTransformer, OutputStyle, Remapper};
use utils::*;

fn transform_cold(coverage: CoverageMap) {
    black_box(CoverageTransformer::new().transform(coverage));
}

fn benchmark_transform(c: &mut Criterion) {
    let bundle = bundle();
    #[rustfmt::skip]
    let cases = [
        ("1", copies(&bundle, 1), BatchSize::SmallInput),
        ("100", copies(&bundle, 100), BatchSize::SmallInput),
        ("10000", copies(&bundle, 10_000), BatchSize::LargeInput),
    ];
    for (name, coverage, batch_size) in cases {
        let mut bg = c.benchmark_group(format!("transform({name})"));
        bg.bench_with_input("cold", &coverage, |b, input| {
            b.iter_batched(|| input.clone(), transform_cold, batch_size)
        });
        let mut transformer = CoverageTransformer::new();
        bg.bench_with_input("cached", &coverage, |b, input| {
            b.iter_batched(
                || input.clone(),
                |coverage| black_box(transformer.transform(coverage)),
                batch_size,
            )
        });
        let json = coverage.to_vec().unwrap();
        bg.bench_with_input("json", &json, |b, input| {
            let mut remapper = Remapper::new().with_style(OutputStyle::Compact);
            b.iter(|| black_box(remapper.transform_coverage_bytes(input).unwrap()))
        });
    }
}

criterion_group!(transform, benchmark_transform);
criterion_main!(transform);
