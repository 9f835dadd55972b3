use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::random;
use rbfp::{b16, b32, RoundingMode};

fn bench_bin32(c: &mut Criterion) {
    let mut group = c.benchmark_group("bin32");
    let mut data = [(0u32, 0u32); 1 << 14];
    for v in &mut data {
        *v = (random(), random());
    }

    group.bench_function("add", |b| {
        let vals = data.map(|(x, y)| (b32::from_bits(x), b32::from_bits(y)));
        let mut i = 0;
        b.iter(|| {
            let (lhs, rhs) = vals[i % vals.len()];
            black_box(black_box(lhs).add(black_box(rhs), RoundingMode::ToNearestEven));
            i += 1;
        });
    });
    group.bench_function("mul", |b| {
        let vals = data.map(|(x, y)| (b32::from_bits(x), b32::from_bits(y)));
        let mut i = 0;
        b.iter(|| {
            let (lhs, rhs) = vals[i % vals.len()];
            black_box(black_box(lhs).mul(black_box(rhs), RoundingMode::ToNearestEven));
            i += 1;
        });
    });
    group.bench_function("div", |b| {
        let vals = data.map(|(x, y)| (b32::from_bits(x), b32::from_bits(y)));
        let mut i = 0;
        b.iter(|| {
            let (lhs, rhs) = vals[i % vals.len()];
            black_box(black_box(lhs).div(black_box(rhs), RoundingMode::ToNegativeInf));
            i += 1;
        });
    });
    group.finish();
}

fn bench_bin16(c: &mut Criterion) {
    let mut group = c.benchmark_group("bin16");
    let mut data = [(0u16, 0u16); 1 << 14];
    for v in &mut data {
        *v = (random(), random());
    }

    group.bench_function("add", |b| {
        let vals = data.map(|(x, y)| (b16::from_bits(x), b16::from_bits(y)));
        let mut i = 0;
        b.iter(|| {
            let (lhs, rhs) = vals[i % vals.len()];
            black_box(black_box(lhs).add(black_box(rhs), RoundingMode::ToNearestEven));
            i += 1;
        });
    });
    group.bench_function("mul", |b| {
        let vals = data.map(|(x, y)| (b16::from_bits(x), b16::from_bits(y)));
        let mut i = 0;
        b.iter(|| {
            let (lhs, rhs) = vals[i % vals.len()];
            black_box(black_box(lhs).mul(black_box(rhs), RoundingMode::ToNearestEven));
            i += 1;
        });
    });
    group.finish();
}

criterion_group!(benches, bench_bin32, bench_bin16);
criterion_main!(benches);
