// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Raw operator throughput per storage width
// 2. Fraction Encoding - Digit-sequence construction cost
// 3. Boundary Conversions - Parsing and rust_decimal interop
//
// Multiplication and division run through the next wider width internally,
// so the 8/16/32-bit storages pay one widening step while 64-bit reuses
// itself.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixbits::prelude::*;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic_32(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic_fixed32_p15");

    let a = Fixed32::<15>::from_parts(123, 375);
    let b = Fixed32::<15>::from_parts(4, 5);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });
    group.bench_function("mul_int", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(3i32)))
    });

    group.finish();
}

fn benchmark_arithmetic_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic_fixed64_p31");

    let a = Fixed64::<31>::from_parts(123, 375);
    let b = Fixed64::<31>::from_parts(4, 5);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });

    group.finish();
}

// ============================================================================
// Fraction Encoding Benchmarks
// ============================================================================

fn benchmark_fraction_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_encoding");

    // same value written with more digits than the headroom resolves
    for digits in [5u32, 5_000, 5_000_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            digits,
            |bench, &digits| {
                bench.iter(|| black_box(Fixed32::<15>::from_parts(black_box(15), digits)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Boundary Conversion Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_conversions");

    group.bench_function("from_str", |bench| {
        bench.iter(|| black_box("123.375".parse::<Fixed32<15>>()))
    });
    group.bench_function("to_decimal", |bench| {
        let x = Fixed32::<15>::from_parts(123, 375);
        bench.iter(|| black_box(black_box(x).to_decimal()))
    });
    group.bench_function("display", |bench| {
        let x = Fixed32::<15>::from_parts(123, 375);
        bench.iter(|| black_box(x.to_string()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic_32,
    benchmark_arithmetic_64,
    benchmark_fraction_encoding,
    benchmark_parsing,
);
criterion_main!(benches);
