// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for rating row layout and hit testing.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_rating_layout::compute_row_layout;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("rating_layout/compute");

    // Rows up to `INLINE_BUTTONS` stay inline; longer rows spill to the heap.
    for count in [3_usize, 5, 8, 16, 64] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                black_box(compute_row_layout(
                    black_box(Size::new(375.0, 80.0)),
                    count,
                    black_box(1.3),
                ))
            });
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("rating_layout/hit_test_x");

    for count in [5_usize, 64] {
        let layout = compute_row_layout(Size::new(375.0, 80.0), count, 1.3);
        let xs: Vec<f64> = (0..256).map(|i| f64::from(i) * 375.0 / 255.0).collect();
        group.throughput(Throughput::Elements(xs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &xs, |b, xs| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &x in xs {
                    if layout.hit_test_x(black_box(x)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_hit_test);
criterion_main!(benches);
