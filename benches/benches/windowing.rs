// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_virtual_window::{DisplayMetrics, VirtualListOptions, Windower, compute_window};

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/compute_window");

    // Pure arithmetic: cost should not depend on the row count.
    for total in [1_000_usize, 100_000, 10_000_000] {
        let offsets: Vec<f64> = (0..1_024).map(|i| f64::from(i) * 97.0).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(total), &offsets, |b, offsets| {
            b.iter(|| {
                for &offset in offsets {
                    black_box(compute_window(total, offset, 812.0, 75.0, 5));
                }
            });
        });
    }

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/scroll_sweep");

    // A fling in 3px ticks; most ticks fall under the half-row hysteresis gate.
    for total in [1_000_usize, 10_000] {
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter_batched(
                || {
                    let mut list = Windower::new(VirtualListOptions::default()).unwrap();
                    list.set_rows((0..total).collect::<Vec<_>>());
                    let request = list.attach(DisplayMetrics::new(375.0, 812.0), Duration::ZERO);
                    list.on_container_measured(request.attach_id, 700.0);
                    list
                },
                |mut list| {
                    let end = list.content_height();
                    let mut offset = 0.0;
                    while offset < end {
                        offset += 3.0;
                        black_box(list.on_scroll(offset));
                        list.drain_events().for_each(drop);
                    }
                    black_box(list.visible_range());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_scroll_sweep);
criterion_main!(benches);
