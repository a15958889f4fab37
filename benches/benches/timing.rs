// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `bolts_timing` state machines under event bursts.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use bolts_timing::{Debounce, Interval, Throttle};

fn bench_timing(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/burst");

    for events in [60_u64, 600] {
        group.bench_function(BenchmarkId::new("debounce", events), |b| {
            b.iter(|| {
                let mut settle = Debounce::new(50);
                let mut fired = 0;
                for t in 0..events {
                    settle.trigger(t * 16);
                    fired += u32::from(settle.poll(t * 16));
                }
                fired += u32::from(settle.poll(events * 16 + 50));
                black_box(fired)
            })
        });

        group.bench_function(BenchmarkId::new("throttle", events), |b| {
            b.iter(|| {
                let mut limit = Throttle::new(100);
                let passed = (0..events).filter(|t| limit.try_acquire(t * 16)).count();
                black_box(passed)
            })
        });

        group.bench_function(BenchmarkId::new("interval", events), |b| {
            b.iter(|| {
                let mut tick = Interval::new(25);
                tick.start(0);
                let fired = (1..=events).filter(|t| tick.on_frame(t * 16)).count();
                black_box(fired)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_timing);
criterion_main!(benches);
