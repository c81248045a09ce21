// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use entryway_input::kurbo::Point;
use entryway_input::{Modifiers, PointerInput};
use entryway_selection::{Identify, Selection};

#[derive(Clone)]
struct Entry(u32);

impl Identify for Entry {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0
    }
}

fn entries(len: usize) -> Vec<Entry> {
    (0..(len as u32)).map(Entry).collect()
}

fn bench_select_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/select_all");

    for len in [128_usize, 512, 2_048, 8_192] {
        let list = entries(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("select_all", len), &list, |b, list| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.select_all(list);
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_range_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/range_fill");

    // Hypothesis: filling a range of n entries is O(n^2) because membership
    // is an equality scan over the already-selected ids.
    for len in [128_usize, 512, 2_048] {
        let list = entries(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("shift_click_span", len), &list, |b, list| {
            let plain = PointerInput::primary(Point::ZERO);
            let shift = plain.with_modifiers(Modifiers::SHIFT);
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.select_with_click(list, &list[0], &plain);
                    sel.select_with_click(list, &list[list.len() - 1], &shift);
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rebind(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/rebind");

    // A select-all over `len` entries rebound to a list with half of them
    // removed: the scan purge is quadratic, the hashed purge linear.
    for len in [128_usize, 512, 2_048, 8_192] {
        let list = entries(len);
        let survivors: Vec<Entry> = list.iter().filter(|e| e.0 % 2 == 0).cloned().collect();

        let mut seed = Selection::<u32>::new();
        seed.select_all(&list);

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("rebind", len), &survivors, |b, survivors| {
            b.iter_batched(
                || seed.clone(),
                |mut sel| {
                    sel.rebind(survivors);
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("rebind_hashed", len),
            &survivors,
            |b, survivors| {
                b.iter_batched(
                    || seed.clone(),
                    |mut sel| {
                        sel.rebind_hashed(survivors);
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_all,
    bench_range_fill,
    bench_rebind
);
criterion_main!(benches);
