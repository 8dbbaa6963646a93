// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_stack::StackContainer;

fn filled(n: u32) -> StackContainer<u32> {
    let mut stack = StackContainer::new();
    let views: Vec<u32> = (0..n).collect();
    let _ = stack.set_children(&views);
    stack
}

fn bench_set_children(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_set_children");
    for &n in &[8_u32, 64, 512] {
        group.throughput(Throughput::Elements(u64::from(n)));

        let same: Vec<u32> = (0..n).collect();
        group.bench_function(format!("unchanged_{n}"), |b| {
            b.iter_batched(
                || filled(n),
                |mut stack| black_box(stack.set_children(black_box(&same))),
                BatchSize::SmallInput,
            );
        });

        // Drop the first half, append as many new views.
        let shifted: Vec<u32> = (n / 2..n + n / 2).collect();
        group.bench_function(format!("half_replaced_{n}"), |b| {
            b.iter_batched(
                || filled(n),
                |mut stack| black_box(stack.set_children(black_box(&shifted))),
                BatchSize::SmallInput,
            );
        });

        let disjoint: Vec<u32> = (n..2 * n).collect();
        group.bench_function(format!("all_replaced_{n}"), |b| {
            b.iter_batched(
                || filled(n),
                |mut stack| black_box(stack.set_children(black_box(&disjoint))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set_children);
criterion_main!(benches);
