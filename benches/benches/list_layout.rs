// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_stack::{RequestLayout, StackMeasure};
use understory_stackable_list::{
    ListHost, Position, SlotContent, SlotWrite, StackableListView,
};

/// Host whose views all share one adjustable height.
struct Host {
    view_height: f64,
    slots: [Option<SlotContent<u32>>; 2],
}

impl StackMeasure<u32> for Host {
    fn fitting_size(&self, _view: u32) -> Size {
        Size::new(320.0, self.view_height)
    }
}

impl RequestLayout for Host {
    fn request_layout(&mut self) {}
}

impl ListHost<u32> for Host {
    fn slot(&self, position: Position) -> Option<SlotContent<u32>> {
        self.slots[position as usize]
    }

    fn write_slot(&mut self, write: &SlotWrite<u32>) {
        self.slots[write.position as usize] = write.content;
    }

    fn remove_from_stack(&mut self, _position: Position, _view: u32) {}

    fn append_to_stack(&mut self, _position: Position, _view: u32) {}
}

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_layout_pass");
    for &n in &[4_u32, 32, 256] {
        let mut host = Host {
            view_height: 20.0,
            slots: [None; 2],
        };
        let mut list = StackableListView::new();
        list.set_header_views(&mut host, (0..n).collect::<Vec<_>>());
        list.set_footer_views(&mut host, (n..2 * n).collect::<Vec<_>>());
        let _ = list.layout_pass(&mut host);

        group.bench_function(format!("settled_{n}"), |b| {
            b.iter(|| black_box(list.layout_pass(&mut host)));
        });

        group.bench_function(format!("resizing_{n}"), |b| {
            b.iter(|| {
                host.view_height = if host.view_height == 20.0 { 21.0 } else { 20.0 };
                black_box(list.layout_pass(&mut host))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_pass);
criterion_main!(benches);
