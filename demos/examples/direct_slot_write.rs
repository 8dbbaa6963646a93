// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct slot writes.
//!
//! Writing a slot without going through the view lists is allowed but
//! reported. The list view takes the slot back the next time the list is
//! assigned.
//!
//! Run:
//! - `cargo run -p understory_demos --example direct_slot_write`

use understory_demos::Toolkit;
use understory_stackable_list::{Diagnostic, Position, SlotState, StackableListView};

fn main() {
    let mut toolkit = Toolkit::new(320.0, 2);
    let mut list = StackableListView::with_sink(Vec::<Diagnostic>::new());

    let title = toolkit.label("Title");
    let banner = toolkit.label("Banner placed directly");
    list.set_header_views(&mut toolkit, vec![title]);
    let _ = toolkit.run_layout(&mut list);

    list.set_slot_view(&mut toolkit, Position::Header, Some(banner));
    if let Some(diagnostic) = list.last_diagnostic() {
        println!("{diagnostic}");
    }
    assert_eq!(
        list.slot_state(Position::Header),
        SlotState::External(Some(banner))
    );
    println!("{}\n", toolkit.describe());

    list.set_header_views(&mut toolkit, vec![title]);
    let _ = toolkit.run_layout(&mut list);
    println!("{}", toolkit.describe());
    println!("diagnostics reported: {}", list.sink().len());
}
