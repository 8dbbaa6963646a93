// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackable list basics.
//!
//! Compose a header and a footer from several views, run layout, then swap
//! views in and out the way a settings screen would toggle them.
//!
//! Run:
//! - `cargo run -p understory_demos --example stackable_list_basics`

use understory_demos::Toolkit;
use understory_stackable_list::{Position, StackableListView};

fn main() {
    let mut toolkit = Toolkit::new(320.0, 4);
    let mut list = StackableListView::new();

    let slider = toolkit.slider();
    let lorem = toolkit.label(
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor.",
    );
    let tags = toolkit.tags(12);
    let credits = toolkit.label("Made with Understory");

    list.set_header_views(&mut toolkit, vec![slider, lorem]);
    list.set_footer_views(&mut toolkit, vec![tags, credits]);
    let changes = toolkit.run_layout(&mut list);
    println!("first layout reassigned {changes:?}");
    println!("{}\n", toolkit.describe());

    // Toggle the slider off: the label stays where it is.
    list.set_header_views(&mut toolkit, vec![lorem]);
    let changes = toolkit.run_layout(&mut list);
    println!("without slider, reassigned {changes:?}");
    println!("{}\n", toolkit.describe());

    // Toggle it back on: it is appended after the label.
    list.set_header_views(&mut toolkit, vec![slider, lorem]);
    let _ = toolkit.run_layout(&mut list);
    println!("{}\n", toolkit.describe());
    assert_eq!(toolkit.stack_children(Position::Header), &[lorem, slider]);

    // Emptying the footer list unsets the footer slot.
    list.set_footer_views(&mut toolkit, vec![]);
    let _ = toolkit.run_layout(&mut list);
    println!("{}", toolkit.describe());
    assert!(toolkit.slot_frame(Position::Footer).is_none());
}
