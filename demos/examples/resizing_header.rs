// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content-driven resizing.
//!
//! Dragging the slider changes its height. The toolkit only marks the slider's
//! stack dirty; the stack's layout pass requests a list layout, and the list
//! view re-measures and reassigns the header slot on its own.
//!
//! Run:
//! - `cargo run -p understory_demos --example resizing_header`

use understory_demos::Toolkit;
use understory_stackable_list::{Position, StackableListView};

fn main() {
    let mut toolkit = Toolkit::new(375.0, 4);
    let mut list = StackableListView::new();

    let slider = toolkit.slider();
    let caption = toolkit.label("Drag the slider to resize this header.");
    list.set_header_views(&mut toolkit, vec![slider, caption]);
    let _ = toolkit.run_layout(&mut list);

    for value in [25.0, 75.0, 150.0, 225.0, 300.0, 50.0] {
        toolkit.set_slider_value(slider, value);
        let changes = toolkit.run_layout(&mut list);
        let height = list.slot_height(Position::Header).unwrap_or_default();
        println!("slider {value:>5}: header height {height:>5}, reassigned {changes:?}");
    }

    // Narrowing the list re-wraps the caption, which also reaches the header.
    toolkit.set_label_text(
        caption,
        "Drag the slider to resize this header. Narrow lists wrap this caption onto more lines.",
    );
    toolkit.set_width(200.0);
    let _ = toolkit.run_layout(&mut list);
    println!("{}", toolkit.describe());
}
