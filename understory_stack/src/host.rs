// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities a stack container relies on.
//!
//! The container never measures or arranges views itself. It asks the host
//! toolkit for fitting sizes and tells the host when a re-layout is needed.

use kurbo::Size;

use crate::types::{Axis, StackConfig};

/// Measurement provided by the host toolkit.
pub trait StackMeasure<K: Copy> {
    /// The compressed fitting size of a single view: the smallest size that
    /// still shows its current content.
    fn fitting_size(&self, view: K) -> Size;

    /// The fitting size of `children` arranged as a stack.
    ///
    /// The provided implementation lays children end to end along the main
    /// axis (inserting `config.spacing` between neighbours) and takes the
    /// largest cross-axis extent. Toolkits with a native stack should override
    /// this and report what their own stack computes.
    fn stack_fitting_size(&self, children: &[K], config: &StackConfig) -> Size {
        let mut main = 0.0;
        let mut cross = 0.0_f64;
        for (i, &child) in children.iter().enumerate() {
            let size = self.fitting_size(child);
            let (m, c) = match config.axis {
                Axis::Vertical => (size.height, size.width),
                Axis::Horizontal => (size.width, size.height),
            };
            if i > 0 {
                main += config.spacing;
            }
            main += m;
            cross = cross.max(c);
        }
        match config.axis {
            Axis::Vertical => Size::new(cross, main),
            Axis::Horizontal => Size::new(main, cross),
        }
    }
}

/// Something that can be asked to recompute its layout on the next pass.
pub trait RequestLayout {
    /// Schedule a layout pass. Calling this repeatedly before the pass runs
    /// must be harmless.
    fn request_layout(&mut self);
}
