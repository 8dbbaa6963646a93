// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for stack containers: axis, configuration, and child diffs.

use alloc::vec::Vec;

/// The axis children are stacked along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Children are stacked top to bottom.
    #[default]
    Vertical,
    /// Children are stacked leading to trailing.
    Horizontal,
}

/// Arrangement parameters for a [`StackContainer`](crate::StackContainer).
///
/// Children always fill the cross axis and are distributed to fill the main
/// axis. Only the axis and the gap between adjacent children are configurable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackConfig {
    /// Main axis.
    pub axis: Axis,
    /// Gap inserted between adjacent children along the main axis.
    pub spacing: f64,
}

impl StackConfig {
    /// Vertical stack with no spacing.
    pub const VERTICAL: Self = Self {
        axis: Axis::Vertical,
        spacing: 0.0,
    };
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::VERTICAL
    }
}

/// Result of [`StackContainer::set_children`](crate::StackContainer::set_children).
///
/// Hosts mirror this into their display tree: detach every view in
/// `removed` (in order), then append every view in `added` (in order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackDiff<K> {
    /// Views that left the stack, in the order they previously appeared.
    pub removed: Vec<K>,
    /// Views appended to the end of the stack, in the order of the new list.
    pub added: Vec<K>,
}

impl<K> StackDiff<K> {
    /// True when the children did not change.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

impl<K> Default for StackDiff<K> {
    fn default() -> Self {
        Self {
            removed: Vec::new(),
            added: Vec::new(),
        }
    }
}
