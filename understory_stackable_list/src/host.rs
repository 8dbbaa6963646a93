// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface a host list view implements.

use understory_stack::{RequestLayout, StackMeasure};

use crate::types::{Position, SlotContent, SlotWrite};

/// A host list view with exactly one header slot and one footer slot.
///
/// The host owns the views, the two stack containers' on-screen
/// counterparts, and all geometry. [`StackableListView`](crate::StackableListView)
/// only tells it which content belongs in which slot and how tall it is.
///
/// Measurement comes from the [`StackMeasure`] supertrait and re-layout
/// requests from [`RequestLayout`].
pub trait ListHost<K: Copy>: StackMeasure<K> + RequestLayout {
    /// Current content of the slot at `position`.
    fn slot(&self, position: Position) -> Option<SlotContent<K>>;

    /// Apply a slot write.
    ///
    /// Reassigning the same content with a new frame is how the list view
    /// asks the host to re-flow around a resized header or footer, so hosts
    /// must not short-circuit writes whose content is unchanged.
    fn write_slot(&mut self, write: &SlotWrite<K>);

    /// Detach `view` from the stack container at `position` and from the
    /// display tree.
    fn remove_from_stack(&mut self, position: Position, view: K);

    /// Append `view` to the end of the stack container at `position`.
    fn append_to_stack(&mut self, position: Position, view: K);
}
