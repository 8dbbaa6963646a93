// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: slot positions, slot contents, tagged slot writes.

use kurbo::Rect;

/// One of the two single-view slots a list view offers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The slot above the first row.
    Header,
    /// The slot below the last row.
    Footer,
}

impl Position {
    /// Both positions, header first.
    pub const ALL: [Self; 2] = [Self::Header, Self::Footer];

    pub(crate) fn change_flag(self) -> LayoutChanges {
        match self {
            Self::Header => LayoutChanges::HEADER,
            Self::Footer => LayoutChanges::FOOTER,
        }
    }
}

/// What occupies a host slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotContent<K> {
    /// The list view's own stack container for that position.
    Stack,
    /// A single view placed there directly, bypassing the view lists.
    View(K),
}

/// Who asked for a slot write.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WriteOrigin {
    /// The list view, while reconciling its own state.
    Internal,
    /// Anyone else. Always diagnosed.
    External,
}

/// A single write to a host slot.
///
/// Every write carries its origin, so classifying it never depends on
/// state shared with other writes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotWrite<K> {
    /// Slot being written.
    pub position: Position,
    /// New content, or `None` to unset the slot.
    pub content: Option<SlotContent<K>>,
    /// Frame for the new content.
    ///
    /// Set for stack content; the host should size the slot to it.
    /// `None` when clearing or when installing an external view, which keeps
    /// its own frame.
    pub frame: Option<Rect>,
    /// Who asked for the write.
    pub origin: WriteOrigin,
}

impl<K> SlotWrite<K> {
    pub(crate) fn attach_stack(position: Position, frame: Rect) -> Self {
        Self {
            position,
            content: Some(SlotContent::Stack),
            frame: Some(frame),
            origin: WriteOrigin::Internal,
        }
    }

    pub(crate) fn clear(position: Position) -> Self {
        Self {
            position,
            content: None,
            frame: None,
            origin: WriteOrigin::Internal,
        }
    }

    pub(crate) fn external(position: Position, view: Option<K>) -> Self {
        Self {
            position,
            content: view.map(SlotContent::View),
            frame: None,
            origin: WriteOrigin::External,
        }
    }
}

/// Reconciliation state of one slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotState<K> {
    /// The view list is empty and the slot is unset.
    #[default]
    Empty,
    /// The view list is non-empty and the slot holds the stack container.
    Attached,
    /// The slot was written directly.
    ///
    /// `Some(view)` if a view was installed, `None` if the slot was cleared.
    /// Measurement is suspended until the view list is next assigned.
    External(Option<K>),
}

impl<K> SlotState<K> {
    /// True if the slot currently shows the stack container.
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached)
    }
}

bitflags::bitflags! {
    /// Slots reassigned by a layout pass.
    ///
    /// When non-empty the host must re-flow its content to account for the
    /// new header or footer height.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LayoutChanges: u8 {
        /// The header slot was resized.
        const HEADER = 0b0000_0001;
        /// The footer slot was resized.
        const FOOTER = 0b0000_0010;
    }
}
