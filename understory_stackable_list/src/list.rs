// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stackable list view: view lists, slot reconciliation, re-measurement.

use alloc::vec::Vec;
use core::hash::Hash;

use understory_stack::{StackConfig, StackContainer};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::host::ListHost;
use crate::types::{LayoutChanges, Position, SlotContent, SlotState, SlotWrite, WriteOrigin};

/// Per-position state: the caller's list, the lazily created container, and
/// what the host slot holds.
#[derive(Clone, Debug)]
struct Slot<K> {
    views: Vec<K>,
    stack: Option<StackContainer<K>>,
    state: SlotState<K>,
}

impl<K> Default for Slot<K> {
    fn default() -> Self {
        Self {
            views: Vec::new(),
            stack: None,
            state: SlotState::Empty,
        }
    }
}

/// Header and footer view lists for a host list view with a single header
/// slot and a single footer slot.
///
/// Each position is backed by a [`StackContainer`] that is placed in the host
/// slot while its view list is non-empty. Assigning a list reconciles the
/// container's children and the slot immediately; [`layout_pass`](Self::layout_pass)
/// keeps the slot's height equal to the container's fitting height.
///
/// `K` is the host's stable view key. `S` receives [`Diagnostic`]s.
pub struct StackableListView<K, S = ()> {
    header: Slot<K>,
    footer: Slot<K>,
    config: StackConfig,
    last_diagnostic: Option<Diagnostic>,
    sink: S,
}

impl<K, S> core::fmt::Debug for StackableListView<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackableListView")
            .field("header_views", &self.header.views.len())
            .field("footer_views", &self.footer.views.len())
            .field("config", &self.config)
            .field("last_diagnostic", &self.last_diagnostic)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Hash> Default for StackableListView<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> StackableListView<K> {
    /// Create a list view with empty header and footer lists.
    ///
    /// Diagnostics are logged and kept as [`last_diagnostic`](Self::last_diagnostic)
    /// but not forwarded anywhere else.
    pub fn new() -> Self {
        Self::with_sink(())
    }
}

impl<K: Copy + Eq + Hash, S: DiagnosticSink> StackableListView<K, S> {
    /// Create a list view that reports diagnostics to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            header: Slot::default(),
            footer: Slot::default(),
            config: StackConfig::default(),
            last_diagnostic: None,
            sink,
        }
    }

    /// Use `config` for the header and footer containers.
    ///
    /// Containers are created on first use, so this only affects containers
    /// that do not exist yet.
    pub fn with_stack_config(mut self, config: StackConfig) -> Self {
        self.config = config;
        self
    }

    /// Views shown above the rows, top to bottom.
    pub fn header_views(&self) -> &[K] {
        &self.header.views
    }

    /// Views shown below the rows, top to bottom.
    pub fn footer_views(&self) -> &[K] {
        &self.footer.views
    }

    /// Views for `position`.
    pub fn views(&self, position: Position) -> &[K] {
        &self.slot(position).views
    }

    /// Replace the header views. See [`set_views`](Self::set_views).
    pub fn set_header_views<H>(&mut self, host: &mut H, views: impl Into<Vec<K>>)
    where
        H: ListHost<K> + ?Sized,
    {
        self.set_views(host, Position::Header, views);
    }

    /// Replace the footer views. See [`set_views`](Self::set_views).
    pub fn set_footer_views<H>(&mut self, host: &mut H, views: impl Into<Vec<K>>)
    where
        H: ListHost<K> + ?Sized,
    {
        self.set_views(host, Position::Footer, views);
    }

    /// Replace the views for `position` and reconcile immediately.
    ///
    /// - Empty to non-empty: the container is placed in the slot.
    /// - Non-empty to empty: the slot is unset.
    /// - Non-empty to non-empty: the slot is left alone.
    ///
    /// After a direct slot write (see [`set_slot_view`](Self::set_slot_view))
    /// the next assignment takes the slot back. The container's children are
    /// then diffed against `views` and the diff mirrored into the host.
    /// Assigning the same contents again changes nothing.
    pub fn set_views<H>(&mut self, host: &mut H, position: Position, views: impl Into<Vec<K>>)
    where
        H: ListHost<K> + ?Sized,
    {
        let config = self.config;
        let slot = self.slot_mut(position);
        slot.views = views.into();

        let stack = slot
            .stack
            .get_or_insert_with(|| StackContainer::with_config(config));
        let write = match (slot.views.is_empty(), slot.state) {
            (false, SlotState::Attached) | (true, SlotState::Empty) => None,
            (false, _) => {
                slot.state = SlotState::Attached;
                Some(SlotWrite::attach_stack(position, stack.frame()))
            }
            (true, _) => {
                slot.state = SlotState::Empty;
                Some(SlotWrite::clear(position))
            }
        };
        let diff = stack.set_children(&slot.views);

        if let Some(write) = write {
            self.write_slot(host, write);
        }
        for &view in &diff.removed {
            host.remove_from_stack(position, view);
        }
        for &view in &diff.added {
            host.append_to_stack(position, view);
        }
        if !diff.is_empty() {
            host.request_layout();
        }
    }

    /// Write the slot at `position` directly, bypassing the view lists.
    ///
    /// This is misuse: a [`Diagnostic::DirectSlotWrite`] is reported, but the
    /// write still goes through. The installed view is not tracked, and the
    /// slot is neither measured nor resized until its view list is assigned
    /// again, which puts the container back.
    pub fn set_slot_view<H>(&mut self, host: &mut H, position: Position, view: Option<K>)
    where
        H: ListHost<K> + ?Sized,
    {
        self.slot_mut(position).state = SlotState::External(view);
        self.write_slot(host, SlotWrite::external(position, view));
    }

    /// Re-measure attached slots.
    ///
    /// Call this from the host list view's layout pass. For each slot holding
    /// its container, the container's fitting height is measured; if it differs
    /// from the slot's current height, the container is resized and the slot is
    /// reassigned with the new frame. Repeated passes without content changes
    /// write nothing.
    ///
    /// Returns the slots that were reassigned.
    pub fn layout_pass<H>(&mut self, host: &mut H) -> LayoutChanges
    where
        H: ListHost<K> + ?Sized,
    {
        let mut changes = LayoutChanges::empty();
        for position in Position::ALL {
            if self.layout_slot(host, position) {
                changes |= position.change_flag();
            }
        }
        changes
    }

    /// Forward the layout pass of the container at `position` to the host.
    ///
    /// Call this from the container's own layout pass. It always requests a
    /// host re-layout, which is how a child that changed size gets the header
    /// or footer re-measured.
    pub fn stack_layout_pass<H>(&self, host: &mut H, position: Position)
    where
        H: ListHost<K> + ?Sized,
    {
        if let Some(stack) = &self.slot(position).stack {
            stack.layout_pass(host);
        }
    }

    /// The container for `position`, once created.
    pub fn stack(&self, position: Position) -> Option<&StackContainer<K>> {
        self.slot(position).stack.as_ref()
    }

    /// Reconciliation state of the slot at `position`.
    pub fn slot_state(&self, position: Position) -> SlotState<K> {
        self.slot(position).state
    }

    /// Height last assigned to the slot, if it holds the container.
    pub fn slot_height(&self, position: Position) -> Option<f64> {
        let slot = self.slot(position);
        match (&slot.state, &slot.stack) {
            (SlotState::Attached, Some(stack)) => Some(stack.frame().height()),
            _ => None,
        }
    }

    /// The most recent diagnostic, if any. Each new diagnostic replaces it.
    pub fn last_diagnostic(&self) -> Option<&Diagnostic> {
        self.last_diagnostic.as_ref()
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The diagnostic sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn slot(&self, position: Position) -> &Slot<K> {
        match position {
            Position::Header => &self.header,
            Position::Footer => &self.footer,
        }
    }

    fn slot_mut(&mut self, position: Position) -> &mut Slot<K> {
        match position {
            Position::Header => &mut self.header,
            Position::Footer => &mut self.footer,
        }
    }

    /// Returns true if the slot was reassigned.
    fn layout_slot<H>(&mut self, host: &mut H, position: Position) -> bool
    where
        H: ListHost<K> + ?Sized,
    {
        let actual = host.slot(position);
        let slot = self.slot_mut(position);
        match (slot.state, actual) {
            (SlotState::Attached, Some(SlotContent::Stack)) => {}
            (SlotState::Empty, None) | (SlotState::External(_), _) => return false,
            (_, actual) => {
                // The host slot changed without going through this list view.
                let view = match actual {
                    Some(SlotContent::View(view)) => Some(view),
                    _ => None,
                };
                slot.state = SlotState::External(view);
                self.report(Diagnostic::DirectSlotWrite { position });
                return false;
            }
        }

        let Some(stack) = slot.stack.as_mut() else {
            return false;
        };
        let height = sanitize_height(stack.fitting_height(&*host), position);
        if height == stack.frame().height() {
            return false;
        }
        stack.set_height(height);
        let frame = stack.frame();
        self.write_slot(host, SlotWrite::attach_stack(position, frame));
        true
    }

    fn write_slot<H>(&mut self, host: &mut H, write: SlotWrite<K>)
    where
        H: ListHost<K> + ?Sized,
    {
        if write.origin == WriteOrigin::External {
            self.report(Diagnostic::DirectSlotWrite {
                position: write.position,
            });
        }
        tracing::trace!(
            position = ?write.position,
            origin = ?write.origin,
            cleared = write.content.is_none(),
            height = write.frame.map(|frame| frame.height()),
            "writing slot"
        );
        host.write_slot(&write);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.sink.report(&diagnostic);
        self.last_diagnostic = Some(diagnostic);
    }
}

/// Non-finite and negative heights become zero so that a bad measurement
/// cannot make every layout pass reassign the slot.
fn sanitize_height(height: f64, position: Position) -> f64 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        tracing::error!(
            ?position,
            height,
            "fitting height must be finite and non-negative"
        );
        0.0
    }
}
