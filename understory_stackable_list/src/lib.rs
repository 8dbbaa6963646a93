// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stackable_list --heading-base-level=0

//! Understory Stackable List: composable header and footer stacks for list views.
//!
//! Many list views offer exactly one header slot and one footer slot.
//! [`StackableListView`] maps an ordered *list* of views onto each of those
//! slots by placing a [`StackContainer`](understory_stack::StackContainer)
//! there, keeps the container's children in sync as the list is replaced, and
//! re-measures the container on every layout pass so the slot height follows
//! the content.
//!
//! ## Host integration
//!
//! The crate depends only on the [`ListHost`] capability trait.
//! A host adapter (a real toolkit, or a fake in tests) provides:
//!
//! - slot access: [`ListHost::slot`] and [`ListHost::write_slot`],
//! - display-tree updates for the containers: [`ListHost::remove_from_stack`]
//!   and [`ListHost::append_to_stack`],
//! - measurement via [`StackMeasure`](understory_stack::StackMeasure),
//! - re-layout requests via [`RequestLayout`](understory_stack::RequestLayout).
//!
//! It then drives the list view from two hooks:
//!
//! 1) The list view's own layout pass calls [`StackableListView::layout_pass`].
//!    When the result is non-empty the host re-flows around the new header or
//!    footer height.
//! 2) A container's layout pass calls [`StackableListView::stack_layout_pass`],
//!    which requests a host layout. A child that grows (a label that wraps, a
//!    panel that expands) thereby reaches the slot without any caller action.
//!
//! A layout pass only writes a slot when the measured height differs from the
//! recorded one, so the request/measure cycle settles after one round.
//!
//! ## Slot writes and diagnostics
//!
//! Every slot write is a [`SlotWrite`] tagged with a [`WriteOrigin`].
//! Writes made while reconciling are [`WriteOrigin::Internal`].
//! Writing a slot directly with [`StackableListView::set_slot_view`] is
//! [`WriteOrigin::External`]: it is allowed, but reported as a
//! [`Diagnostic::DirectSlotWrite`] and tracking for that slot is suspended
//! until its view list is assigned again.
//! The list view also notices when the host slot changed behind its back and
//! reports that the same way.
//!
//! Diagnostics are logged with `tracing`, handed to a [`DiagnosticSink`], and
//! kept as [`StackableListView::last_diagnostic`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_stack::{RequestLayout, StackMeasure};
//! use understory_stackable_list::{
//!     LayoutChanges, ListHost, Position, SlotContent, SlotWrite, StackableListView,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     header: Option<SlotContent<u32>>,
//!     header_height: f64,
//! }
//!
//! impl StackMeasure<u32> for Host {
//!     fn fitting_size(&self, _view: u32) -> Size {
//!         Size::new(320.0, 24.0)
//!     }
//! }
//!
//! impl RequestLayout for Host {
//!     fn request_layout(&mut self) {}
//! }
//!
//! impl ListHost<u32> for Host {
//!     fn slot(&self, position: Position) -> Option<SlotContent<u32>> {
//!         match position {
//!             Position::Header => self.header,
//!             Position::Footer => None,
//!         }
//!     }
//!     fn write_slot(&mut self, write: &SlotWrite<u32>) {
//!         if write.position == Position::Header {
//!             self.header = write.content;
//!             if let Some(frame) = write.frame {
//!                 self.header_height = frame.height();
//!             }
//!         }
//!     }
//!     fn remove_from_stack(&mut self, _position: Position, _view: u32) {}
//!     fn append_to_stack(&mut self, _position: Position, _view: u32) {}
//! }
//!
//! let mut host = Host::default();
//! let mut list = StackableListView::new();
//!
//! list.set_header_views(&mut host, vec![1, 2]);
//! assert_eq!(host.header, Some(SlotContent::Stack));
//!
//! assert_eq!(list.layout_pass(&mut host), LayoutChanges::HEADER);
//! assert_eq!(host.header_height, 48.0);
//!
//! // Nothing changed, nothing is written.
//! assert!(list.layout_pass(&mut host).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diagnostics;
mod host;
mod list;
mod types;

#[cfg(test)]
mod test_host;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use host::ListHost;
pub use list::StackableListView;
pub use types::{LayoutChanges, Position, SlotContent, SlotState, SlotWrite, WriteOrigin};
