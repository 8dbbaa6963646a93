// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stack --heading-base-level=0

//! Understory Stack: a host-agnostic stack container.
//!
//! A [`StackContainer`] presents an ordered list of child views as one composite
//! view with a well-defined fitting size.
//! It is the building block for composing several views into a single slot of a
//! host component that only accepts one view.
//!
//! The container owns nothing but keys.
//! Host toolkits own the actual views and are responsible for:
//!
//! - Assigning each view a stable key `K` (for example a generational id).
//! - Mirroring the [`StackDiff`] returned by [`StackContainer::set_children`]
//!   into their display tree.
//! - Measuring views through [`StackMeasure`].
//! - Calling [`StackContainer::layout_pass`] from the container's own layout
//!   pass so that the owner is asked to re-measure via [`RequestLayout`].
//!
//! ## Not a layout engine
//!
//! The container does not position children.
//! [`StackMeasure::stack_fitting_size`] has a provided implementation that stacks
//! per-view fitting sizes, but toolkits with their own stack primitive are
//! expected to override it.
//!
//! ## Identity
//!
//! Children are diffed by key, never by value.
//! A child that appears in both the old and the new list is left in place: it is
//! neither removed nor re-appended, and any state the host keeps for it survives.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_stack::{StackContainer, StackMeasure};
//!
//! struct Labels;
//!
//! impl StackMeasure<u32> for Labels {
//!     fn fitting_size(&self, _view: u32) -> Size {
//!         Size::new(100.0, 20.0)
//!     }
//! }
//!
//! let mut stack = StackContainer::new();
//! let diff = stack.set_children(&[1, 2]);
//! assert_eq!(diff.added, vec![1, 2]);
//!
//! // 2 is kept in place, 1 is removed and 3 is appended.
//! let diff = stack.set_children(&[2, 3]);
//! assert_eq!(diff.removed, vec![1]);
//! assert_eq!(diff.added, vec![3]);
//! assert_eq!(stack.children(), &[2, 3]);
//!
//! assert_eq!(stack.fitting_height(&Labels), 40.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod container;
mod host;
mod types;

pub use container::StackContainer;
pub use host::{RequestLayout, StackMeasure};
pub use types::{Axis, StackConfig, StackDiff};
