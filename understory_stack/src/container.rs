// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack container: ordered children, diffing, measurement.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use kurbo::{Rect, Size};

use crate::host::{RequestLayout, StackMeasure};
use crate::types::{StackConfig, StackDiff};

/// An ordered stack of child views presented as one composite view.
///
/// Children are identified by a host-assigned key `K`. The container keeps
/// each key at most once and only ever appends or removes; a child that
/// survives an update keeps its position and is never reinserted.
#[derive(Clone, Debug)]
pub struct StackContainer<K> {
    children: Vec<K>,
    config: StackConfig,
    frame: Rect,
}

impl<K> Default for StackContainer<K> {
    fn default() -> Self {
        Self::with_config(StackConfig::default())
    }
}

impl<K> StackContainer<K> {
    /// Create an empty vertical stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with the given arrangement.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            children: Vec::new(),
            config,
            frame: Rect::ZERO,
        }
    }

    /// Current children, in stack order.
    pub fn children(&self) -> &[K] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the stack has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Arrangement parameters.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The frame most recently assigned to the container.
    ///
    /// Starts out as [`Rect::ZERO`].
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Replace the container's frame.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Resize the frame to `height`, keeping its origin and width.
    pub fn set_height(&mut self, height: f64) {
        self.frame = Rect::from_origin_size(
            self.frame.origin(),
            Size::new(self.frame.width(), height),
        );
    }

    /// Run the container's own layout pass.
    ///
    /// Arrangement of the children is the host's business; this only forwards
    /// the signal upward. The parent must re-query the container's fitting
    /// size because a child may have changed size without the parent being
    /// told.
    pub fn layout_pass<P: RequestLayout + ?Sized>(&self, parent: &mut P) {
        parent.request_layout();
    }
}

impl<K: Copy + Eq + Hash> StackContainer<K> {
    /// True if `view` is currently a child.
    pub fn contains(&self, view: K) -> bool {
        self.children.contains(&view)
    }

    /// Reconcile the children against `views`.
    ///
    /// Removals are applied first: every current child missing from `views`
    /// is dropped, in its current order. Then each view of `views` that is not
    /// already a child is appended, in the order of `views`. Children present
    /// in both lists are left where they are, so a reordered list does not
    /// reorder the stack. A view listed twice is appended once.
    pub fn set_children(&mut self, views: &[K]) -> StackDiff<K> {
        let wanted: HashSet<K> = views.iter().copied().collect();

        let mut removed = Vec::new();
        self.children.retain(|child| {
            let keep = wanted.contains(child);
            if !keep {
                removed.push(*child);
            }
            keep
        });

        let mut present: HashSet<K> = self.children.iter().copied().collect();
        let mut added = Vec::new();
        for &view in views {
            if present.insert(view) {
                self.children.push(view);
                added.push(view);
            }
        }

        StackDiff { removed, added }
    }

    /// Fitting size of the whole stack, as computed by the host.
    pub fn fitting_size<M: StackMeasure<K> + ?Sized>(&self, measure: &M) -> Size {
        measure.stack_fitting_size(&self.children, &self.config)
    }

    /// Fitting height of the whole stack.
    pub fn fitting_height<M: StackMeasure<K> + ?Sized>(&self, measure: &M) -> f64 {
        self.fitting_size(measure).height
    }
}
