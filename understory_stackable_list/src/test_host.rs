// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording host list view for unit tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use understory_stack::{RequestLayout, StackMeasure};

use crate::host::ListHost;
use crate::types::{Position, SlotContent, SlotWrite};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum StackOp {
    Remove,
    Append,
}

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    sizes: BTreeMap<u32, Size>,
    pub(crate) header: Option<SlotContent<u32>>,
    pub(crate) footer: Option<SlotContent<u32>>,
    pub(crate) header_frame: Option<Rect>,
    pub(crate) footer_frame: Option<Rect>,
    pub(crate) header_stack: Vec<u32>,
    pub(crate) footer_stack: Vec<u32>,
    pub(crate) stack_ops: Vec<(Position, StackOp, u32)>,
    pub(crate) writes: Vec<SlotWrite<u32>>,
    pub(crate) layout_requests: usize,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Views without a size fit in zero.
    pub(crate) fn set_size(&mut self, view: u32, size: Size) {
        self.sizes.insert(view, size);
    }

    fn stack_mut(&mut self, position: Position) -> &mut Vec<u32> {
        match position {
            Position::Header => &mut self.header_stack,
            Position::Footer => &mut self.footer_stack,
        }
    }
}

impl StackMeasure<u32> for TestHost {
    fn fitting_size(&self, view: u32) -> Size {
        self.sizes.get(&view).copied().unwrap_or(Size::ZERO)
    }
}

impl RequestLayout for TestHost {
    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }
}

impl ListHost<u32> for TestHost {
    fn slot(&self, position: Position) -> Option<SlotContent<u32>> {
        match position {
            Position::Header => self.header,
            Position::Footer => self.footer,
        }
    }

    fn write_slot(&mut self, write: &SlotWrite<u32>) {
        let (content, frame) = match write.position {
            Position::Header => (&mut self.header, &mut self.header_frame),
            Position::Footer => (&mut self.footer, &mut self.footer_frame),
        };
        *content = write.content;
        if write.content.is_none() {
            *frame = None;
        } else if write.frame.is_some() {
            *frame = write.frame;
        }
        self.writes.push(*write);
    }

    fn remove_from_stack(&mut self, position: Position, view: u32) {
        self.stack_mut(position).retain(|v| *v != view);
        self.stack_ops.push((position, StackOp::Remove, view));
    }

    fn append_to_stack(&mut self, position: Position, view: u32) {
        self.stack_mut(position).push(view);
        self.stack_ops.push((position, StackOp::Append, view));
    }
}
