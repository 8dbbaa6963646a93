// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toy toolkit that hosts a [`StackableListView`] for the demos.
//!
//! Widgets are measured with fixed metrics (8px glyphs, 20px lines), which is
//! enough to show header and footer heights following their content.
//! Layout runs in rounds the way a retained toolkit would: dirty stacks run
//! their own layout pass first, which requests a list layout, which
//! re-measures the slots.

use std::fmt::Write as _;

use kurbo::{Rect, Size};
use understory_stack::{RequestLayout, StackMeasure};
use understory_stackable_list::{
    DiagnosticSink, LayoutChanges, ListHost, Position, SlotContent, SlotWrite, StackableListView,
};

/// Upper bound on layout rounds per [`Toolkit::run_layout`].
const MAX_LAYOUT_ROUNDS: usize = 8;

const PADDING: f64 = 16.0;
const GLYPH_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 20.0;
const SLIDER_TRACK: f64 = 30.0;
const TAG_WIDTH: f64 = 48.0;
const TAG_HEIGHT: f64 = 40.0;

/// Slider height range, in points.
pub const SLIDER_RANGE: (f64, f64) = (25.0, 225.0);

/// Handle to a widget owned by the [`Toolkit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u32);

/// The widgets the toy toolkit knows how to measure.
#[derive(Clone, Debug)]
pub enum Widget {
    /// Wrapping text.
    Label(String),
    /// A slider whose value is the height of the panel below it.
    Slider(f64),
    /// A wrapping grid of numbered tags.
    Tags(usize),
}

/// A list view host with one header slot and one footer slot.
#[derive(Debug)]
pub struct Toolkit {
    width: f64,
    rows: usize,
    row_height: f64,
    widgets: Vec<Widget>,
    slots: [Option<SlotContent<ViewId>>; 2],
    frames: [Rect; 2],
    stacks: [Vec<ViewId>; 2],
    stack_dirty: [bool; 2],
    needs_layout: bool,
}

fn slot_index(position: Position) -> usize {
    match position {
        Position::Header => 0,
        Position::Footer => 1,
    }
}

impl Toolkit {
    /// A list `width` points wide with `rows` rows of 44 points.
    pub fn new(width: f64, rows: usize) -> Self {
        Self {
            width,
            rows,
            row_height: 44.0,
            widgets: Vec::new(),
            slots: [None; 2],
            frames: [Rect::ZERO; 2],
            stacks: [Vec::new(), Vec::new()],
            stack_dirty: [false; 2],
            needs_layout: false,
        }
    }

    fn add(&mut self, widget: Widget) -> ViewId {
        let id = ViewId(u32::try_from(self.widgets.len()).expect("too many widgets"));
        self.widgets.push(widget);
        id
    }

    /// Create a label.
    pub fn label(&mut self, text: &str) -> ViewId {
        self.add(Widget::Label(text.to_owned()))
    }

    /// Create a slider at its minimum.
    pub fn slider(&mut self) -> ViewId {
        self.add(Widget::Slider(SLIDER_RANGE.0))
    }

    /// Create a grid of `count` tags.
    pub fn tags(&mut self, count: usize) -> ViewId {
        self.add(Widget::Tags(count))
    }

    /// The widget behind `id`.
    pub fn widget(&self, id: ViewId) -> &Widget {
        &self.widgets[id.0 as usize]
    }

    /// Drag a slider. Only the stack holding it learns about the change.
    pub fn set_slider_value(&mut self, id: ViewId, value: f64) {
        if let Widget::Slider(current) = &mut self.widgets[id.0 as usize] {
            *current = value.clamp(SLIDER_RANGE.0, SLIDER_RANGE.1);
        }
        self.invalidate_stacks_containing(id);
    }

    /// Replace a label's text.
    pub fn set_label_text(&mut self, id: ViewId, text: &str) {
        if let Widget::Label(current) = &mut self.widgets[id.0 as usize] {
            text.clone_into(current);
        }
        self.invalidate_stacks_containing(id);
    }

    /// Resize the list. Labels and tags re-wrap.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.stack_dirty = [true; 2];
        self.needs_layout = true;
    }

    /// Frame of the slot at `position`, if it holds anything.
    pub fn slot_frame(&self, position: Position) -> Option<Rect> {
        self.slots[slot_index(position)].map(|_| self.frames[slot_index(position)])
    }

    /// Views the host shows inside the stack at `position`.
    pub fn stack_children(&self, position: Position) -> &[ViewId] {
        &self.stacks[slot_index(position)]
    }

    /// Total scrollable height: header, rows, footer.
    pub fn content_height(&self) -> f64 {
        let slot_height = |position| self.slot_frame(position).map_or(0.0, |f| f.height());
        slot_height(Position::Header)
            + self.rows as f64 * self.row_height
            + slot_height(Position::Footer)
    }

    /// Run layout rounds until nothing is dirty.
    ///
    /// Returns every slot the list view reassigned along the way.
    pub fn run_layout<S: DiagnosticSink>(
        &mut self,
        list: &mut StackableListView<ViewId, S>,
    ) -> LayoutChanges {
        let mut changes = LayoutChanges::empty();
        for _ in 0..MAX_LAYOUT_ROUNDS {
            for position in Position::ALL {
                if std::mem::take(&mut self.stack_dirty[slot_index(position)]) {
                    list.stack_layout_pass(self, position);
                }
            }
            if !std::mem::take(&mut self.needs_layout) {
                break;
            }
            changes |= list.layout_pass(self);
        }
        changes
    }

    /// A printable summary of the slots and their stacks.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for position in Position::ALL {
            let i = slot_index(position);
            let content = match self.slots[i] {
                None => "empty".to_owned(),
                Some(SlotContent::Stack) => format!("stack {:?}", self.stacks[i]),
                Some(SlotContent::View(id)) => format!("view {id:?}"),
            };
            let height = self.slot_frame(position).map_or(0.0, |f| f.height());
            let _ = writeln!(out, "{position:?}: {content}, height {height}");
        }
        let _ = write!(out, "content height {}", self.content_height());
        out
    }

    fn invalidate_stacks_containing(&mut self, id: ViewId) {
        for (children, dirty) in self.stacks.iter().zip(self.stack_dirty.iter_mut()) {
            if children.contains(&id) {
                *dirty = true;
            }
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * PADDING).max(GLYPH_WIDTH)
    }
}

impl StackMeasure<ViewId> for Toolkit {
    fn fitting_size(&self, view: ViewId) -> Size {
        let height = match self.widget(view) {
            Widget::Label(text) => {
                let per_line = (self.inner_width() / GLYPH_WIDTH).floor().max(1.0);
                let lines = (text.chars().count() as f64 / per_line).ceil().max(1.0);
                lines * LINE_HEIGHT + PADDING
            }
            Widget::Slider(value) => 24.0 + SLIDER_TRACK + value + PADDING,
            Widget::Tags(count) => {
                let per_row = (self.inner_width() / TAG_WIDTH).floor().max(1.0);
                let rows = (*count as f64 / per_row).ceil();
                rows * TAG_HEIGHT + PADDING
            }
        };
        Size::new(self.width, height)
    }
}

impl RequestLayout for Toolkit {
    fn request_layout(&mut self) {
        self.needs_layout = true;
    }
}

impl ListHost<ViewId> for Toolkit {
    fn slot(&self, position: Position) -> Option<SlotContent<ViewId>> {
        self.slots[slot_index(position)]
    }

    fn write_slot(&mut self, write: &SlotWrite<ViewId>) {
        let i = slot_index(write.position);
        self.slots[i] = write.content;
        let frame = match (write.content, write.frame) {
            (None, _) => Rect::ZERO,
            (Some(_), Some(frame)) => Rect::new(0.0, 0.0, self.width, frame.height()),
            (Some(_), None) => self.frames[i],
        };
        if frame != self.frames[i] {
            self.frames[i] = frame;
            // A resized stack lays itself out again.
            self.stack_dirty[i] |= write.content == Some(SlotContent::Stack);
        }
    }

    fn remove_from_stack(&mut self, position: Position, view: ViewId) {
        let i = slot_index(position);
        self.stacks[i].retain(|child| *child != view);
        self.stack_dirty[i] = true;
    }

    fn append_to_stack(&mut self, position: Position, view: ViewId) {
        let i = slot_index(position);
        self.stacks[i].push(view);
        self.stack_dirty[i] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_settles_on_fitting_height() {
        let mut toolkit = Toolkit::new(320.0, 4);
        let mut list = StackableListView::new();
        let title = toolkit.label("Stackable");
        list.set_header_views(&mut toolkit, vec![title]);

        assert_eq!(toolkit.run_layout(&mut list), LayoutChanges::HEADER);
        assert_eq!(
            toolkit.slot_frame(Position::Header).map(|f| f.height()),
            Some(36.0)
        );
        assert!(toolkit.run_layout(&mut list).is_empty(), "already settled");
    }

    #[test]
    fn slider_drag_resizes_header_without_list_calls() {
        let mut toolkit = Toolkit::new(320.0, 4);
        let mut list = StackableListView::new();
        let slider = toolkit.slider();
        list.set_header_views(&mut toolkit, vec![slider]);
        let _ = toolkit.run_layout(&mut list);
        let before = toolkit.content_height();

        toolkit.set_slider_value(slider, 125.0);
        assert_eq!(toolkit.run_layout(&mut list), LayoutChanges::HEADER);
        assert_eq!(toolkit.content_height(), before + 100.0);
    }

    #[test]
    fn narrowing_rewraps_labels() {
        let mut toolkit = Toolkit::new(320.0, 0);
        let mut list = StackableListView::new();
        let text = toolkit.label(&"lorem ipsum ".repeat(10));
        list.set_footer_views(&mut toolkit, vec![text]);
        let _ = toolkit.run_layout(&mut list);
        let wide = toolkit.content_height();

        toolkit.set_width(160.0);
        assert_eq!(toolkit.run_layout(&mut list), LayoutChanges::FOOTER);
        assert!(toolkit.content_height() > wide);
    }

    #[test]
    fn toggling_views_keeps_the_rest_in_place() {
        let mut toolkit = Toolkit::new(320.0, 4);
        let mut list = StackableListView::new();
        let slider = toolkit.slider();
        let lorem = toolkit.label("lorem ipsum");
        list.set_header_views(&mut toolkit, vec![slider, lorem]);

        list.set_header_views(&mut toolkit, vec![lorem]);
        list.set_header_views(&mut toolkit, vec![lorem, slider]);
        assert_eq!(toolkit.stack_children(Position::Header), &[lorem, slider]);

        list.set_header_views(&mut toolkit, vec![]);
        assert_eq!(toolkit.slot_frame(Position::Header), None);
        assert!(toolkit.stack_children(Position::Header).is_empty());
    }
}
