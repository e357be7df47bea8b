// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory host: a strip of uniform children with a linear layout.
//!
//! [`FixedStrip`] stacks `len` equally sized items along the scroll axis,
//! keeps a scroll offset clamped to the content, and attaches only the items
//! that overlap the viewport. It records the frame and [`ChildTransform`]
//! the turn layout writes for each attached child, which makes it useful for
//! headless hosts, tests, and prototyping a curvature before wiring up a real
//! view system.

use alloc::vec::Vec;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::extent_along;
use crate::{ChildGeometry, ChildTransform, Orientation, TurnHost};

/// An attached child of a [`FixedStrip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripChild {
    /// Index of the item this child displays.
    pub index: usize,
    /// Current frame in viewport coordinates.
    pub frame: Rect,
    /// Display attributes last written by the layout.
    pub transform: ChildTransform,
}

/// A [`TurnHost`] over `len` uniform items, attaching only the visible ones.
#[derive(Clone, Debug)]
pub struct FixedStrip {
    len: usize,
    item_size: Size,
    viewport: Size,
    margin_start: f64,
    orientation: Orientation,
    scroll_offset: f64,
    children: Vec<StripChild>,
}

impl FixedStrip {
    /// Creates a strip of `len` items of `item_size` shown in `viewport`.
    ///
    /// Negative sizes clamp to zero. Nothing is attached until the first
    /// linear layout pass.
    #[must_use]
    pub fn new(len: usize, item_size: Size, viewport: Size) -> Self {
        Self {
            len,
            item_size: item_size.clamp(Size::ZERO, Size::new(f64::INFINITY, f64::INFINITY)),
            viewport: viewport.clamp(Size::ZERO, Size::new(f64::INFINITY, f64::INFINITY)),
            margin_start: 0.0,
            orientation: Orientation::Vertical,
            scroll_offset: 0.0,
            children: Vec::new(),
        }
    }

    /// Sets the leading cross-axis margin reported for every child.
    #[must_use]
    pub fn with_margin_start(mut self, margin_start: f64) -> Self {
        self.margin_start = margin_start;
        self
    }

    /// Number of items in the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current scroll offset along the scroll axis.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Resizes the viewport. Takes effect on the next linear layout pass.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport.clamp(Size::ZERO, Size::new(f64::INFINITY, f64::INFINITY));
    }

    /// The attached children, in item order.
    #[must_use]
    pub fn children(&self) -> &[StripChild] {
        &self.children
    }

    /// The attached child displaying item `index`, if any.
    #[must_use]
    pub fn child_for_item(&self, index: usize) -> Option<&StripChild> {
        self.children.iter().find(|child| child.index == index)
    }

    fn item_extent(&self) -> f64 {
        extent_along(self.item_size, self.orientation)
    }

    fn content_extent(&self) -> f64 {
        self.item_extent() * self.len as f64
    }

    fn max_scroll(&self) -> f64 {
        (self.content_extent() - extent_along(self.viewport, self.orientation)).max(0.0)
    }

    /// Item indices overlapping the viewport at the current scroll offset.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let extent = self.item_extent();
        let viewport_extent = extent_along(self.viewport, self.orientation);
        if self.len == 0 || extent <= 0.0 || viewport_extent <= 0.0 {
            return 0..0;
        }
        let max = (self.scroll_offset + viewport_extent).min(self.content_extent());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Both values are clamped to the item range before the cast"
        )]
        let (start, end) = {
            let last = self.len as f64;
            (
                (self.scroll_offset / extent).floor().clamp(0.0, last) as usize,
                (max / extent).ceil().clamp(0.0, last) as usize,
            )
        };
        start..end
    }

    fn frame_for_item(&self, index: usize) -> Rect {
        let along = index as f64 * self.item_extent() - self.scroll_offset;
        let origin = match self.orientation {
            Orientation::Vertical => Point::new(self.margin_start, along),
            Orientation::Horizontal => Point::new(along, self.margin_start),
        };
        Rect::from_origin_size(origin, self.item_size)
    }

    /// Attaches children for the visible range, keeping the frames and
    /// transforms of children that stay attached.
    fn fill(&mut self) {
        let range = self.visible_range();
        let mut children = Vec::with_capacity(range.len());
        for index in range {
            let child = match self.child_for_item(index) {
                Some(kept) => *kept,
                None => StripChild {
                    index,
                    frame: self.frame_for_item(index),
                    transform: ChildTransform::IDENTITY,
                },
            };
            children.push(child);
        }
        self.children = children;
    }
}

impl TurnHost for FixedStrip {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_geometry(&self, index: usize) -> Option<ChildGeometry> {
        self.children.get(index).map(|child| ChildGeometry {
            frame: child.frame,
            margin_start: self.margin_start,
        })
    }

    fn layout_child(&mut self, index: usize, frame: Rect) {
        if let Some(child) = self.children.get_mut(index) {
            child.frame = frame;
        }
    }

    fn set_child_transform(&mut self, index: usize, transform: ChildTransform) {
        if let Some(child) = self.children.get_mut(index) {
            child.transform = transform;
        }
    }

    fn layout_linear(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
        // A full pass re-stacks every child from scratch.
        self.children.clear();
        self.fill();
        tracing::trace!(
            attached = self.children.len(),
            scroll_offset = self.scroll_offset,
            "fixed strip linear layout"
        );
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Whole-pixel delta bounded by the requested i32 delta"
    )]
    fn scroll_linear_by(&mut self, orientation: Orientation, delta: i32) -> i32 {
        if orientation != self.orientation {
            return 0;
        }
        let old = self.scroll_offset;
        let target = (old + f64::from(delta)).clamp(0.0, self.max_scroll());
        // Whole pixels only, so the stored offset moves by exactly what is reported.
        let applied = (target - old).trunc();
        if applied == 0.0 {
            return 0;
        }
        self.scroll_offset = old + applied;
        for child in &mut self.children {
            let shift = match orientation {
                Orientation::Vertical => Vec2::new(0.0, -applied),
                Orientation::Horizontal => Vec2::new(-applied, 0.0),
            };
            child.frame = child.frame + shift;
        }
        self.fill();
        applied as i32
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::FixedStrip;
    use crate::{Orientation, TurnHost};

    fn strip() -> FixedStrip {
        FixedStrip::new(31, Size::new(100.0, 100.0), Size::new(1000.0, 1000.0))
    }

    #[test]
    fn linear_layout_attaches_visible_items() {
        let mut strip = strip();
        assert_eq!(strip.child_count(), 0);
        strip.layout_linear(Orientation::Vertical);
        assert_eq!(strip.visible_range(), 0..10);
        assert_eq!(strip.child_count(), 10);
        assert_eq!(
            strip.child_for_item(3).map(|c| c.frame),
            Some(Rect::new(0.0, 300.0, 100.0, 400.0))
        );
    }

    #[test]
    fn scrolling_clamps_to_content() {
        let mut strip = strip();
        strip.layout_linear(Orientation::Vertical);
        assert_eq!(strip.scroll_linear_by(Orientation::Vertical, -20), 0);
        assert_eq!(strip.scroll_linear_by(Orientation::Vertical, 50), 50);
        assert_eq!(strip.visible_range(), 0..11);
        // 31 items * 100 - 1000 viewport = 2100 max.
        assert_eq!(strip.scroll_linear_by(Orientation::Vertical, 5000), 2050);
        assert_eq!(strip.scroll_offset(), 2100.0);
        assert_eq!(strip.visible_range(), 21..31);
    }

    #[test]
    fn fractional_extents_scroll_by_the_reported_delta() {
        let mut strip = FixedStrip::new(31, Size::new(100.5, 100.5), Size::new(1000.0, 1000.0));
        strip.layout_linear(Orientation::Vertical);
        // 31 * 100.5 - 1000 = 2115.5 max; only whole pixels are applied.
        let applied = strip.scroll_linear_by(Orientation::Vertical, 5000);
        assert_eq!(applied, 2115);
        assert_eq!(strip.scroll_offset(), f64::from(applied));
        let back = strip.scroll_linear_by(Orientation::Vertical, -3000);
        assert_eq!(back, -2115);
        assert_eq!(strip.scroll_offset(), 0.0);
    }

    #[test]
    fn scrolling_shifts_kept_children() {
        let mut strip = strip().with_margin_start(12.0);
        strip.layout_linear(Orientation::Horizontal);
        strip.layout_child(1, Rect::new(100.0, 40.0, 200.0, 140.0));
        assert_eq!(strip.scroll_linear_by(Orientation::Horizontal, 30), 30);
        assert_eq!(
            strip.child_for_item(1).map(|c| c.frame),
            Some(Rect::new(70.0, 40.0, 170.0, 140.0))
        );
        // Newly attached items start at the margin.
        assert_eq!(
            strip.child_for_item(10).map(|c| c.frame),
            Some(Rect::new(970.0, 12.0, 1070.0, 112.0))
        );
    }

    #[test]
    fn off_axis_scroll_is_ignored() {
        let mut strip = strip();
        strip.layout_linear(Orientation::Vertical);
        assert_eq!(strip.scroll_linear_by(Orientation::Horizontal, 40), 0);
        assert_eq!(strip.scroll_offset(), 0.0);
    }

    #[test]
    fn empty_or_degenerate_strips_attach_nothing() {
        let mut empty = FixedStrip::new(0, Size::new(10.0, 10.0), Size::new(100.0, 100.0));
        empty.layout_linear(Orientation::Vertical);
        assert!(empty.children().is_empty());

        let mut flat = FixedStrip::new(5, Size::new(10.0, 10.0), Size::ZERO);
        flat.layout_linear(Orientation::Vertical);
        assert!(flat.children().is_empty());
    }
}
