// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a host framework provides to [`TurnLayout`](crate::TurnLayout).

use kurbo::{Rect, Size};

use crate::{ChildTransform, Orientation};

/// Geometry of one attached child, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildGeometry {
    /// The child's current axis-aligned frame in viewport coordinates.
    ///
    /// Along the scroll axis this is wherever the linear layout put it; the
    /// turn layout only rewrites the cross-axis position.
    pub frame: Rect,
    /// The child's margin on its leading cross-axis edge.
    pub margin_start: f64,
}

/// Host-side capabilities consumed by [`TurnLayout`](crate::TurnLayout).
///
/// A host owns the children, their recycling, and the underlying linear
/// layout that stacks them along the scroll axis. Children are addressed by
/// their attachment index `0..child_count()`, which need not match the data
/// index of the item they display.
///
/// Every method is called synchronously from within a layout or scroll pass;
/// hosts are expected to serialize passes on a single thread.
pub trait TurnHost {
    /// Size of the viewport the children are laid out in.
    fn viewport(&self) -> Size;

    /// Number of currently attached children.
    fn child_count(&self) -> usize;

    /// Geometry of the attached child at `index`.
    ///
    /// Return `None` for a missing child or one whose layout parameters the
    /// host cannot describe; the turn layout leaves such children untouched.
    fn child_geometry(&self, index: usize) -> Option<ChildGeometry>;

    /// Moves the attached child at `index` to `frame`.
    fn layout_child(&mut self, index: usize, frame: Rect);

    /// Applies display attributes to the attached child at `index`.
    fn set_child_transform(&mut self, index: usize, transform: ChildTransform);

    /// Runs the underlying linear layout along `orientation`.
    ///
    /// After this call the attached children reflect their on-axis positions.
    fn layout_linear(&mut self, orientation: Orientation);

    /// Advances the underlying linear layout by `delta` pixels along `orientation`.
    ///
    /// Returns the delta that was actually applied, which may be smaller in
    /// magnitude at the ends of the content.
    fn scroll_linear_by(&mut self, orientation: Orientation, delta: i32) -> i32;
}
