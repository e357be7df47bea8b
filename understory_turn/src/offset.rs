// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of a child's midpoint onto the arc, and the resulting placement.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size};

use crate::geometry::{chord_half, extent_across, with_cross_start};
use crate::{Gravity, Orientation};

/// Cross-axis distance from the gravity edge at which a child's leading edge belongs.
///
/// `midpoint` is the child's midpoint along the scroll axis and `center_along`
/// the arc center's coordinate on that same axis. The result lies in
/// `[peek - radius, peek]`: `peek` at the apex, `peek - radius` at the chord
/// endpoints. Midpoints beyond the arc's reach clamp to the chord endpoint.
#[must_use]
pub fn resolve_offset(radius: u32, peek: u32, midpoint: f64, center_along: f64) -> f64 {
    let radius = f64::from(radius);
    let peek = f64::from(peek);
    let opposite = (center_along - midpoint).abs();
    let adjacent = chord_half(radius, opposite).unwrap_or(0.0);
    adjacent - radius + peek
}

/// Places `frame` across the scroll axis according to a resolved `offset`.
///
/// The offset is snapped toward zero to a whole pixel. With
/// [`Gravity::Start`] the leading cross edge lands at `offset + margin_start`;
/// with [`Gravity::End`] the child is mirrored against the far viewport edge.
/// The child's extent and its position along the scroll axis are preserved.
#[must_use]
pub fn place_child(
    gravity: Gravity,
    orientation: Orientation,
    viewport: Size,
    frame: Rect,
    margin_start: f64,
    offset: f64,
) -> Rect {
    let offset = offset.trunc();
    let start = match gravity {
        Gravity::Start => offset + margin_start,
        Gravity::End => {
            extent_across(viewport, orientation)
                - offset
                - extent_across(frame.size(), orientation)
                - margin_start
        }
    };
    with_cross_start(frame, orientation, start)
}
