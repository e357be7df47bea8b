// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aware rectangle accessors and the chord/sagitta math behind the arc.
//!
//! Everything here is expressed in viewport pixels. Hosts lay children out on
//! whole pixels, so the helpers that halve an extent round down the same way
//! integer division would.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::Orientation;

/// Half of `extent`, rounded down to a whole pixel.
#[must_use]
pub fn half_extent(extent: f64) -> f64 {
    (extent / 2.0).floor()
}

/// The coordinate of `point` along the scroll axis of `orientation`.
#[must_use]
pub fn along(point: Point, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Vertical => point.y,
        Orientation::Horizontal => point.x,
    }
}

/// The coordinate of `point` across the scroll axis of `orientation`.
#[must_use]
pub fn across(point: Point, orientation: Orientation) -> f64 {
    along(point, orientation.cross())
}

/// The size of `size` along the scroll axis.
#[must_use]
pub fn extent_along(size: Size, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Vertical => size.height,
        Orientation::Horizontal => size.width,
    }
}

/// The size of `size` across the scroll axis.
#[must_use]
pub fn extent_across(size: Size, orientation: Orientation) -> f64 {
    extent_along(size, orientation.cross())
}

/// The midpoint of `rect` along the scroll axis, using a whole-pixel half extent.
///
/// This is the coordinate the offset and rotation resolvers project onto the arc.
#[must_use]
pub fn midpoint_along(rect: Rect, orientation: Orientation) -> f64 {
    along(rect.origin(), orientation) + half_extent(extent_along(rect.size(), orientation))
}

/// Returns `rect` moved across the scroll axis so that its leading cross edge is at `start`.
///
/// The position along the scroll axis and the size are preserved.
#[must_use]
pub fn with_cross_start(rect: Rect, orientation: Orientation, start: f64) -> Rect {
    match orientation {
        Orientation::Vertical => Rect::new(start, rect.y0, start + rect.width(), rect.y1),
        Orientation::Horizontal => Rect::new(rect.x0, start, rect.x1, start + rect.height()),
    }
}

/// Half the chord of a circle of `radius` at perpendicular distance `opposite` from its center.
///
/// Returns `None` when `opposite` lies beyond the radius (the radicand would be
/// negative) or when the inputs are not finite.
#[must_use]
pub fn chord_half(radius: f64, opposite: f64) -> Option<f64> {
    let radicand = radius * radius - opposite * opposite;
    if radicand >= 0.0 && radicand.is_finite() {
        Some(radicand.sqrt())
    } else {
        None
    }
}

/// The angle, in degrees, between the arc's apex and a point `opposite` away from the apex line.
///
/// Returns a value in `[0, 90]`. Ratios beyond the radius (including a zero
/// radius) saturate at 90°.
#[must_use]
pub fn arc_angle_degrees(opposite: f64, radius: f64) -> f64 {
    let ratio = opposite.abs() / radius;
    if ratio <= 1.0 {
        ratio.atan2((1.0 - ratio * ratio).sqrt()).to_degrees()
    } else {
        90.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{
        across, along, arc_angle_degrees, chord_half, extent_across, half_extent,
        midpoint_along, with_cross_start,
    };
    use crate::Orientation;

    #[test]
    fn half_extent_rounds_down() {
        assert_eq!(half_extent(100.0), 50.0);
        assert_eq!(half_extent(101.0), 50.0);
        assert_eq!(half_extent(1.0), 0.0);
    }

    #[test]
    fn axis_accessors_follow_orientation() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(along(p, Orientation::Vertical), 7.0);
        assert_eq!(along(p, Orientation::Horizontal), 3.0);
        assert_eq!(across(p, Orientation::Vertical), 3.0);
        let s = Size::new(20.0, 40.0);
        assert_eq!(extent_across(s, Orientation::Vertical), 20.0);
        assert_eq!(extent_across(s, Orientation::Horizontal), 40.0);
    }

    #[test]
    fn midpoint_uses_whole_pixel_half() {
        let r = Rect::new(0.0, 10.0, 30.0, 41.0);
        assert_eq!(midpoint_along(r, Orientation::Vertical), 25.0);
        assert_eq!(midpoint_along(r, Orientation::Horizontal), 15.0);
    }

    #[test]
    fn cross_start_preserves_axis_and_size() {
        let r = Rect::new(0.0, 100.0, 40.0, 200.0);
        let moved = with_cross_start(r, Orientation::Vertical, 25.0);
        assert_eq!(moved, Rect::new(25.0, 100.0, 65.0, 200.0));
        let moved = with_cross_start(r, Orientation::Horizontal, 5.0);
        assert_eq!(moved, Rect::new(0.0, 5.0, 40.0, 105.0));
    }

    #[test]
    fn chord_half_is_pythagorean() {
        assert_eq!(chord_half(5.0, 3.0), Some(4.0));
        assert_eq!(chord_half(5.0, 5.0), Some(0.0));
        assert_eq!(chord_half(5.0, 6.0), None);
        assert_eq!(chord_half(0.0, 0.0), Some(0.0));
    }

    #[test]
    fn arc_angle_saturates_past_the_radius() {
        assert_eq!(arc_angle_degrees(0.0, 10.0), 0.0);
        assert!((arc_angle_degrees(10.0, 20.0) - 30.0).abs() < 1e-9);
        assert!((arc_angle_degrees(10.0, 10.0) - 90.0).abs() < 1e-9);
        assert_eq!(arc_angle_degrees(11.0, 10.0), 90.0);
        assert_eq!(arc_angle_degrees(1.0, 0.0), 90.0);
        assert_eq!(arc_angle_degrees(0.0, 0.0), 90.0);
    }

    #[test]
    fn arc_angle_matches_the_inverse_sine() {
        // asin(0.1), asin(0.3125), asin(0.99875) in degrees.
        for (opposite, radius, expected) in [
            (100.0, 1000.0, 5.739_170_477_266_787),
            (-250.0, 800.0, 18.209_956_864_283_01),
            (799.0, 800.0, 87.134_912_524_867_02),
        ] {
            let actual = arc_angle_degrees(opposite, radius);
            assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
        }
    }
}
