// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child rotation so that each item follows the curvature of the arc.

use crate::geometry::arc_angle_degrees;
use crate::{Gravity, Orientation};

/// Sign applied to the arc angle of a child.
///
/// `past_center` is whether the child's midpoint lies beyond the arc center
/// along the scroll axis.
#[must_use]
pub fn rotation_direction(gravity: Gravity, orientation: Orientation, past_center: bool) -> f64 {
    let leans_forward = match (orientation, gravity) {
        (Orientation::Vertical, Gravity::End) | (Orientation::Horizontal, Gravity::Start) => {
            !past_center
        }
        (Orientation::Vertical, Gravity::Start) | (Orientation::Horizontal, Gravity::End) => {
            past_center
        }
    };
    if leans_forward { 1.0 } else { -1.0 }
}

/// Rotation in degrees for a child whose midpoint is `midpoint` along the scroll axis.
///
/// The magnitude is the child's angular distance from the arc's apex, signed
/// by [`rotation_direction`]. Midpoints out of the arc's reach (including any
/// midpoint on a zero radius) saturate at ±90°.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Display rotation only needs f32 precision"
)]
pub fn resolve_rotation(
    gravity: Gravity,
    orientation: Orientation,
    radius: u32,
    midpoint: f64,
    center_along: f64,
) -> f32 {
    let direction = rotation_direction(gravity, orientation, midpoint > center_along);
    let degrees = direction * arc_angle_degrees(midpoint - center_along, f64::from(radius));
    degrees as f32
}

#[cfg(test)]
mod tests {
    use super::{resolve_rotation, rotation_direction};
    use crate::{Gravity, Orientation};

    #[test]
    fn direction_table() {
        use Gravity::{End, Start};
        use Orientation::{Horizontal, Vertical};

        assert_eq!(rotation_direction(End, Vertical, true), -1.0);
        assert_eq!(rotation_direction(End, Vertical, false), 1.0);
        assert_eq!(rotation_direction(Start, Vertical, true), 1.0);
        assert_eq!(rotation_direction(Start, Vertical, false), -1.0);

        assert_eq!(rotation_direction(End, Horizontal, true), 1.0);
        assert_eq!(rotation_direction(End, Horizontal, false), -1.0);
        assert_eq!(rotation_direction(Start, Horizontal, true), -1.0);
        assert_eq!(rotation_direction(Start, Horizontal, false), 1.0);
    }

    #[test]
    fn apex_child_is_upright() {
        let r = resolve_rotation(Gravity::Start, Orientation::Vertical, 1000, 500.0, 500.0);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn end_gravity_before_center_leans_positive() {
        let r = resolve_rotation(Gravity::End, Orientation::Vertical, 1000, 400.0, 500.0);
        assert!((r - 5.739_17).abs() < 1e-3, "rotation {r}");
    }

    #[test]
    fn gravity_flip_flips_the_sign() {
        for mid in [0.0, 120.0, 499.0, 501.0, 900.0] {
            let start = resolve_rotation(Gravity::Start, Orientation::Horizontal, 800, mid, 500.0);
            let end = resolve_rotation(Gravity::End, Orientation::Horizontal, 800, mid, 500.0);
            assert_eq!(start, -end);
        }
    }

    #[test]
    fn out_of_reach_saturates_with_direction() {
        let r = resolve_rotation(Gravity::Start, Orientation::Vertical, 100, 900.0, 500.0);
        assert_eq!(r, 90.0);
        let r = resolve_rotation(Gravity::Start, Orientation::Vertical, 100, 100.0, 500.0);
        assert_eq!(r, -90.0);
        let r = resolve_rotation(Gravity::End, Orientation::Vertical, 0, 100.0, 500.0);
        assert_eq!(r, 90.0);
    }
}
