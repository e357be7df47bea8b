// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivation of the arc center from gravity, orientation, radius, and peek.

use kurbo::{Point, Size};

use crate::geometry::half_extent;
use crate::{Gravity, Orientation};

/// Computes the center of the circle whose arc the children follow.
///
/// The arc's apex sits `peek` pixels inside the gravity edge and the center
/// sits `radius` pixels beyond the apex along the cross axis. For
/// [`Gravity::Start`] the center therefore has a negative cross coordinate; for
/// [`Gravity::End`] it lies past the opposite edge. Along the scroll axis the
/// center is the whole-pixel middle of the viewport.
///
/// The result is written into `out` so callers can keep one point alive across
/// passes.
pub fn derive_center(
    gravity: Gravity,
    orientation: Orientation,
    radius: u32,
    peek: u32,
    viewport: Size,
    out: &mut Point,
) {
    let distance = f64::from(radius.abs_diff(peek));
    let sign = gravity.sign();
    let multiplier = gravity.edge_multiplier();
    *out = match orientation {
        Orientation::Vertical => Point::new(
            multiplier * viewport.width + sign * distance,
            half_extent(viewport.height),
        ),
        Orientation::Horizontal => Point::new(
            half_extent(viewport.width),
            multiplier * viewport.height + sign * distance,
        ),
    };
}
