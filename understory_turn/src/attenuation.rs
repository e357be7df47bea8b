// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-position-driven attenuation of scale and alpha.
//!
//! Each child gets a *scrolled factor* in `[0, 1]` that peaks when the child's
//! midpoint sits at the middle of the viewport along the scroll axis and falls
//! linearly to `0` at either edge. An [`Envelope`] maps that factor onto an
//! output range: its `min` applies at the edges and its `max` at the center.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::half_extent;

/// A `[min, max]` output range driven by the scrolled factor.
///
/// `min` is the value at `f = 0` (viewport edges and off-screen) and `max` the
/// value at `f = 1` (viewport center). The names describe the allowed range,
/// not which end of the viewport they map to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Value at the viewport edges.
    pub min: f32,
    /// Value at the viewport center.
    pub max: f32,
}

impl Envelope {
    /// The envelope that leaves values at exactly `1.0`.
    pub const UNIT: Self = Self { min: 1.0, max: 1.0 };

    /// Creates an envelope. Validation happens in [`TurnConfigBuilder`](crate::TurnConfigBuilder).
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns `true` when both bounds are exactly `1.0`.
    ///
    /// This is an exact comparison: callers disable attenuation by passing
    /// `1.0` for both bounds.
    #[must_use]
    #[allow(clippy::float_cmp, reason = "Unit bounds are matched exactly")]
    pub fn is_unit(&self) -> bool {
        self.min == 1.0 && self.max == 1.0
    }

    /// Interpolates between `min` and `max` at `factor`.
    #[must_use]
    pub fn at(&self, factor: f32) -> f32 {
        self.min + (self.max - self.min) * factor
    }

    /// Resolves the output for a child, computing the scrolled factor only when needed.
    ///
    /// A unit envelope short-circuits to `1.0` without calling `factor`.
    #[must_use]
    pub fn resolve(&self, factor: impl FnOnce() -> f32) -> f32 {
        if self.is_unit() {
            1.0
        } else {
            self.at(factor())
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Computes the scrolled factor of a child along the scroll axis.
///
/// - `start`: the child's leading coordinate on the scroll axis.
/// - `extent`: the child's size on the scroll axis.
/// - `viewport_extent`: the viewport's size on the scroll axis.
///
/// The child's midpoint is rounded to the nearest whole pixel (halves round
/// up). Midpoints outside `[0, viewport_extent]` and degenerate viewports
/// yield `0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "The factor is a display attribute in [0, 1]"
)]
pub fn scrolled_factor(start: f64, extent: f64, viewport_extent: f64) -> f32 {
    let half = half_extent(viewport_extent);
    let pos = (start + extent / 2.0 + 0.5).floor();
    if half <= 0.0 || pos < 0.0 || pos > viewport_extent {
        return 0.0;
    }
    let distance = if pos > half {
        viewport_extent - pos
    } else {
        pos
    };
    (distance / half) as f32
}

#[cfg(test)]
mod tests {
    use super::{Envelope, scrolled_factor};

    #[test]
    fn factor_peaks_at_the_viewport_middle() {
        assert_eq!(scrolled_factor(450.0, 100.0, 1000.0), 1.0);
        assert_eq!(scrolled_factor(-50.0, 100.0, 1000.0), 0.0);
        assert_eq!(scrolled_factor(950.0, 100.0, 1000.0), 0.0);
        assert_eq!(scrolled_factor(0.0, 100.0, 1000.0), 0.1);
        assert_eq!(scrolled_factor(700.0, 100.0, 1000.0), 0.5);
    }

    #[test]
    fn off_screen_children_get_zero() {
        assert_eq!(scrolled_factor(-200.0, 100.0, 1000.0), 0.0);
        assert_eq!(scrolled_factor(1000.0, 100.0, 1000.0), 0.0);
    }

    #[test]
    fn degenerate_viewport_gets_zero() {
        assert_eq!(scrolled_factor(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scrolled_factor(0.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn midpoints_round_half_up() {
        // Midpoint 499.5 rounds to 500, the exact middle.
        assert_eq!(scrolled_factor(449.0, 101.0, 1000.0), 1.0);
    }

    #[test]
    fn factor_is_monotonic_toward_the_middle() {
        let mut last = -1.0_f32;
        for start in (-50..=450).step_by(10) {
            let f = scrolled_factor(f64::from(start), 100.0, 1000.0);
            assert!(f >= last, "factor decreased at {start}");
            last = f;
        }
        for start in (450..=950).step_by(10) {
            let f = scrolled_factor(f64::from(start), 100.0, 1000.0);
            assert!(f <= last, "factor increased at {start}");
            last = f;
        }
    }

    #[test]
    fn min_maps_to_edges_and_max_to_center() {
        let envelope = Envelope::new(0.5, 1.0);
        assert_eq!(envelope.at(0.0), 0.5);
        assert_eq!(envelope.at(1.0), 1.0);
        assert_eq!(envelope.at(0.5), 0.75);
    }

    #[test]
    fn unit_envelope_skips_the_factor() {
        let value = Envelope::UNIT.resolve(|| unreachable!("factor computed for unit envelope"));
        assert_eq!(value, 1.0);
        assert!((Envelope::new(0.2, 0.8).resolve(|| 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn near_unit_envelope_still_attenuates() {
        let envelope = Envelope::new(0.999_999, 1.0);
        assert!(!envelope.is_unit());
        assert!(envelope.resolve(|| 0.0) < 1.0);
    }
}
